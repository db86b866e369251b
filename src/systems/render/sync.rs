use bevy::prelude::*;

use crate::components::{GroundPatch, PlayerController, ScatterSlot, VehicleModel, VehicleState};
use crate::rendering::{ground_patch, AIRPLANE_SCALE};
use crate::resources::{
    FlyoverConfig, Ground, OrbitCamera, ScatterAttributes, ScatterField, WorldOffset,
};

pub fn sync_vehicle_model(
    vehicle: Query<&VehicleState, With<PlayerController>>,
    mut models: Query<&mut Transform, With<VehicleModel>>,
) {
    let Ok(state) = vehicle.get_single() else {
        return;
    };
    for mut transform in models.iter_mut() {
        *transform = Transform {
            translation: state.local_position(),
            rotation: state.attitude(),
            scale: Vec3::splat(AIRPLANE_SCALE),
        };
    }
}

/// Place every slot entity at its object's position relative to the vehicle.
pub fn sync_scatter_slots<A: ScatterAttributes>(
    field: Res<ScatterField<A>>,
    offset: Res<WorldOffset>,
    ground: Res<Ground>,
    mut slots: Query<(&ScatterSlot<A>, &mut Transform)>,
) {
    let objects = field.objects();
    for (slot, mut transform) in slots.iter_mut() {
        let Some(object) = objects.get(slot.index) else {
            continue;
        };
        let local = offset.to_local(object.position);
        let below = ground.height_world(object.position.x, object.position.y);
        transform.translation = Vec3::new(
            local.x as f32,
            object.attributes.elevation(below) as f32,
            local.y as f32,
        );
        transform.scale = Vec3::splat(object.attributes.scale());
    }
}

/// Rebuild the ground patch for the current offset and heading.
pub fn update_ground_patch(
    config: Res<FlyoverConfig>,
    offset: Res<WorldOffset>,
    ground: Res<Ground>,
    vehicle: Query<&VehicleState, With<PlayerController>>,
    patches: Query<&Mesh3d, With<GroundPatch>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Ok(state) = vehicle.get_single() else {
        return;
    };
    for patch in patches.iter() {
        if let Some(mesh) = meshes.get_mut(&patch.0) {
            *mesh = ground_patch(&config.terrain, state.yaw, &offset, &ground).into_mesh();
        }
    }
}

pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    for mut transform in cameras.iter_mut() {
        *transform = orbit.view_transform();
    }
}

use bevy::prelude::*;

use crate::components::{
    GroundPatch, PlayerController, ScatterSlot, SkyBody, SkyLight, VehicleModel, VehicleState,
};
use crate::rendering::{ground_patch, ModelAssets, PartHandles, ScatterModel};
use crate::resources::{FlyoverConfig, Ground, OrbitCamera, ScatterField, WorldOffset};

/// Build the shared model assets and spawn the camera, the sky light, the
/// sun or moon and the ground patch.
#[allow(clippy::too_many_arguments)]
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    config: Res<FlyoverConfig>,
    orbit: Res<OrbitCamera>,
    offset: Res<WorldOffset>,
    ground: Res<Ground>,
    vehicle: Query<&VehicleState, With<PlayerController>>,
) {
    let assets = ModelAssets::build(&mut meshes, &mut materials, &mut images);

    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_deg.to_radians(),
            near: config.camera.near,
            far: config.camera.far,
            ..default()
        }),
        orbit.view_transform(),
    ));

    commands.spawn((
        Name::new("Sky light"),
        SkyLight,
        DirectionalLight {
            shadows_enabled: config.lighting.shadows,
            ..default()
        },
        Transform::default(),
    ));

    commands.spawn((
        Name::new("Sky body"),
        SkyBody,
        Mesh3d(assets.sky_body.mesh.clone()),
        MeshMaterial3d(assets.sky_body.material.clone()),
        Transform::default(),
    ));

    let heading = vehicle.get_single().map(|state| state.yaw).unwrap_or(0.0);
    let patch = ground_patch(&config.terrain, heading, &offset, &ground);
    commands.spawn((
        Name::new("Ground"),
        GroundPatch,
        Mesh3d(meshes.add(patch.into_mesh())),
        MeshMaterial3d(assets.ground.clone()),
        Transform::default(),
    ));

    info!("Scene set up");
    commands.insert_resource(assets);
}

pub fn spawn_vehicle_model(
    mut commands: Commands,
    assets: Res<ModelAssets>,
    vehicle: Query<&Name, With<PlayerController>>,
) {
    for name in vehicle.iter() {
        commands
            .spawn((
                Name::new(format!("{} model", name)),
                VehicleModel,
                Transform::default(),
                Visibility::default(),
            ))
            .with_children(|parent| spawn_parts(parent, &assets.airplane));
    }
}

/// One drawn entity per slot of the field. Slots are fixed for the lifetime
/// of the app, so this runs once.
pub fn spawn_scatter_slots<A: ScatterModel>(
    mut commands: Commands,
    assets: Res<ModelAssets>,
    field: Res<ScatterField<A>>,
) {
    let parts = A::parts(&assets);
    for index in 0..field.len() {
        commands
            .spawn((
                Name::new(format!("{} {}", field.name(), index)),
                ScatterSlot::<A>::new(index),
                Transform::default(),
                Visibility::default(),
            ))
            .with_children(|parent| spawn_parts(parent, parts));
    }
    debug!("Spawned {} {} slots", field.len(), field.name());
}

fn spawn_parts(parent: &mut ChildBuilder, parts: &[PartHandles]) {
    for part in parts {
        parent.spawn((
            Mesh3d(part.mesh.clone()),
            MeshMaterial3d(part.material.clone()),
            part.transform,
        ));
    }
}

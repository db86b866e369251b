use bevy::prelude::*;

use crate::plugins::{FlightSet, StartupStage};
use crate::resources::{CloudAttributes, HouseAttributes, TreeAttributes};
use crate::systems::render::{
    apply_orbit_camera, apply_time_of_day, setup_scene, spawn_scatter_slots,
    spawn_vehicle_model, sync_scatter_slots, sync_vehicle_model, update_ground_patch,
};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum RenderSet {
    Scene,
    Lighting,
}

/// Draws the simulation: models, ground patch, camera and lights.
pub struct FlyoverRenderPlugin;

impl Plugin for FlyoverRenderPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (RenderSet::Scene, RenderSet::Lighting)
                .chain()
                .after(FlightSet::Camera),
        )
        .add_systems(
            Startup,
            (
                setup_scene,
                spawn_vehicle_model,
                spawn_scatter_slots::<TreeAttributes>,
                spawn_scatter_slots::<HouseAttributes>,
                spawn_scatter_slots::<CloudAttributes>,
            )
                .chain()
                .in_set(StartupStage::BuildVisuals),
        )
        .add_systems(
            Update,
            (
                (
                    sync_vehicle_model,
                    sync_scatter_slots::<TreeAttributes>,
                    sync_scatter_slots::<HouseAttributes>,
                    sync_scatter_slots::<CloudAttributes>,
                    update_ground_patch,
                    apply_orbit_camera,
                )
                    .in_set(RenderSet::Scene),
                apply_time_of_day.in_set(RenderSet::Lighting),
            ),
        );
    }
}

use bevy::prelude::*;

use crate::components::{PlayerController, VehicleConfig, VehicleState};
use crate::plugins::{FlightCommand, FlightSet, StartupSequencePlugin, StartupStage};
use crate::resources::{
    CloudAttributes, FlyoverConfig, Ground, HouseAttributes, OrbitCamera, ScatterField,
    TreeAttributes, WorldOffset,
};
use crate::systems::{
    apply_flight_commands, camera_follow_system, initialize_scatter_field, update_scatter_field,
    vehicle_kinematics_system,
};
use crate::utils::RngManager;

/// The whole simulation: vehicle, world offset, ground, scatter fields,
/// orbit camera and time of day. Draws nothing, so it also runs headless.
pub struct FlightSimPlugin {
    config: FlyoverConfig,
}

impl FlightSimPlugin {
    pub fn new(config: FlyoverConfig) -> Self {
        FlightSimPlugin { config }
    }

    fn setup_vehicle(
        mut commands: Commands,
        config: VehicleConfig,
        offset: &WorldOffset,
        ground: &Ground,
    ) {
        let state = VehicleState::spawn(&config, offset, ground);
        info!(
            "Spawning {} at altitude {:.1}, speed {:.1}, heading {:.1}",
            config.name, state.altitude, state.speed, state.yaw
        );

        commands.spawn((
            Name::new(config.name.to_string()),
            config,
            state,
            PlayerController::new(),
        ));
    }
}

impl Plugin for FlightSimPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        if let Err(err) = config.validate() {
            warn!("Running with a config that does not validate: {}", err);
        }
        let scenery = &config.scenery;
        let rng = RngManager::new(scenery.seed);

        app.add_plugins(StartupSequencePlugin)
            .add_event::<FlightCommand>()
            .insert_resource(WorldOffset::default())
            .insert_resource(Ground::from_config(&config.terrain.ground))
            .insert_resource(OrbitCamera::from_config(&config.camera))
            .insert_resource(config.lighting.time_of_day)
            .insert_resource(ScatterField::trees(
                scenery.trees.clone(),
                rng.get_rng("trees"),
            ))
            .insert_resource(ScatterField::houses(
                scenery.houses.clone(),
                rng.get_rng("houses"),
            ))
            .insert_resource(ScatterField::clouds(
                scenery.clouds.clone(),
                (scenery.cloud_height_min, scenery.cloud_height_max),
                scenery.cloud_clearance,
                rng.get_rng("clouds"),
            ))
            .insert_resource(config.clone());

        let vehicle = config.vehicle.clone();
        app.add_systems(
            Startup,
            (move |commands: Commands, offset: Res<WorldOffset>, ground: Res<Ground>| {
                Self::setup_vehicle(commands, vehicle.clone(), &offset, &ground)
            })
            .in_set(StartupStage::BuildVehicle),
        )
        .add_systems(
            Startup,
            (
                initialize_scatter_field::<TreeAttributes>,
                initialize_scatter_field::<HouseAttributes>,
                initialize_scatter_field::<CloudAttributes>,
            )
                .in_set(StartupStage::BuildScenery),
        )
        .add_systems(
            Update,
            (
                apply_flight_commands.in_set(FlightSet::Commands),
                vehicle_kinematics_system.in_set(FlightSet::Kinematics),
                (
                    update_scatter_field::<TreeAttributes>,
                    update_scatter_field::<HouseAttributes>,
                    update_scatter_field::<CloudAttributes>,
                )
                    .in_set(FlightSet::Scatter),
                camera_follow_system.in_set(FlightSet::Camera),
            ),
        );
    }
}

use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildVehicle,
    BuildScenery,
    BuildVisuals,
}

/// Per-frame ordering: everything the player asked for is applied before the
/// tick, the tick before the scenery follows, and the camera last.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Commands,
    Kinematics,
    Scatter,
    Camera,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildVehicle,
                StartupStage::BuildScenery,
                StartupStage::BuildVisuals,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (
                FlightSet::Input,
                FlightSet::Commands,
                FlightSet::Kinematics,
                FlightSet::Scatter,
                FlightSet::Camera,
            )
                .chain(),
        );
    }
}

use bevy::prelude::*;

use crate::components::{PlayerController, VehicleConfig, VehicleState};
use crate::plugins::FlightCommand;
use crate::resources::{OrbitCamera, TimeOfDay};

type ControlledVehicles<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut VehicleState,
        &'static VehicleConfig,
        &'static PlayerController,
    ),
>;

/// Apply queued commands before the kinematics tick.
///
/// Vehicle commands only reach vehicles under active player control. Commands
/// are applied in the order they were sent.
pub fn apply_flight_commands(
    mut flight_commands: EventReader<FlightCommand>,
    mut vehicles: ControlledVehicles,
    mut camera: ResMut<OrbitCamera>,
    mut time_of_day: ResMut<TimeOfDay>,
    mut exit: EventWriter<AppExit>,
) {
    for command in flight_commands.read() {
        match *command {
            FlightCommand::Yaw(delta) => {
                for_each_active(&mut vehicles, |state, _| state.change_yaw(delta))
            }
            FlightCommand::Pitch(delta) => for_each_active(&mut vehicles, |state, config| {
                state.change_pitch(delta, config)
            }),
            FlightCommand::Roll(delta) => for_each_active(&mut vehicles, |state, config| {
                state.change_roll(delta, config)
            }),
            FlightCommand::Speed(delta) => for_each_active(&mut vehicles, |state, config| {
                state.change_speed(delta, config)
            }),
            FlightCommand::ResetOrientation => {
                for_each_active(&mut vehicles, |state, _| state.reset_orientation())
            }
            FlightCommand::Orbit { yaw, pitch } => camera.orbit(yaw, pitch),
            FlightCommand::Zoom(delta) => camera.zoom(delta),
            FlightCommand::SetTimeOfDay(index) => {
                let next = TimeOfDay::from_index(index);
                if time_of_day.set_if_neq(next) {
                    info!("Time of day set to {:?}", next);
                }
            }
            FlightCommand::Quit => {
                info!("Quit requested");
                exit.send(AppExit::Success);
            }
        }
    }
}

fn for_each_active(
    vehicles: &mut ControlledVehicles,
    mut apply: impl FnMut(&mut VehicleState, &VehicleConfig),
) {
    for (mut state, config, controller) in vehicles.iter_mut() {
        if controller.active {
            apply(&mut state, config);
        }
    }
}

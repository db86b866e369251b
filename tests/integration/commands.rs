use approx::assert_relative_eq;
use bevy::prelude::*;
use flyover::{
    components::{PlayerController, VehicleState},
    plugins::FlightCommand,
    resources::{OrbitCamera, TimeOfDay},
    systems::commands_for_key,
};

use crate::common::TestAppBuilder;

fn vehicle(app: &mut crate::common::TestApp) -> VehicleState {
    *app.query_single::<VehicleState>().expect("vehicle spawned")
}

#[test]
fn test_attitude_commands_apply_before_tick() {
    let mut app = TestAppBuilder::new().build();

    app.send(FlightCommand::Yaw(-3.0));
    app.send(FlightCommand::Roll(3.0));
    app.run_frame();

    let state = vehicle(&mut app);
    assert_relative_eq!(state.yaw, 357.0);
    assert_relative_eq!(state.roll, 3.0);
}

#[test]
fn test_repeated_pitch_saturates() {
    let mut app = TestAppBuilder::new().build();
    for _ in 0..30 {
        app.send(FlightCommand::Pitch(3.0));
    }
    app.run_frame();
    assert_eq!(vehicle(&mut app).pitch, 45.0);
}

#[test]
fn test_reset_levels_but_keeps_heading() {
    let mut app = TestAppBuilder::new().build();
    app.send(FlightCommand::Yaw(30.0));
    app.send(FlightCommand::Pitch(-9.0));
    app.send(FlightCommand::Roll(12.0));
    app.send(FlightCommand::ResetOrientation);
    app.run_frame();

    let state = vehicle(&mut app);
    assert_eq!((state.yaw, state.pitch, state.roll), (30.0, 0.0, 0.0));
}

#[test]
fn test_plus_key_throttles_and_zooms() {
    let mut app = TestAppBuilder::new().build();
    for command in commands_for_key(KeyCode::Equal) {
        app.send(*command);
    }
    app.run_frame();

    assert_eq!(vehicle(&mut app).speed, 65.0);
    assert_eq!(app.resource::<OrbitCamera>().distance, 155.0);
}

#[test]
fn test_inactive_controller_ignores_vehicle_commands() {
    let mut app = TestAppBuilder::new().build();
    if let Some(mut controller) = app.query_single_mut::<PlayerController>() {
        controller.active = false;
    }

    app.send(FlightCommand::Yaw(10.0));
    app.send(FlightCommand::Speed(50.0));
    app.send(FlightCommand::Zoom(-40.0));
    app.run_frame();

    let state = vehicle(&mut app);
    assert_eq!(state.yaw, 0.0);
    assert_eq!(state.speed, 60.0);
    // Camera commands are not tied to the vehicle
    assert_eq!(app.resource::<OrbitCamera>().distance, 120.0);
}

#[test]
fn test_camera_orbit_and_zoom_clamp() {
    let mut app = TestAppBuilder::new().build();
    app.send(FlightCommand::Orbit {
        yaw: -50.0,
        pitch: 3.0,
    });
    for _ in 0..200 {
        app.send(FlightCommand::Zoom(-5.0));
    }
    app.run_frame();

    let camera = app.resource::<OrbitCamera>();
    assert_relative_eq!(camera.yaw, 355.0);
    assert_relative_eq!(camera.pitch, 33.0);
    assert_eq!(camera.distance, 20.0);
}

#[test]
fn test_time_of_day_switch_and_clamp() {
    let mut app = TestAppBuilder::new().build();
    assert_eq!(*app.resource::<TimeOfDay>(), TimeOfDay::Noon);

    app.send(FlightCommand::SetTimeOfDay(3));
    app.run_frame();
    assert_eq!(*app.resource::<TimeOfDay>(), TimeOfDay::Night);

    app.send(FlightCommand::SetTimeOfDay(1));
    app.run_frame();
    assert_eq!(*app.resource::<TimeOfDay>(), TimeOfDay::Sunrise);

    app.send(FlightCommand::SetTimeOfDay(-7));
    app.run_frame();
    assert_eq!(*app.resource::<TimeOfDay>(), TimeOfDay::Noon);
}

#[test]
fn test_quit_requests_exit() {
    let mut app = TestAppBuilder::new().build();
    assert!(app.app.should_exit().is_none());

    app.send(FlightCommand::Quit);
    app.run_frame();
    assert_eq!(app.app.should_exit(), Some(AppExit::Success));
}

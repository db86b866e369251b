use approx::assert_relative_eq;
use bevy::math::DVec2;
use flyover::{
    components::{VehicleConfig, VehicleState},
    resources::{Ground, GroundConfig, OrbitCamera, WorldOffset},
};

use crate::common::{assert_vehicle_state_valid, create_test_hills, TestAppBuilder};

#[test]
fn test_first_frame_does_not_move() {
    let mut app = TestAppBuilder::new().build();

    assert_eq!(app.resource::<WorldOffset>().current(), DVec2::ZERO);
    let state = *app.query_single::<VehicleState>().expect("vehicle spawned");
    assert_eq!(state.altitude, 40.0);
    assert_eq!(state.speed, 60.0);
    assert_eq!(state.yaw, 0.0);
}

#[test]
fn test_level_flight_scrolls_world() {
    let mut app = TestAppBuilder::new().with_time_step(0.1).build();

    // One second of flight at the default 60 units/s heading +Z
    app.run_steps(10);

    let offset = app.resource::<WorldOffset>().current();
    assert_relative_eq!(offset.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(offset.y, 60.0, epsilon = 1e-6);

    let state = *app.query_single::<VehicleState>().expect("vehicle spawned");
    assert_eq!(state.altitude, 40.0);
    assert_eq!(state.local_position().x, 0.0);
    assert_eq!(state.local_position().z, 0.0);
}

#[test]
fn test_camera_tracks_vehicle() {
    let mut app = TestAppBuilder::new().with_time_step(0.1).build();
    if let Some(mut state) = app.query_single_mut::<VehicleState>() {
        state.altitude = 90.0;
    }
    app.run_frame();

    let camera = app.resource::<OrbitCamera>();
    assert_relative_eq!(camera.target.y, 105.0, epsilon = 1e-3);
    assert_eq!(camera.target.x, 0.0);
    assert_eq!(camera.target.z, 0.0);
}

#[test]
fn test_long_climb_and_dive_stay_in_envelope() {
    let mut app = TestAppBuilder::new().with_time_step(0.05).build();
    let config = app
        .query_single::<VehicleConfig>()
        .expect("vehicle spawned")
        .clone();

    if let Some(mut state) = app.query_single_mut::<VehicleState>() {
        state.pitch = 40.0;
    }
    for _ in 0..200 {
        app.run_frame();
        let state = *app.query_single::<VehicleState>().expect("vehicle spawned");
        assert_vehicle_state_valid(&state, &config);
    }
    assert_eq!(app.query_single::<VehicleState>().map(|s| s.altitude), Some(120.0));

    if let Some(mut state) = app.query_single_mut::<VehicleState>() {
        state.pitch = -40.0;
    }
    for _ in 0..200 {
        app.run_frame();
        let state = *app.query_single::<VehicleState>().expect("vehicle spawned");
        assert_vehicle_state_valid(&state, &config);
        assert!(state.altitude >= config.min_clearance);
    }
    assert_eq!(app.query_single::<VehicleState>().map(|s| s.altitude), Some(20.0));
}

#[test]
fn test_clearance_over_hills() {
    let mut app = TestAppBuilder::new()
        .with_ground(create_test_hills())
        .with_time_step(0.05)
        .build();

    if let Some(mut state) = app.query_single_mut::<VehicleState>() {
        state.pitch = -30.0;
        state.yaw = 35.0;
    }

    for _ in 0..400 {
        app.run_frame();
        let offset = app.resource::<WorldOffset>().current();
        let below = app.resource::<Ground>().height_world(offset.x, offset.y);
        let state = *app.query_single::<VehicleState>().expect("vehicle spawned");
        assert!(
            state.altitude >= below + 20.0 - 1e-9,
            "altitude {} below clearance over ground {}",
            state.altitude,
            below
        );
    }
}

#[test]
fn test_raised_flat_ground_lifts_vehicle() {
    let mut app = TestAppBuilder::new()
        .with_ground(GroundConfig::Flat { height: 30.0 })
        .with_time_step(0.1)
        .build();

    app.run_frame();
    let state = *app.query_single::<VehicleState>().expect("vehicle spawned");
    assert_eq!(state.altitude, 50.0);
}

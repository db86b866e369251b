use bevy::prelude::*;

use crate::components::{PlayerController, VehicleState};
use crate::resources::OrbitCamera;

/// Keep the orbit camera aimed just above the vehicle.
pub fn camera_follow_system(
    vehicle: Query<&VehicleState, With<PlayerController>>,
    mut camera: ResMut<OrbitCamera>,
) {
    if let Ok(state) = vehicle.get_single() {
        camera.follow(state.local_position());
    }
}

use bevy::prelude::*;

use crate::components::{PlayerController, VehicleState};
use crate::resources::{ScatterAttributes, ScatterField, WorldOffset};

/// Populate a scatter field around the vehicle's starting point.
pub fn initialize_scatter_field<A: ScatterAttributes>(
    offset: Res<WorldOffset>,
    mut field: ResMut<ScatterField<A>>,
) {
    field.initialize(offset.current());
}

/// Recycle objects the vehicle has left behind into the sector ahead of it.
pub fn update_scatter_field<A: ScatterAttributes>(
    vehicle: Query<&VehicleState, With<PlayerController>>,
    offset: Res<WorldOffset>,
    mut field: ResMut<ScatterField<A>>,
) {
    let Ok(state) = vehicle.get_single() else {
        return;
    };
    field.update(offset.current(), state.yaw);
}

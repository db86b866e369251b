use bevy::prelude::*;

use crate::components::{PlayerController, VehicleConfig, VehicleState};
use crate::resources::{Ground, WorldOffset};

/// Advance the player vehicle by the frame's elapsed time.
///
/// This is the only writer of the [`WorldOffset`]. The first frame after
/// startup has a zero delta and leaves everything untouched.
pub fn vehicle_kinematics_system(
    mut query: Query<(&mut VehicleState, &VehicleConfig), With<PlayerController>>,
    mut offset: ResMut<WorldOffset>,
    ground: Res<Ground>,
    time: Res<Time>,
) {
    let Ok((mut state, config)) = query.get_single_mut() else {
        return;
    };

    state.tick(config, time.delta_secs_f64(), &mut offset, &ground);
}

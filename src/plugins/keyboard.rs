use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::systems::keyboard_command_system;

/// Keyboard bindings for the player. Needs the input plugin.
pub struct KeyboardControlPlugin;

impl Plugin for KeyboardControlPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_command_system.in_set(FlightSet::Input));
    }
}

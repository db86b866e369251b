mod config;
mod state;

pub use config::VehicleConfig;
pub use state::VehicleState;

use bevy::prelude::*;

/// The vehicle the keyboard flies. Systems that move the world follow the
/// single entity carrying this marker; commands only reach it while `active`.
#[derive(Component, Debug)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

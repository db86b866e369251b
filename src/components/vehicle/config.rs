use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{FlyoverError, PITCH_LIMIT_DEG, ROLL_LIMIT_DEG};

/// Flight envelope and start state of the vehicle.
#[derive(Component, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VehicleConfig {
    pub name: String,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Lowest allowed height above the ground below the vehicle.
    pub min_clearance: f64,
    pub max_altitude: f64,
    /// Symmetric pitch limit (degrees).
    pub max_pitch: f64,
    /// Symmetric roll limit (degrees).
    pub max_roll: f64,
    /// Vertical rate multiplier relative to cruise speed. Arcade tuning, not aerodynamics.
    pub climb_factor: f64,
    pub start_altitude: f64,
    pub start_speed: f64,
    pub start_yaw: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            name: "airplane".to_string(),
            min_speed: 10.0,
            max_speed: 200.0,
            min_clearance: 20.0,
            max_altitude: 120.0,
            max_pitch: PITCH_LIMIT_DEG,
            max_roll: ROLL_LIMIT_DEG,
            climb_factor: 2.0,
            start_altitude: 40.0,
            start_speed: 60.0,
            start_yaw: 0.0,
        }
    }
}

impl VehicleConfig {
    pub fn validate(&self) -> Result<(), FlyoverError> {
        let numbers = [
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("min_clearance", self.min_clearance),
            ("max_altitude", self.max_altitude),
            ("max_pitch", self.max_pitch),
            ("max_roll", self.max_roll),
            ("climb_factor", self.climb_factor),
            ("start_altitude", self.start_altitude),
            ("start_speed", self.start_speed),
            ("start_yaw", self.start_yaw),
        ];
        if let Some((field, value)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(FlyoverError::InvalidConfig(format!(
                "vehicle {} must be finite, got {}",
                field, value
            )));
        }

        if !(self.min_speed >= 0.0 && self.min_speed <= self.max_speed) {
            return Err(FlyoverError::InvalidConfig(format!(
                "vehicle speed range [{}, {}] must satisfy 0 <= min <= max",
                self.min_speed, self.max_speed
            )));
        }
        if !(self.min_clearance <= self.max_altitude) {
            return Err(FlyoverError::InvalidConfig(format!(
                "vehicle min_clearance {} exceeds max_altitude {}",
                self.min_clearance, self.max_altitude
            )));
        }
        if !(self.max_pitch >= 0.0 && self.max_roll >= 0.0) {
            return Err(FlyoverError::InvalidConfig(
                "vehicle pitch and roll limits must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

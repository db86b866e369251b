use bevy::math::{DVec2, DVec3};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::VehicleConfig;
use crate::resources::{Ground, WorldOffset};
use crate::utils::wrap_degrees;

/// Attitude, speed and altitude of the vehicle. Angles are in degrees.
///
/// The vehicle has no planar position of its own: it sits at the local origin
/// and its world position is the [`WorldOffset`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Heading in `[0, 360)`. 0 flies along +Z, 90 along +X.
    pub yaw: f64,
    /// Positive is nose up.
    pub pitch: f64,
    pub roll: f64,
    pub speed: f64,
    pub altitude: f64,
}

impl VehicleState {
    /// Start state described by the config, clamped into its envelope.
    ///
    /// Only the ceiling is known here; use [`VehicleState::spawn`] to also
    /// respect the ground clearance.
    pub fn from_config(config: &VehicleConfig) -> Self {
        Self {
            yaw: wrap_degrees(config.start_yaw),
            pitch: 0.0,
            roll: 0.0,
            speed: config.start_speed.clamp(config.min_speed, config.max_speed),
            altitude: config.start_altitude.min(config.max_altitude),
        }
    }

    /// Start state placed inside the altitude band over the ground below the origin.
    pub fn spawn(config: &VehicleConfig, offset: &WorldOffset, ground: &Ground) -> Self {
        let mut state = Self::from_config(config);
        state.clamp_altitude(state.altitude, config, offset, ground);
        state
    }

    pub fn change_yaw(&mut self, delta: f64) {
        self.yaw = wrap_degrees(self.yaw + delta);
    }

    pub fn change_pitch(&mut self, delta: f64, config: &VehicleConfig) {
        self.pitch = (self.pitch + delta).clamp(-config.max_pitch, config.max_pitch);
    }

    pub fn change_roll(&mut self, delta: f64, config: &VehicleConfig) {
        self.roll = (self.roll + delta).clamp(-config.max_roll, config.max_roll);
    }

    pub fn change_speed(&mut self, delta: f64, config: &VehicleConfig) {
        self.speed = (self.speed + delta).clamp(config.min_speed, config.max_speed);
    }

    /// Level the wings and the nose; heading is kept.
    pub fn reset_orientation(&mut self) {
        self.pitch = 0.0;
        self.roll = 0.0;
    }

    /// Unit vector along the nose.
    pub fn forward(&self) -> DVec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        DVec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
    }

    /// Advance the vehicle by `dt` seconds.
    ///
    /// The planar part of the motion is handed to `offset` so the world moves
    /// under the vehicle. The vertical part changes the altitude, amplified by
    /// the climb factor and clamped between the ground clearance and the
    /// ceiling. Returns the planar displacement applied, zero when `dt <= 0`.
    pub fn tick(
        &mut self,
        config: &VehicleConfig,
        dt: f64,
        offset: &mut WorldOffset,
        ground: &Ground,
    ) -> DVec2 {
        if !(dt > 0.0) {
            return DVec2::ZERO;
        }

        let forward = self.forward();
        let travel = self.speed * dt;
        let displacement = DVec2::new(forward.x, forward.z) * travel;
        offset.advance(displacement.x, displacement.y);

        let climb = forward.y * travel * config.climb_factor;
        self.clamp_altitude(self.altitude + climb, config, offset, ground);

        displacement
    }

    fn clamp_altitude(
        &mut self,
        altitude: f64,
        config: &VehicleConfig,
        offset: &WorldOffset,
        ground: &Ground,
    ) {
        let floor = ground.height_local(0.0, 0.0, offset) + config.min_clearance;
        // Ceiling wins if the ground ever rises above it
        self.altitude = altitude.max(floor).min(config.max_altitude);
    }

    /// Position in the local frame, where the vehicle is pinned above the origin.
    pub fn local_position(&self) -> Vec3 {
        Vec3::new(0.0, self.altitude as f32, 0.0)
    }

    /// Model rotation: heading about +Y, then pitch, then roll about the nose.
    pub fn attitude(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            (self.yaw as f32).to_radians(),
            -(self.pitch as f32).to_radians(),
            (self.roll as f32).to_radians(),
        )
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::from_config(&VehicleConfig::default())
    }
}

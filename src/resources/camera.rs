use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{wrap_degrees_f32, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub target: [f32; 3],
    pub distance: f32,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    /// How far above the vehicle the camera aims.
    pub follow_lead: f32,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            target: [0.0, 40.0, 0.0],
            distance: 160.0,
            yaw_deg: 45.0,
            pitch_deg: 30.0,
            follow_lead: 15.0,
            fov_deg: 60.0,
            near: 0.1,
            far: 5000.0,
        }
    }
}

/// Camera orbiting a target point in the vehicle-local frame.
///
/// Yaw and pitch are degrees, both wrapped into `[0, 360)`. Pitch is wrapped
/// rather than clamped, so orbiting past the pole flips the view.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub follow_lead: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            target: Vec3::from_array(config.target),
            yaw: wrap_degrees_f32(config.yaw_deg),
            pitch: wrap_degrees_f32(config.pitch_deg),
            distance: config
                .distance
                .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE),
            follow_lead: config.follow_lead,
        }
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Aim slightly above the tracked point.
    pub fn follow(&mut self, tracked: Vec3) {
        self.set_target(tracked + Vec3::Y * self.follow_lead);
    }

    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = wrap_degrees_f32(self.yaw + d_yaw);
        self.pitch = wrap_degrees_f32(self.pitch + d_pitch);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Camera position on the sphere around the target.
    pub fn eye(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.target
            + Vec3::new(
                pitch.cos() * yaw.sin(),
                pitch.sin(),
                pitch.cos() * yaw.cos(),
            ) * self.distance
    }

    pub fn view_transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

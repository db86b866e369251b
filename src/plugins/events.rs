use bevy::prelude::*;

/// A discrete request from the player, applied between frames before the
/// kinematics tick. Angles are degrees.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum FlightCommand {
    Yaw(f64),
    Pitch(f64),
    Roll(f64),
    Speed(f64),
    ResetOrientation,
    Orbit { yaw: f32, pitch: f32 },
    Zoom(f32),
    /// Index into the time-of-day presets; out-of-range values are clamped.
    SetTimeOfDay(i64),
    Quit,
}

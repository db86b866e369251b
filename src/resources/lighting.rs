use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::GLOBAL_AMBIENT;

/// Time of day, selecting one of four fixed lighting presets.
#[derive(
    Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    #[default]
    Noon,
    Sunrise,
    Sunset,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Noon,
        TimeOfDay::Sunrise,
        TimeOfDay::Sunset,
        TimeOfDay::Night,
    ];

    /// Any index outside `0..=3` is clamped to the nearest preset.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.clamp(0, 3) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn preset(self) -> LightingPreset {
        match self {
            TimeOfDay::Noon => LightingPreset {
                light_position: Vec3::new(0.0, 300.0, 0.0),
                ambient: [0.30, 0.30, 0.35],
                diffuse: [1.0, 1.0, 0.95],
                specular: [0.8, 0.8, 0.7],
                background: [0.47, 0.73, 1.0],
            },
            TimeOfDay::Sunrise => LightingPreset {
                light_position: Vec3::new(-250.0, 180.0, 160.0),
                ambient: [0.25, 0.18, 0.18],
                diffuse: [1.0, 0.7, 0.4],
                specular: [0.9, 0.8, 0.6],
                background: [0.90, 0.60, 0.40],
            },
            TimeOfDay::Sunset => LightingPreset {
                light_position: Vec3::new(250.0, 180.0, -160.0),
                ambient: [0.22, 0.16, 0.20],
                diffuse: [1.0, 0.6, 0.5],
                specular: [0.9, 0.7, 0.7],
                background: [0.85, 0.45, 0.50],
            },
            TimeOfDay::Night => LightingPreset {
                light_position: Vec3::new(0.0, 260.0, 0.0),
                ambient: [0.06, 0.06, 0.12],
                diffuse: [0.30, 0.30, 0.55],
                specular: [0.50, 0.50, 0.80],
                background: [0.02, 0.02, 0.07],
            },
        }
    }

    /// Colour of the sun or moon drawn at the light position.
    pub fn sky_body_color(self) -> [f32; 3] {
        match self {
            TimeOfDay::Night => [0.9, 0.9, 1.0],
            _ => [1.0, 0.9, 0.4],
        }
    }

    pub fn light_position(self) -> Vec3 {
        self.preset().light_position
    }
}

/// Light and sky colours for one time of day, as sRGB triples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingPreset {
    pub light_position: Vec3,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    /// Not applied: Bevy's PBR lights have no separate specular colour.
    pub specular: [f32; 3],
    pub background: [f32; 3],
}

impl LightingPreset {
    /// Light-specific ambient plus the scene-wide ambient floor, per channel
    /// capped at 1.
    pub fn total_ambient(&self) -> [f32; 3] {
        std::array::from_fn(|i| (self.ambient[i] + GLOBAL_AMBIENT[i]).min(1.0))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    pub time_of_day: TimeOfDay,
    /// Off unless asked for.
    pub shadows: bool,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            time_of_day: TimeOfDay::Noon,
            shadows: false,
        }
    }
}

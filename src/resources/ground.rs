use bevy::prelude::*;
use noise::{NoiseFn, OpenSimplex};
use serde::{Deserialize, Serialize};

use crate::resources::WorldOffset;

/// A terrain height query in world coordinates.
pub trait HeightField: Send + Sync {
    fn height(&self, x: f64, z: f64) -> f64;
}

/// Level ground at a fixed height.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatGround {
    pub height: f64,
}

impl HeightField for FlatGround {
    fn height(&self, _x: f64, _z: f64) -> f64 {
        self.height
    }
}

/// Gentle multi-octave OpenSimplex hills.
pub struct RollingHills {
    noise: OpenSimplex,
    amplitude: f64,
    wavelength: f64,
    octaves: u32,
}

impl RollingHills {
    pub fn new(seed: u32, amplitude: f64, wavelength: f64, octaves: u32) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
            amplitude,
            wavelength: wavelength.max(f64::EPSILON),
            octaves: octaves.max(1),
        }
    }
}

impl HeightField for RollingHills {
    fn height(&self, x: f64, z: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0 / self.wavelength;
        let mut value = 0.0;
        let mut weight = 0.0;

        for _ in 0..self.octaves {
            value += self.noise.get([x * frequency, z * frequency]) * amplitude;
            weight += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        // Keep the surface between zero and the amplitude
        let normalized = (value / weight).clamp(-1.0, 1.0);
        (normalized * 0.5 + 0.5) * self.amplitude
    }
}

/// Which height field the ground uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroundConfig {
    Flat {
        height: f64,
    },
    Hills {
        seed: u32,
        amplitude: f64,
        wavelength: f64,
        octaves: u32,
    },
}

impl Default for GroundConfig {
    fn default() -> Self {
        GroundConfig::Flat { height: 0.0 }
    }
}

/// The ground height service shared by kinematics, scenery placement and the
/// ground mesh.
#[derive(Resource)]
pub struct Ground {
    field: Box<dyn HeightField>,
}

impl Default for Ground {
    fn default() -> Self {
        Self::new(FlatGround::default())
    }
}

impl Ground {
    pub fn new(field: impl HeightField + 'static) -> Self {
        Self {
            field: Box::new(field),
        }
    }

    pub fn from_config(config: &GroundConfig) -> Self {
        match *config {
            GroundConfig::Flat { height } => Self::new(FlatGround { height }),
            GroundConfig::Hills {
                seed,
                amplitude,
                wavelength,
                octaves,
            } => Self::new(RollingHills::new(seed, amplitude, wavelength, octaves)),
        }
    }

    pub fn height_world(&self, wx: f64, wz: f64) -> f64 {
        self.field.height(wx, wz)
    }

    /// Height below a point given in the vehicle-local frame.
    pub fn height_local(&self, lx: f64, lz: f64, offset: &WorldOffset) -> f64 {
        let origin = offset.current();
        self.field.height(lx + origin.x, lz + origin.y)
    }
}

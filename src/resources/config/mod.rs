pub mod scenery;
pub mod terrain;
pub mod window;

pub use scenery::SceneryConfig;
pub use terrain::TerrainConfig;
pub use window::WindowConfig;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::VehicleConfig;
use crate::resources::{CameraConfig, LightingConfig};
use crate::utils::FlyoverError;

/// Everything needed to start the demo. Every field has a default, so a
/// config file only has to name what it changes.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlyoverConfig {
    pub window: WindowConfig,
    pub vehicle: VehicleConfig,
    pub camera: CameraConfig,
    pub terrain: TerrainConfig,
    pub scenery: SceneryConfig,
    pub lighting: LightingConfig,
}

impl FlyoverConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FlyoverError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FlyoverError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `<config dir>/flyover/config.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flyover").join("config.yaml"))
    }

    /// Load an explicitly requested file, else the per-user file when it
    /// exists, else the built-in defaults. Returns the file that was used.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), FlyoverError> {
        let path = match explicit {
            Some(path) => Some(path),
            None => Self::default_path().filter(|path| path.is_file()),
        };

        match path {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn validate(&self) -> Result<(), FlyoverError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(FlyoverError::InvalidConfig(
                "window size must be non-zero".to_string(),
            ));
        }

        self.vehicle.validate()?;

        self.scenery.trees.validate("trees")?;
        self.scenery.houses.validate("houses")?;
        self.scenery.clouds.validate("clouds")?;
        let scenery = &self.scenery;
        if ![scenery.cloud_height_min, scenery.cloud_height_max, scenery.cloud_clearance]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(FlyoverError::InvalidConfig(
                "cloud heights and clearance must be finite".to_string(),
            ));
        }
        if !(scenery.cloud_height_min <= scenery.cloud_height_max) {
            return Err(FlyoverError::InvalidConfig(format!(
                "cloud height range [{}, {}] is reversed",
                self.scenery.cloud_height_min, self.scenery.cloud_height_max
            )));
        }

        let terrain = &self.terrain;
        if !(terrain.half_size > 0.0 && terrain.texture_scale > 0.0) || terrain.resolution == 0 {
            return Err(FlyoverError::InvalidConfig(
                "terrain half_size, texture_scale and resolution must be positive".to_string(),
            ));
        }
        if !(terrain.max_ground_height() + self.vehicle.min_clearance <= self.vehicle.max_altitude) {
            return Err(FlyoverError::InvalidConfig(format!(
                "ground can reach {} which leaves no room below max_altitude {}",
                terrain.max_ground_height() + self.vehicle.min_clearance,
                self.vehicle.max_altitude
            )));
        }

        if !(1.0..=179.0).contains(&self.camera.fov_deg) || !(self.camera.near > 0.0) {
            return Err(FlyoverError::InvalidConfig(format!(
                "camera fov {} or near plane {} out of range",
                self.camera.fov_deg, self.camera.near
            )));
        }

        Ok(())
    }
}

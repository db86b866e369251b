use serde::{Deserialize, Serialize};

use crate::resources::ScatterConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneryConfig {
    /// Master seed; each field derives its own stream from it.
    pub seed: u64,
    pub trees: ScatterConfig,
    pub houses: ScatterConfig,
    pub clouds: ScatterConfig,
    pub cloud_height_min: f64,
    pub cloud_height_max: f64,
    /// Clouds never float closer than this to the ground.
    pub cloud_clearance: f64,
}

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            seed: 1234,
            trees: ScatterConfig::trees(),
            houses: ScatterConfig::houses(),
            clouds: ScatterConfig::clouds(),
            cloud_height_min: 80.0,
            cloud_height_max: 160.0,
            cloud_clearance: 80.0,
        }
    }
}

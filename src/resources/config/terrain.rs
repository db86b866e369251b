use serde::{Deserialize, Serialize};

use crate::resources::GroundConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    pub ground: GroundConfig,
    /// Half the edge length of the square ground patch around the vehicle.
    pub half_size: f32,
    /// How far the patch is pushed back against the heading, so objects
    /// ahead of the vehicle never stand past its edge.
    pub trailing_offset: f32,
    /// World units covered by one repeat of the ground texture.
    pub texture_scale: f32,
    /// Grid cells per patch edge.
    pub resolution: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            ground: GroundConfig::default(),
            half_size: 200.0,
            trailing_offset: 40.0,
            texture_scale: 20.0,
            resolution: 32,
        }
    }
}

impl TerrainConfig {
    /// Highest point the configured ground can reach.
    pub fn max_ground_height(&self) -> f64 {
        match self.ground {
            GroundConfig::Flat { height } => height,
            GroundConfig::Hills { amplitude, .. } => amplitude,
        }
    }
}

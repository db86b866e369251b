use flyover::resources::{GroundConfig, ScatterConfig, SceneryConfig};

/// A small scenery so per-frame checks stay quick.
pub fn create_test_scenery(seed: u64) -> SceneryConfig {
    SceneryConfig {
        seed,
        trees: ScatterConfig {
            count: 40,
            ..ScatterConfig::trees()
        },
        houses: ScatterConfig {
            count: 6,
            ..ScatterConfig::houses()
        },
        clouds: ScatterConfig {
            count: 10,
            ..ScatterConfig::clouds()
        },
        ..SceneryConfig::default()
    }
}

pub fn create_test_hills() -> GroundConfig {
    GroundConfig::Hills {
        seed: 7,
        amplitude: 30.0,
        wavelength: 150.0,
        octaves: 3,
    }
}

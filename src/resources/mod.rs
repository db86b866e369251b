pub mod camera;
pub mod config;
pub mod ground;
pub mod lighting;
pub mod scatter;
pub mod world_offset;

pub use camera::{CameraConfig, OrbitCamera};
pub use config::{FlyoverConfig, SceneryConfig, TerrainConfig, WindowConfig};
pub use ground::{FlatGround, Ground, GroundConfig, HeightField, RollingHills};
pub use lighting::{LightingConfig, LightingPreset, TimeOfDay};
pub use scatter::{
    AttributeGenerator, CloudAttributes, HouseAttributes, ScatterAttributes, ScatterConfig,
    ScatterField, ScatterObject, TreeAttributes,
};
pub use world_offset::WorldOffset;

//! Scene description for the renderer: model parts, the ground patch mesh and
//! the shared GPU assets built from them.

pub mod assets;
pub mod ground;
pub mod models;
pub mod stack;

pub use assets::{
    grass_texture, grass_texture_data, part_material, shape_mesh, ModelAssets, PartHandles,
    ScatterModel, GRASS_TEXTURE_SIZE,
};
pub use ground::{ground_patch, patch_center, GroundPatchData};
pub use models::{Part, Shape, AIRPLANE_SCALE};
pub use stack::{ModelBuilder, Scope};

pub mod render;
pub mod vehicle;

pub use render::{GroundPatch, ScatterSlot, SkyBody, SkyLight, VehicleModel};
pub use vehicle::{PlayerController, VehicleConfig, VehicleState};

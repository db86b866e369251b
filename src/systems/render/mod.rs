mod lighting;
mod scene;
mod sync;

pub use lighting::apply_time_of_day;
pub use scene::{setup_scene, spawn_scatter_slots, spawn_vehicle_model};
pub use sync::{
    apply_orbit_camera, sync_scatter_slots, sync_vehicle_model, update_ground_patch,
};

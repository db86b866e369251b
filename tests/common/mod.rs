mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_field_around, assert_vehicle_state_valid};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};

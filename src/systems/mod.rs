mod camera;
mod controller;
mod kinematics;
pub mod render;
mod scatter;

pub use camera::camera_follow_system;
pub use controller::{apply_flight_commands, commands_for_key, keyboard_command_system};
pub use kinematics::vehicle_kinematics_system;
pub use scatter::{initialize_scatter_field, update_scatter_field};

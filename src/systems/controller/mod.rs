mod commands;
mod keyboard;

pub use commands::apply_flight_commands;
pub use keyboard::{commands_for_key, keyboard_command_system};

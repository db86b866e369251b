mod events;
mod flight;
mod keyboard;
mod render;
mod staging;

pub use events::FlightCommand;
pub use flight::FlightSimPlugin;
pub use keyboard::KeyboardControlPlugin;
pub use render::{FlyoverRenderPlugin, RenderSet};
pub use staging::{FlightSet, StartupSequencePlugin, StartupStage};

use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::PathBuf;

use flyover::plugins::{FlightSimPlugin, FlyoverRenderPlugin, KeyboardControlPlugin};
use flyover::resources::FlyoverConfig;
use flyover::utils::FlyoverError;

fn main() -> Result<(), FlyoverError> {
    // Optional first argument: path to a YAML config
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let (config, source) = FlyoverConfig::resolve(explicit)?;
    match &source {
        Some(path) => println!("Loaded config from {}", path.display()),
        None => println!("No config file found, using defaults"),
    }

    let window = Window {
        title: config.window.title.clone(),
        resolution: WindowResolution::new(config.window.width as f32, config.window.height as f32),
        ..default()
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins((
            FlightSimPlugin::new(config),
            KeyboardControlPlugin,
            FlyoverRenderPlugin,
        ))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(FlyoverError::Exit(code.get())),
    }
}

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlyoverError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("App exited with code {0}")]
    Exit(u8),
}

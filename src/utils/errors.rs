use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("World contains no submarine entity")]
    MissingSubmarine,

    #[error("World contains {0} submarine entities, expected exactly one")]
    MultipleSubmarines(usize),

    #[error("Unsupported world file format: {}", .0.display())]
    UnsupportedWorldFormat(PathBuf),

    #[error("Invalid entity {index}: {reason}")]
    InvalidEntity { index: usize, reason: String },

    #[error("Host engine error: {0}")]
    HostError(String),

    #[error("Invalid simulator state: {0}")]
    InvalidState(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

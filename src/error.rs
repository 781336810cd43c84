// src/error.rs
//
// Error types for the host side of the app. Rendering itself never fails.

use thiserror::Error;

/// Result type alias for fallible cloudvis operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// config.toml could not be found, read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// OSC receiver could not be bound
    #[error("OSC setup failed: {0}")]
    Osc(String),

    /// A capture could not be read back or saved
    #[error("Export failed: {0}")]
    Export(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

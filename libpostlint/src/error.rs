//! Error types for Postlint
//!
//! Validation findings are not errors: rule checks classify and always
//! return a result. These types cover the layers around the engine
//! (configuration, CLI input parsing).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PostlintError>;

#[derive(Error, Debug)]
pub enum PostlintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PostlintError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PostlintError::InvalidInput(_) => 3,
            PostlintError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

use std::io;

/// Errors that can occur during envlink operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Required variable `{0}` resolved to an empty value")]
    MissingRequiredValue(String),

    #[error("Computation error: {0}")]
    ComputationError(String),

    #[error("Profile error: {0}")]
    ProfileError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for envlink operations
pub type Result<T> = std::result::Result<T, Error>;

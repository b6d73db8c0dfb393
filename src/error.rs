//! Error types for component generation and the surrounding tooling.

use thiserror::Error;

/// Generation errors raised by the core or a generation backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    #[error("Backend failure: {0}")]
    Backend(String),

    #[error("Generation interrupted: {0}")]
    Interrupted(String),
}

impl GenerateError {
    pub fn invalid_identifier(name: &str, reason: impl Into<String>) -> Self {
        GenerateError::InvalidIdentifier {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced to the CLI and other outer callers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Generation failed: {0}")]
    Generate(#[from] GenerateError),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Output file already exists: {0}. Set `output.overwrite = true` to replace it.")]
    OutputExists(std::path::PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown component: {0}. Run `compgen list` to see the catalog.")]
    UnknownComponent(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

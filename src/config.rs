//! Configuration System
//!
//! Layered configuration for generated output and logging. Sources are merged in
//! order: built-in defaults, the global file, workspace files, then `COMPGEN_*`
//! environment variables.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompgenConfig {
    /// Where and how generated components are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output settings for `generate --write`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for generated files, relative to the workspace root unless absolute
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File extension without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Replace existing files
    #[serde(default)]
    pub overwrite: bool,
}

fn default_directory() -> PathBuf {
    PathBuf::from("src/components")
}

fn default_extension() -> String {
    "tsx".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            overwrite: false,
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.directory.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }
        if self.extension.is_empty() {
            return Err("Output extension cannot be empty".to_string());
        }
        if !self.extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!(
                "Output extension '{}' must be alphanumeric (no leading dot)",
                self.extension
            ));
        }
        Ok(())
    }

    /// Path of the file generated for component `name`.
    pub fn component_path(&self, workspace_root: &Path, name: &str) -> PathBuf {
        let directory = if self.directory.is_absolute() {
            self.directory.clone()
        } else {
            workspace_root.join(&self.directory)
        };
        directory.join(format!("{}.{}", name, self.extension))
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Output(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CompgenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.output.validate() {
            errors.push(ValidationError::Output(e));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "Invalid log format: {}",
                self.logging.format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

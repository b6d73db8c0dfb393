//! CLI parse: clap types for compgen. No behavior; definitions only.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

/// compgen - Generate UI component source from archetype requests
#[derive(Parser)]
#[command(name = "compgen")]
#[command(about = "Generate UI component source from archetype requests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a component from an archetype (button, card, input, modal, or any other tag)
    Generate {
        /// Archetype tag; unknown tags produce a generic container
        archetype: String,
        /// Component name, used for the props interface and the component value
        name: String,
        /// Extra option as key=value (repeatable); reserved, does not change output
        #[arg(long = "option", value_parser = parse_option)]
        options: Vec<(String, Value)>,
        /// Write to the configured output directory instead of stdout
        #[arg(long)]
        write: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List catalog components
    List {
        /// Category filter (all, input, layout, data, overlay)
        #[arg(long, default_value = "all")]
        category: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Generate a catalog component by id
    Show {
        /// Catalog id (see `compgen list`)
        id: String,
        /// Component name (defaults to the catalog display name)
        #[arg(long)]
        name: Option<String>,
        /// Write to the configured output directory instead of stdout
        #[arg(long)]
        write: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Parse `key=value`; the value is read as JSON when possible, otherwise as a string.
pub fn parse_option(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("Invalid option '{}': expected key=value", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Invalid option '{}': key cannot be empty", raw));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

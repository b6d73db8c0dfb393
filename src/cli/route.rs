//! CLI route: single route table and run context. Dispatches to the generator
//! session and the catalog, then to presentation.

use crate::catalog::{self, CategoryFilter};
use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_catalog_json, format_catalog_text, format_state_json};
use crate::config::{CompgenConfig, ConfigLoader};
use crate::error::ApiError;
use crate::request::ComponentRequest;
use crate::session::GeneratorSession;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace root and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: CompgenConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        if let Err(errors) = config.validate() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(ApiError::ConfigError(messages.join("; ")));
        }
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &CompgenConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        debug!(command = command_name(command), "Dispatching command");
        match command {
            Commands::Generate {
                archetype,
                name,
                options,
                write,
                format,
            } => {
                let request = options.iter().fold(
                    ComponentRequest::new(archetype.as_str(), name.as_str()),
                    |request, (key, value)| request.with_option(key.as_str(), value.clone()),
                );
                self.handle_generate(request, *write, format)
            }
            Commands::List { category, format } => self.handle_list(category, format),
            Commands::Show {
                id,
                name,
                write,
                format,
            } => {
                let entry =
                    catalog::find(id).ok_or_else(|| ApiError::UnknownComponent(id.clone()))?;
                let name = name.as_deref().unwrap_or(entry.name);
                self.handle_generate(ComponentRequest::new(entry.archetype(), name), *write, format)
            }
        }
    }

    fn handle_generate(
        &self,
        request: ComponentRequest,
        write: bool,
        format: &str,
    ) -> Result<String, ApiError> {
        check_format(format)?;
        let name = request.name.clone();

        let session = GeneratorSession::new();
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create async runtime: {}", e)))?;
        rt.block_on(session.generate(request));

        let state = session.state();
        if let Some(ref message) = state.last_error {
            return Err(ApiError::GenerationFailed(message.clone()));
        }

        let written = if write {
            Some(self.write_component(&name, &state.generated_source)?)
        } else {
            None
        };

        match (format, written) {
            ("json", written) => format_state_json(&state, written.as_deref()),
            (_, Some(path)) => Ok(format!("Wrote {}", path.display())),
            (_, None) => Ok(state.generated_source),
        }
    }

    fn write_component(&self, name: &str, source: &str) -> Result<PathBuf, ApiError> {
        let path = self.config.output.component_path(&self.workspace_root, name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true);
        if self.config.output.overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let mut file = options.open(&path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ApiError::OutputExists(path.clone()),
            _ => ApiError::IoError(e),
        })?;
        writeln!(file, "{}", source)?;

        info!(path = %path.display(), "Component written");
        Ok(path)
    }

    fn handle_list(&self, category: &str, format: &str) -> Result<String, ApiError> {
        check_format(format)?;
        let filter: CategoryFilter = category.parse().map_err(ApiError::ConfigError)?;
        let entries = catalog::filter(filter);
        if format == "json" {
            format_catalog_json(&entries, filter)
        } else {
            Ok(format_catalog_text(&entries, filter))
        }
    }
}

fn check_format(format: &str) -> Result<(), ApiError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(ApiError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources win key by key: defaults, global file, workspace files, environment.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("output.directory", "src/components")?
        .set_default("output.extension", "tsx")?
        .set_default("output.overwrite", false)
}

/// Environment overrides, e.g. `COMPGEN_OUTPUT__EXTENSION=jsx`.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("COMPGEN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}

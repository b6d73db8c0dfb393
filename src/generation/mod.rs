//! Component source generation: a pure, deterministic mapping from a
//! [`ComponentRequest`] to [`GeneratedSource`].
//!
//! The output is four sections separated by blank lines, always in this order:
//! imports, props interface, component implementation, commented usage example.

pub mod declaration;
pub mod implementation;
pub mod imports;
pub mod usage;

pub use imports::{Import, ImportSet};

use crate::request::{validate_identifier, ComponentRequest};
use crate::error::GenerateError;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Generated component source text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedSource(String);

impl GeneratedSource {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.0.lines()
    }
}

impl fmt::Display for GeneratedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<GeneratedSource> for String {
    fn from(source: GeneratedSource) -> Self {
        source.0
    }
}

impl Serialize for GeneratedSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Imports required by a request. Every shape calls `cn(...)`, the generic
/// container included.
pub fn collect_imports(_request: &ComponentRequest) -> ImportSet {
    let mut imports = ImportSet::new();
    imports.add(Import::ClassNames);
    imports
}

/// Generate component source for `request`.
///
/// Fails only when `request.name` is not a usable identifier; every archetype
/// tag is accepted.
pub fn generate_source(request: &ComponentRequest) -> Result<GeneratedSource, GenerateError> {
    validate_identifier(&request.name)?;

    let archetype = &request.archetype;
    let name = request.name.as_str();

    let sections = [
        collect_imports(request).render(),
        declaration::render_declaration(archetype, name),
        implementation::render_implementation(archetype, name),
        usage::render_usage(archetype, name),
    ];

    debug!(
        archetype = %archetype,
        name = name,
        generic = archetype.is_generic(),
        "Generated component source"
    );

    Ok(GeneratedSource(sections.join("\n\n")))
}

//! Component requests and identifier validation.

use crate::archetype::Archetype;
use crate::error::GenerateError;
use crate::generation::Import;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Words that cannot name a generated type or value. Generated files are
/// strict-mode ES modules, so `await`, `eval` and `arguments` are included.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// A request for one generated component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRequest {
    pub archetype: Archetype,
    pub name: String,
    /// Reserved for archetype-specific parameters; the generator does not read it.
    #[serde(default, rename = "extraOptions")]
    pub extra_options: Map<String, Value>,
}

impl ComponentRequest {
    pub fn new(archetype: impl Into<Archetype>, name: impl Into<String>) -> Self {
        Self {
            archetype: archetype.into(),
            name: name.into(),
            extra_options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_options.insert(key.into(), value.into());
        self
    }
}

/// Check that `name` can be emitted as a type and value identifier.
pub fn validate_identifier(name: &str) -> Result<(), GenerateError> {
    let mut chars = name.chars();
    let first = chars
        .next()
        .ok_or_else(|| GenerateError::invalid_identifier(name, "name cannot be empty"))?;

    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Err(GenerateError::invalid_identifier(
            name,
            format!("must start with a letter, '_' or '$', found '{}'", first),
        ));
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
        return Err(GenerateError::invalid_identifier(
            name,
            format!("contains invalid character '{}'", bad),
        ));
    }

    if RESERVED_WORDS.contains(&name) {
        return Err(GenerateError::invalid_identifier(name, "is a reserved word"));
    }

    if let Some(import) = Import::ALL.iter().find(|import| import.binding() == name) {
        return Err(GenerateError::invalid_identifier(
            name,
            format!("collides with the imported binding from `{}`", import.statement()),
        ));
    }

    Ok(())
}

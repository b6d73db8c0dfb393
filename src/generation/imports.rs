//! Ordered import set for one generated file.

use indexmap::IndexSet;

/// A module import the generated component needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Import {
    /// The rendering runtime.
    React,
    /// The class-name joiner `cn(...)`.
    ClassNames,
}

impl Import {
    pub const ALL: [Import; 2] = [Import::React, Import::ClassNames];

    /// Local name the import statement binds in the generated module.
    pub fn binding(self) -> &'static str {
        match self {
            Import::React => "React",
            Import::ClassNames => "cn",
        }
    }

    pub fn statement(self) -> &'static str {
        match self {
            Import::React => "import React from 'react';",
            Import::ClassNames => "import { cn } from '@/lib/utils';",
        }
    }
}

/// Insertion-ordered, deduplicated imports. Local to a single generation call.
#[derive(Debug, Clone)]
pub struct ImportSet {
    imports: IndexSet<Import>,
}

impl ImportSet {
    /// Starts with the runtime import.
    pub fn new() -> Self {
        let mut imports = IndexSet::new();
        imports.insert(Import::React);
        Self { imports }
    }

    /// Returns false if the import was already present.
    pub fn add(&mut self, import: Import) -> bool {
        self.imports.insert(import)
    }

    pub fn contains(&self, import: Import) -> bool {
        self.imports.contains(&import)
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn render(&self) -> String {
        self.imports
            .iter()
            .map(|import| import.statement())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ImportSet {
    fn default() -> Self {
        Self::new()
    }
}

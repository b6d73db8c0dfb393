//! CLI presentation: text and json formatters.

use crate::catalog::{CatalogEntry, CategoryFilter};
use crate::error::ApiError;
use crate::session::GeneratorState;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn filter_label(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "All".to_string(),
        CategoryFilter::Only(category) => category.to_string(),
    }
}

pub fn format_catalog_text(entries: &[&CatalogEntry], filter: CategoryFilter) -> String {
    let heading = format_section_heading(&format!(
        "Components ({}, {})",
        filter_label(filter),
        entries.len()
    ));
    if entries.is_empty() {
        return format!("{}\n\nNo components in this category.", heading);
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Name", "Category", "Archetype", "Description"]);
    for entry in entries {
        let archetype = entry.archetype();
        let archetype_label = if archetype.is_generic() {
            "generic".to_string()
        } else {
            archetype.to_string()
        };
        table.add_row(vec![
            entry.id.to_string(),
            entry.name.to_string(),
            entry.category.to_string(),
            archetype_label,
            entry.description.to_string(),
        ]);
    }
    format!("{}\n\n{}", heading, table)
}

pub fn format_catalog_json(
    entries: &[&CatalogEntry],
    filter: CategoryFilter,
) -> Result<String, ApiError> {
    let out = json!({
        "category": filter_label(filter),
        "count": entries.len(),
        "components": entries,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn format_state_json(
    state: &GeneratorState,
    written: Option<&Path>,
) -> Result<String, ApiError> {
    let mut out = serde_json::to_value(state)?;
    if let Some(path) = written {
        out["writtenTo"] = json!(path.display().to_string());
    }
    Ok(serde_json::to_string_pretty(&out)?)
}

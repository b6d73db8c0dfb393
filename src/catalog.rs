//! Component catalog: the fixed list of components offered for generation,
//! grouped by category.

use crate::archetype::Archetype;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Input,
    Layout,
    Data,
    Overlay,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Input,
        Category::Layout,
        Category::Data,
        Category::Overlay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Input => "Input",
            Category::Layout => "Layout",
            Category::Data => "Data",
            Category::Overlay => "Overlay",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .map(CategoryFilter::Only)
            .ok_or_else(|| {
                format!(
                    "Invalid category: {} (must be 'all', 'input', 'layout', 'data', or 'overlay')",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
}

impl CatalogEntry {
    /// Archetype used to generate this entry; ids outside the known set fall
    /// back to the generic container.
    pub fn archetype(&self) -> Archetype {
        Archetype::parse(self.id)
    }
}

const fn entry(
    id: &'static str,
    name: &'static str,
    category: Category,
    description: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        category,
        description,
    }
}

pub const CATALOG: [CatalogEntry; 9] = [
    entry("button", "Button", Category::Input, "Interactive button component"),
    entry("card", "Card", Category::Layout, "Container for content"),
    entry("input", "Input", Category::Input, "Text input field"),
    entry("modal", "Modal", Category::Overlay, "Dialog overlay component"),
    entry("form", "Form", Category::Input, "Form with validation"),
    entry("navbar", "Navigation", Category::Layout, "Navigation bar component"),
    entry("table", "Table", Category::Data, "Data table component"),
    entry("calendar", "Calendar", Category::Input, "Date picker component"),
    entry("chart", "Chart", Category::Data, "Data visualization"),
];

/// Entries in catalog order, restricted to `filter`.
pub fn filter(filter: CategoryFilter) -> Vec<&'static CatalogEntry> {
    CATALOG.iter().filter(|e| filter.matches(e.category)).collect()
}

pub fn find(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.id == id)
}

//! Props interface block.

use crate::archetype::{Archetype, ButtonSize, ButtonVariant};

/// One declared field of the props interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropField {
    pub name: &'static str,
    pub ts_type: String,
    pub required: bool,
}

impl PropField {
    fn optional(name: &'static str, ts_type: impl Into<String>) -> Self {
        Self {
            name,
            ts_type: ts_type.into(),
            required: false,
        }
    }

    fn required(name: &'static str, ts_type: impl Into<String>) -> Self {
        Self {
            name,
            ts_type: ts_type.into(),
            required: true,
        }
    }

    pub fn render(&self) -> String {
        let marker = if self.required { "" } else { "?" };
        format!("  {}{}: {};", self.name, marker, self.ts_type)
    }
}

/// Union literal type over a set of string keys, e.g. `'a' | 'b'`.
fn union_of<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.map(|k| format!("'{}'", k)).collect::<Vec<_>>().join(" | ")
}

/// Fields every archetype accepts.
pub fn universal_fields() -> Vec<PropField> {
    vec![
        PropField::optional("children", "React.ReactNode"),
        PropField::optional("className", "string"),
    ]
}

/// Fields declared on top of the universal ones.
pub fn archetype_fields(archetype: &Archetype) -> Vec<PropField> {
    match archetype {
        Archetype::Button => vec![
            PropField::optional("variant", union_of(ButtonVariant::ALL.iter().map(|v| v.key()))),
            PropField::optional("size", union_of(ButtonSize::ALL.iter().map(|s| s.key()))),
            PropField::optional("onClick", "() => void"),
            PropField::optional("disabled", "boolean"),
        ],
        Archetype::Card => vec![
            PropField::optional("title", "string"),
            PropField::optional("content", "string"),
        ],
        Archetype::Input => vec![
            PropField::optional("type", "string"),
            PropField::optional("placeholder", "string"),
            PropField::optional("value", "string"),
            PropField::optional("onChange", "(e: React.ChangeEvent<HTMLInputElement>) => void"),
            PropField::optional("disabled", "boolean"),
        ],
        Archetype::Modal => vec![
            PropField::required("isOpen", "boolean"),
            PropField::required("onClose", "() => void"),
            PropField::optional("title", "string"),
            PropField::optional("content", "string"),
        ],
        Archetype::Generic(_) => Vec::new(),
    }
}

pub fn render_declaration(archetype: &Archetype, name: &str) -> String {
    let mut lines = vec![format!("interface {}Props {{", name)];
    lines.extend(universal_fields().iter().map(PropField::render));
    lines.extend(archetype_fields(archetype).iter().map(PropField::render));
    lines.push("}".to_string());
    lines.join("\n")
}

//! Commented usage example appended to every generated component.

use crate::archetype::Archetype;

pub const USAGE_HEADER: &str = "// Usage Example:";

/// Example attributes shown on the opening tag.
pub fn example_attributes(archetype: &Archetype) -> &'static [&'static str] {
    match archetype {
        Archetype::Button => &["variant=\"default\"", "onClick={() => console.log(\"clicked\")}"],
        Archetype::Card => &["title=\"Sample Title\"", "content=\"Sample content\""],
        Archetype::Input => &[
            "placeholder=\"Enter text...\"",
            "onChange={(e) => console.log(e.target.value)}",
        ],
        Archetype::Modal => &[
            "isOpen={true}",
            "onClose={() => setIsOpen(false)}",
            "title=\"Modal Title\"",
        ],
        Archetype::Generic(_) => &[],
    }
}

pub fn example_body(archetype: &Archetype) -> &'static str {
    match archetype {
        Archetype::Button => "Button Text",
        Archetype::Card => "Card Content",
        _ => "Content",
    }
}

pub fn render_usage(archetype: &Archetype, name: &str) -> String {
    let mut lines = vec![USAGE_HEADER.to_string(), format!("// <{}", name)];
    lines.extend(
        example_attributes(archetype)
            .iter()
            .map(|attr| format!("//   {}", attr)),
    );
    lines.push("// >".to_string());
    lines.push(format!("//   {}", example_body(archetype)));
    lines.push(format!("// </{}>", name));
    lines.join("\n")
}

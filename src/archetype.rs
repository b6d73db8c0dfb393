//! Archetype tags and the fixed style-token tables the generator emits.
//!
//! Token tables are keyed by enums rather than strings so a new variant or size
//! cannot be added without also giving it tokens.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Component shape selected by a request tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Archetype {
    Button,
    Card,
    Input,
    Modal,
    /// Any tag outside the known set; generated with the generic container.
    Generic(String),
}

impl Archetype {
    /// Parse a tag. Total: unknown tags become `Generic` and keep their text.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "button" => Archetype::Button,
            "card" => Archetype::Card,
            "input" => Archetype::Input,
            "modal" => Archetype::Modal,
            other => Archetype::Generic(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Archetype::Button => "button",
            Archetype::Card => "card",
            Archetype::Input => "input",
            Archetype::Modal => "modal",
            Archetype::Generic(tag) => tag.as_str(),
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Archetype::Generic(_))
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Archetype {
    fn from(tag: &str) -> Self {
        Archetype::parse(tag)
    }
}

impl Serialize for Archetype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Archetype {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Archetype::parse(&tag))
    }
}

/// Button visual variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Default,
        ButtonVariant::Destructive,
        ButtonVariant::Outline,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }

    pub fn tokens(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90"
            }
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Secondary => {
                "bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
            ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 4] = [
        ButtonSize::Default,
        ButtonSize::Sm,
        ButtonSize::Lg,
        ButtonSize::Icon,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }

    pub fn tokens(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Sm => "h-9 rounded-md px-3",
            ButtonSize::Lg => "h-11 rounded-md px-8",
            ButtonSize::Icon => "h-10 w-10",
        }
    }
}

pub const BUTTON_BASE_TOKENS: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

pub const CARD_BASE_TOKENS: &str = "rounded-lg border bg-card text-card-foreground shadow-sm";

pub const INPUT_BASE_TOKENS: &str = "flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-sm ring-offset-background file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

pub const MODAL_PANEL_TOKENS: &str = "relative z-50 grid w-full max-w-lg gap-4 border bg-background p-6 shadow-lg duration-200 sm:rounded-lg";

pub const GENERIC_BASE_TOKENS: &str = "p-4";

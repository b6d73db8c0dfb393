//! CLI domain: parse, route, help, output, and presentation only.
//! No generation logic; the route table dispatches to the session and catalog.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{parse_option, Cli, Commands};
pub use presentation::{format_catalog_json, format_catalog_text, format_state_json};
pub use route::RunContext;

//! compgen: UI component source generation
//!
//! Maps a component request (archetype tag, component name, reserved options) to
//! deterministic TypeScript/React source text. The pure core lives in
//! [`generation`]; [`session`] wraps it in an asynchronous generator with
//! observable `generatedSource` / `isGenerating` / `lastError` state.

pub mod archetype;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod request;
pub mod session;

pub use archetype::Archetype;
pub use error::{ApiError, GenerateError};
pub use generation::{generate_source, GeneratedSource};
pub use request::ComponentRequest;
pub use session::{GenerationBackend, GeneratorSession, GeneratorState, SimulatedBackend};

//! Generator session: asynchronous wrapper over the pure generator that keeps
//! observable progress and error state for one consumer.
//!
//! Calls on one session are serialized. A call issued while another is in
//! flight waits for it to finish; nothing is cancelled or dropped.

use crate::error::GenerateError;
use crate::generation::{generate_source, GeneratedSource};
use crate::request::ComponentRequest;
use async_trait::async_trait;
use futures::FutureExt;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Latency of [`SimulatedBackend`], standing in for a remote generation call.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

/// Observable session state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorState {
    /// Last successful result; empty until the first success.
    pub generated_source: String,
    pub is_generating: bool,
    pub last_error: Option<String>,
}

/// Where generated source actually comes from
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn produce(&self, request: &ComponentRequest) -> Result<GeneratedSource, GenerateError>;
}

/// Waits [`SIMULATED_LATENCY`] once, then runs the local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedBackend;

#[async_trait]
impl GenerationBackend for SimulatedBackend {
    async fn produce(&self, request: &ComponentRequest) -> Result<GeneratedSource, GenerateError> {
        tokio::time::sleep(SIMULATED_LATENCY).await;
        generate_source(request)
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: GeneratorState,
    /// Calls that have started but not yet finished, queued ones included.
    pending: usize,
}

/// One consumer's generation session
pub struct GeneratorSession<B = SimulatedBackend> {
    backend: B,
    inner: RwLock<Inner>,
    slot: Mutex<()>,
}

impl GeneratorSession<SimulatedBackend> {
    pub fn new() -> Self {
        Self::with_backend(SimulatedBackend)
    }
}

impl Default for GeneratorSession<SimulatedBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GenerationBackend> GeneratorSession<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            inner: RwLock::new(Inner::default()),
            slot: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GeneratorState {
        self.inner.read().state.clone()
    }

    pub fn generated_source(&self) -> String {
        self.inner.read().state.generated_source.clone()
    }

    pub fn is_generating(&self) -> bool {
        self.inner.read().state.is_generating
    }

    pub fn last_error(&self) -> Option<String> {
        self.inner.read().state.last_error.clone()
    }

    /// Generate source for `request` and record the outcome in the session state.
    ///
    /// Never fails: errors, including panics raised by the backend, end up in
    /// `last_error` and leave the previous `generated_source` in place.
    pub async fn generate(&self, request: ComponentRequest) {
        let _pending = PendingCall::enter(&self.inner);
        debug!(
            archetype = %request.archetype,
            name = %request.name,
            "Generation requested"
        );

        let _slot = self.slot.lock().await;

        let outcome = AssertUnwindSafe(self.backend.produce(&request))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(GenerateError::Interrupted(panic_message(&*panic))));

        let mut inner = self.inner.write();
        match outcome {
            Ok(source) => {
                info!(
                    archetype = %request.archetype,
                    name = %request.name,
                    bytes = source.as_str().len(),
                    "Generation completed"
                );
                inner.state.generated_source = source.into_string();
                inner.state.last_error = None;
            }
            Err(err) => {
                warn!(
                    archetype = %request.archetype,
                    name = %request.name,
                    error = %err,
                    "Generation failed"
                );
                inner.state.last_error = Some(err.to_string());
            }
        }
    }
}

/// Marks one call as pending for as long as it lives. Released on drop, so a
/// caller abandoning the future mid-flight still settles `is_generating`.
struct PendingCall<'a> {
    inner: &'a RwLock<Inner>,
}

impl<'a> PendingCall<'a> {
    fn enter(inner: &'a RwLock<Inner>) -> Self {
        let mut guard = inner.write();
        guard.pending += 1;
        guard.state.is_generating = true;
        guard.state.last_error = None;
        Self { inner }
    }
}

impl Drop for PendingCall<'_> {
    fn drop(&mut self) {
        let mut inner = self.inner.write();
        inner.pending = inner.pending.saturating_sub(1);
        inner.state.is_generating = inner.pending > 0;
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "Failed to generate component".to_string()
    }
}

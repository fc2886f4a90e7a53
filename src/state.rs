//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config, the ephemeral per-thread chat memory, and the
//! reply policy behind a trait object so tests can swap it.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::companion::ReplyPolicy;
use crate::services::memory::{Speaker, ThreadMemory};

/// Clone is required by Axum; all inner fields are Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub memory: ThreadMemory,
    pub policy: Arc<dyn ReplyPolicy>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, policy: Arc<dyn ReplyPolicy>) -> Self {
        let memory = ThreadMemory::new(config.history_limit, config.max_threads);
        Self { config: Arc::new(config), memory, policy }
    }

    /// Open the default thread with its system marker message.
    pub async fn seed_default_thread(&self) {
        let thread = &self.config.default_thread;
        self.memory
            .store(thread, Speaker::System, &format!("thread ID: {thread}"))
            .await;
    }
}

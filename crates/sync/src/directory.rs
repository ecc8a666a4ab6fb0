//! Top-level view state: the collection plus the initial load cycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rigdesk_client::CustomerBackend;
use rigdesk_core::RecordStore;

/// Lifecycle of the initial fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    /// Fetch failed with a human-readable message.
    Failed(String),
}

impl Default for LoadState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Teardown flag for the consuming view.
///
/// The initial fetch holds a [`LivenessToken`]; when the view goes away the
/// owner revokes the flag, and a late-arriving result is discarded instead
/// of applied. This is the only cancellation mechanism in the system:
/// in-flight writes have neither a timeout nor a token.
#[derive(Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Hand out a token for one fetch to check against.
    pub fn token(&self) -> LivenessToken {
        LivenessToken {
            alive: Arc::clone(&self.alive),
        }
    }

    /// Mark the view as torn down.
    pub fn revoke(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

/// A fetch-side handle onto the teardown flag.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    alive: Arc<AtomicBool>,
}

impl LivenessToken {
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

/// The top-level view's state: the record collection and its load
/// lifecycle. The collection is owned exclusively here; card editors hold
/// only transient drafts.
#[derive(Debug, Default)]
pub struct Directory {
    store: RecordStore,
    load_state: LoadState,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Run the initial fetch and replace the collection wholesale.
    ///
    /// The token is re-checked once the response arrives; after a revoke
    /// neither the collection nor the load state is touched.
    pub async fn load(&mut self, backend: &dyn CustomerBackend, token: &LivenessToken) {
        self.load_state = LoadState::Loading;

        let result = backend.fetch_all().await;

        if !token.is_live() {
            tracing::debug!("Discarding fetch result for a torn-down view");
            return;
        }

        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "Loaded customer list");
                self.store.replace_all(records);
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Customer list fetch failed");
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }
}

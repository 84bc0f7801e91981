//! Webserver state management
//!
//! Holds the injected generator and batch store plus the in-memory copy of
//! the most recent batch. The cache is process-local and starts empty on
//! every restart.

use std::time::Instant;
use tokio::sync::{Mutex, MutexGuard, RwLock};

use generator::{BatchStore, CompletionClient, ContentGenerator};
use shared::PostBatch;

/// Core webserver state
pub struct WebServerState<C, S> {
    generator: Option<ContentGenerator<C>>,
    store: S,
    latest: RwLock<Option<PostBatch>>,
    generation: Mutex<()>,
    pub server_start_time: Instant,
}

impl<C, S> WebServerState<C, S>
where
    C: CompletionClient,
    S: BatchStore,
{
    /// `generator` is `None` when no API key was configured; generation
    /// requests are then refused while browsing still works.
    pub fn new(generator: Option<ContentGenerator<C>>, store: S) -> Self {
        Self {
            generator,
            store,
            latest: RwLock::new(None),
            generation: Mutex::new(()),
            server_start_time: Instant::now(),
        }
    }

    pub fn generator(&self) -> Option<&ContentGenerator<C>> {
        self.generator.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Held across one batch run and its file writes
    pub async fn lock_generation(&self) -> MutexGuard<'_, ()> {
        self.generation.lock().await
    }

    /// Replace the cached batch
    pub async fn cache_batch(&self, batch: PostBatch) {
        *self.latest.write().await = Some(batch);
    }

    /// Copy of the cached batch, if one was generated since startup
    pub async fn latest_batch(&self) -> Option<PostBatch> {
        self.latest.read().await.clone()
    }

    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}

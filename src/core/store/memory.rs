//! In-process secret store.
//!
//! Serves payloads from a fixed map. Useful for embedding hosts' tests and for
//! running the resolver without a network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::trace;

use super::SecretStore;
use crate::error::StoreError;

/// Store backed by a fixed map of payloads and injected failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    secrets: HashMap<String, String>,
    failures: HashMap<String, StoreError>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for `id`.
    pub fn with_secret(mut self, id: impl Into<String>, payload: impl Into<String>) -> Self {
        self.secrets.insert(id.into(), payload.into());
        self
    }

    /// Fail reads of `id` with `error`. Takes precedence over a stored payload.
    pub fn with_failure(mut self, id: impl Into<String>, error: StoreError) -> Self {
        self.failures.insert(id.into(), error);
        self
    }

    /// Number of reads served so far, including failed ones
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretStore for MemoryStore {
    async fn get_secret_value(&self, id: &str) -> Result<String, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        trace!(id, "memory store read");

        if let Some(err) = self.failures.get(id) {
            return Err(err.clone());
        }

        self.secrets
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

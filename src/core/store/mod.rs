//! Secret document storage.
//!
//! The remote store is reached through a single read operation, abstracted by
//! the [`SecretStore`] trait so the resolver can run against AWS Secrets
//! Manager, an in-process store, or anything a host provides.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g. `vault.rs`)
//! 3. Feature-gate it if it pulls in a client SDK
//! 4. Re-export from this module

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::domain::SecretDocument;
use crate::error::StoreError;

mod memory;

#[cfg(feature = "aws")]
pub mod aws;

pub use memory::MemoryStore;

/// Remote key-value secret store.
///
/// Implementations must issue an independent round trip per call and must be
/// safe to share across concurrent resolutions.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Read the raw payload stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store has no such secret, refuses access,
    /// or the request fails in transit.
    async fn get_secret_value(&self, id: &str) -> Result<String, StoreError>;
}

#[async_trait]
impl<S: SecretStore + ?Sized> SecretStore for Arc<S> {
    async fn get_secret_value(&self, id: &str) -> Result<String, StoreError> {
        (**self).get_secret_value(id).await
    }
}

#[async_trait]
impl<S: SecretStore + ?Sized> SecretStore for Box<S> {
    async fn get_secret_value(&self, id: &str) -> Result<String, StoreError> {
        (**self).get_secret_value(id).await
    }
}

/// Fetches a document by path and normalizes it.
///
/// Owns the store handle; holds no other state.
#[derive(Debug)]
pub struct DocumentFetcher<S> {
    store: S,
}

impl<S: SecretStore> DocumentFetcher<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch and normalize the document at `path`.
    ///
    /// Calls the store exactly once. A payload that is not a JSON object of
    /// strings is returned as a single `value` field, not as an error.
    /// Dropping the returned future cancels the in-flight read.
    ///
    /// # Errors
    ///
    /// Returns the store's `StoreError` unchanged.
    pub async fn fetch(&self, path: &str) -> Result<SecretDocument, StoreError> {
        trace!(path, "fetching secret document");

        let payload = Zeroizing::new(self.store.get_secret_value(path).await?);
        let doc = SecretDocument::parse(&payload);

        trace!(path, fields = doc.len(), "fetched secret document");
        Ok(doc)
    }
}

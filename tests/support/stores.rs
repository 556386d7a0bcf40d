//! Store doubles for failure and cancellation tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use keyhole::{SecretStore, StoreError};

/// Sets a flag when dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Store whose reads never complete.
///
/// `cancelled` flips to true once an in-flight read is dropped.
#[derive(Default)]
pub struct PendingStore {
    pub cancelled: Arc<AtomicBool>,
}

#[async_trait]
impl SecretStore for PendingStore {
    async fn get_secret_value(&self, _id: &str) -> Result<String, StoreError> {
        let _flag = DropFlag(Arc::clone(&self.cancelled));
        std::future::pending::<Result<String, StoreError>>().await
    }
}

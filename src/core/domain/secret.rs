//! ResolvedSecret type.
//!
//! The disclosed value handed back to the transport.

use serde::Serialize;
use zeroize::Zeroize;

/// A secret value cleared for disclosure.
///
/// Serializes with the field names the CI server expects (`data`, `pull`, `fork`).
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSecret {
    data: String,
    pull: bool,
    fork: bool,
}

impl ResolvedSecret {
    /// Create a disclosed secret. Pull and fork exposure are always allowed;
    /// restricting pull requests is done through the events filter.
    pub fn new(data: String) -> Self {
        Self {
            data,
            pull: true,
            fork: true,
        }
    }

    /// Secret value
    pub fn value(&self) -> &str {
        &self.data
    }

    /// Whether the secret may be exposed to pull request builds
    pub fn pull(&self) -> bool {
        self.pull
    }

    /// Whether the secret may be exposed to builds from forks
    pub fn fork(&self) -> bool {
        self.fork
    }
}

impl std::fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("data", &"[REDACTED]")
            .field("pull", &self.pull)
            .field("fork", &self.fork)
            .finish()
    }
}

impl Drop for ResolvedSecret {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

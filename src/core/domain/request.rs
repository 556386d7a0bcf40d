//! SecretRequest type.
//!
//! The caller's view of a single secret lookup: which document, which field,
//! and the build context the policy filters are evaluated against.

use serde::Deserialize;

use crate::core::types::{FieldName, SecretPath};

/// A request to resolve one secret field for a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SecretRequest {
    /// Identifier of the secret document in the remote store
    pub path: SecretPath,
    /// Field within the document being requested
    pub name: FieldName,
    /// CI event that triggered the build (push, pull_request, tag, ...)
    #[serde(default)]
    pub event: String,
    /// Repository slug (owner/name)
    #[serde(default)]
    pub repo_slug: String,
    /// Target branch or ref of the build
    #[serde(default)]
    pub branch: String,
}

impl SecretRequest {
    /// Create a request with an empty build context.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the triggering event.
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    /// Set the repository slug.
    pub fn with_repo(mut self, repo_slug: impl Into<String>) -> Self {
        self.repo_slug = repo_slug.into();
        self
    }

    /// Set the target branch.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }
}

//! Secret resolution and policy enforcement.
//!
//! [`Plugin`] is the entry point a transport calls once per inbound request.
//! Resolution runs as a fixed sequence of gates:
//!
//! 1. validate the request shape
//! 2. fetch the document (any store failure becomes `NotFound`)
//! 3. look up the requested field
//! 4. read the policy filters from the reserved fields
//! 5. check the event, then the repository, then the branch
//! 6. disclose the value
//!
//! The first failing gate decides the error. Nothing is shared between calls
//! except the immutable store handle and configuration.

use tracing::{debug, info};

use crate::core::config::{Config, MissingField};
use crate::core::domain::{PolicyFilters, ResolvedSecret, SecretRequest};
use crate::core::store::{DocumentFetcher, SecretStore};
use crate::core::validation::validate_request;
use crate::error::{Denial, Error, Result};

/// Secret plugin bound to one store.
pub struct Plugin<S> {
    fetcher: DocumentFetcher<S>,
    config: Config,
}

impl<S: SecretStore> Plugin<S> {
    /// Create a plugin with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, Config::default())
    }

    /// Create a plugin with an explicit configuration.
    pub fn with_config(store: S, config: Config) -> Self {
        Self {
            fetcher: DocumentFetcher::new(store),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        self.fetcher.store()
    }

    /// Resolve a secret for a pipeline run.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidRequest` if `path` or `name` is empty, or `name` is a
    ///   reserved field and the config rejects those
    /// - `Error::NotFound` if the store cannot produce the document, or the field
    ///   is absent and the config hardens that case
    /// - `Error::AccessDenied` if the event, repository, or branch filter rejects
    ///   the request
    pub async fn find(&self, request: &SecretRequest) -> Result<ResolvedSecret> {
        validate_request(request, &self.config)?;

        let doc = self.fetcher.fetch(&request.path).await.map_err(|e| {
            debug!(path = %request.path, error = %e, "secret lookup failed");
            Error::NotFound
        })?;

        let value = doc.get(&request.name);

        debug!(
            path = %request.path,
            fields = ?doc.field_names().collect::<Vec<_>>(),
            "found secret document"
        );

        let filters = PolicyFilters::extract(&doc, &self.config.fields);
        if let Err(denial) = authorize(&filters, request) {
            info!(
                path = %request.path,
                name = %request.name,
                event = %request.event,
                repo = %request.repo_slug,
                branch = %request.branch,
                reason = %denial,
                "access denied"
            );
            return Err(denial.into());
        }

        let data = match (value, self.config.policy.missing_field) {
            (Some(v), _) => v.to_string(),
            (None, MissingField::Empty) => String::new(),
            (None, MissingField::NotFound) => {
                debug!(path = %request.path, name = %request.name, "field not in document");
                return Err(Error::NotFound);
            }
        };

        Ok(ResolvedSecret::new(data))
    }
}

/// Check a request's build context against the filters.
///
/// Filters are evaluated event, repository, branch; the first mismatch is
/// returned.
pub fn authorize(filters: &PolicyFilters, request: &SecretRequest) -> std::result::Result<(), Denial> {
    if !filters.allows_event(&request.event) {
        return Err(Denial::Event);
    }
    if !filters.allows_repo(&request.repo_slug) {
        return Err(Denial::Repository);
    }
    if !filters.allows_branch(&request.branch) {
        return Err(Denial::Branch);
    }
    Ok(())
}

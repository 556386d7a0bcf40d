//! Keyhole - secret resolution for CI pipelines with per-secret access policy.
//!
//! A transport hands each inbound secret request to [`Plugin::find`]. The plugin
//! reads the named document from a remote key-value store, evaluates the policy
//! fields stored alongside the secret, and either discloses the requested value
//! or returns a stable error.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── error             # Error taxonomy (InvalidRequest / NotFound / AccessDenied)
//! ├── logging           # tracing subscriber setup for hosts
//! └── core/             # Core library components
//!     ├── config        # TOML configuration
//!     ├── constants     # Reserved field names
//!     ├── domain/       # SecretRequest, SecretDocument, PolicyFilters, ResolvedSecret
//!     ├── pattern       # Glob matching for filter patterns
//!     ├── resolver      # Policy resolver (Plugin::find)
//!     ├── store/        # SecretStore trait and backends
//!     │   ├── memory    # In-process store
//!     │   └── aws       # AWS Secrets Manager (feature `aws`)
//!     └── validation    # Request validation
//! ```
//!
//! # Policy fields
//!
//! A JSON secret document may carry three reserved fields, each a
//! comma-separated list of glob patterns:
//!
//! - `X-Drone-Events`: allowed build events (e.g. `push, tag`)
//! - `X-Drone-Repos`: allowed repository slugs (e.g. `octocat/*`)
//! - `X-Drone-Branches`: allowed target branches (e.g. `main, release/*`)
//!
//! An absent or empty field does not restrict anything.
//!
//! # Example
//!
//! ```
//! use keyhole::{MemoryStore, Plugin, SecretRequest};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let store = MemoryStore::new()
//!     .with_secret("app/prod", r#"{"API_KEY":"xyz","X-Drone-Events":"push,tag"}"#);
//! let plugin = Plugin::new(store);
//!
//! let request = SecretRequest::new("app/prod", "API_KEY").with_event("push");
//! let secret = plugin.find(&request).await.unwrap();
//! assert_eq!(secret.value(), "xyz");
//! # });
//! ```

pub mod core;
pub mod error;
pub mod logging;

pub use crate::core::config::{Config, MissingField, ReservedNames};
pub use crate::core::domain::{PolicyFilters, ResolvedSecret, SecretDocument, SecretRequest};
pub use crate::core::resolver::Plugin;
pub use crate::core::store::{DocumentFetcher, MemoryStore, SecretStore};
pub use crate::error::{Denial, Error, ErrorKind, RequestError, Result, StoreError};

#[cfg(feature = "aws")]
pub use crate::core::store::aws::SecretsManager;

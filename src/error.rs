//! Error types for keyhole.
//!
//! [`Error`] is what callers of [`Plugin::find`](crate::Plugin::find) see. Every
//! variant maps to a stable [`ErrorKind`] and a short reason string; nothing from
//! the remote store leaks through it. [`StoreError`] is the store-side failure and
//! stays inside the crate boundary.

use thiserror::Error;

/// Stable error classification for transports and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was malformed. The caller must fix it.
    InvalidRequest,
    /// No document could be produced for the requested path.
    NotFound,
    /// A policy filter on the document rejected the request.
    AccessDenied,
    /// Configuration could not be loaded or is invalid.
    Config,
}

/// Top-level error returned by keyhole operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("secret not found")]
    NotFound,

    #[error("access denied: {0}")]
    AccessDenied(#[from] Denial),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Stable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::NotFound => ErrorKind::NotFound,
            Self::AccessDenied(_) => ErrorKind::AccessDenied,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Short human-readable reason, without the kind prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::InvalidRequest(e) => e.to_string(),
            Self::NotFound => "secret not found".to_string(),
            Self::AccessDenied(d) => d.to_string(),
            Self::Config(e) => e.to_string(),
        }
    }
}

/// Request shape errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing path")]
    MissingPath,

    #[error("missing name")]
    MissingName,

    #[error("reserved name: {0}")]
    ReservedName(String),
}

/// Which policy filter rejected a request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denial {
    #[error("event does not match")]
    Event,

    #[error("repository does not match")]
    Repository,

    #[error("branch does not match")]
    Branch,
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failure of the remote store read.
///
/// Logged by the resolver and collapsed to [`Error::NotFound`] before it reaches
/// the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no secret at '{0}'")]
    NotFound(String),

    #[error("store denied access: {0}")]
    AccessDenied(String),

    #[error("store request failed: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

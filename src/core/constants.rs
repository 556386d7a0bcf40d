//! Constants used throughout keyhole.
//!
//! Centralizes reserved field names and other magic strings.

/// Reserved document field listing the CI events allowed to read the secret.
pub const EVENTS_FIELD: &str = "X-Drone-Events";

/// Reserved document field listing the repositories allowed to read the secret.
pub const REPOS_FIELD: &str = "X-Drone-Repos";

/// Reserved document field listing the branches allowed to read the secret.
pub const BRANCHES_FIELD: &str = "X-Drone-Branches";

/// Key under which a non-JSON payload is stored.
pub const VALUE_FIELD: &str = "value";

/// Separator between patterns in a reserved field.
pub const PATTERN_SEPARATOR: char = ',';

/// Environment variable read by [`crate::logging::init`] for the log filter.
pub const LOG_ENV: &str = "KEYHOLE_LOG";

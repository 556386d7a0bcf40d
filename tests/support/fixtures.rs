//! Test fixtures and constants.

/// Path used by most tests.
pub const PROD_PATH: &str = "app/prod";

/// Plain document with no policy fields.
pub const PLAIN_DOC: &str = r#"{"API_KEY":"xyz"}"#;

/// Document restricted to push and deploy events.
pub const EVENTS_DOC: &str = r#"{"API_KEY":"xyz","X-Drone-Events":"push,deploy"}"#;

/// Document restricted on all three filters.
pub const LOCKED_DOC: &str = r#"{
    "API_KEY": "xyz",
    "DB_PASSWORD": "hunter2",
    "X-Drone-Events": "push, tag",
    "X-Drone-Repos": "octocat/*, github/hub",
    "X-Drone-Branches": "main, release/*"
}"#;

/// Events commonly sent by CI servers.
pub const EVENTS: &[&str] = &["push", "pull_request", "tag", "promote", "rollback", "cron", "custom"];

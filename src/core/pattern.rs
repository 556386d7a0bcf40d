//! Glob matching for policy filter patterns.
//!
//! Patterns are compiled with `globset` with the path separator treated as an
//! ordinary character, so `*` matches `octocat/hello-world` as well as the
//! empty string. Supported forms:
//!
//! - literal text (exact, case-sensitive)
//! - `*` and `**`: any run of characters
//! - `?`: exactly one character
//! - `[abc]`, `[a-z]`: character classes
//! - `[!abc]`: negated character classes
//!
//! A pattern that does not compile is compared by exact equality.

use globset::GlobBuilder;
use tracing::trace;

/// Check a candidate against a single pattern.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    if pattern == candidate {
        return true;
    }

    match GlobBuilder::new(pattern)
        .literal_separator(false)
        .case_insensitive(false)
        .build()
    {
        Ok(glob) => glob.compile_matcher().is_match(candidate),
        Err(e) => {
            trace!(pattern, error = %e, "pattern is not a valid glob, using exact match");
            false
        }
    }
}

/// Check a candidate against a list of patterns.
///
/// An empty list imposes no restriction. Otherwise the candidate must match at
/// least one pattern.
pub fn matches_any<S: AsRef<str>>(candidate: &str, patterns: &[S]) -> bool {
    if patterns.is_empty() {
        return true;
    }
    patterns.iter().any(|p| matches(p.as_ref(), candidate))
}

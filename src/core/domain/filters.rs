//! Policy filters.
//!
//! The three pattern lists read from a document's reserved fields.

use crate::core::config::FieldNames;
use crate::core::constants::PATTERN_SEPARATOR;
use crate::core::domain::SecretDocument;
use crate::core::pattern;
use crate::core::types::Pattern;

/// Allow-lists extracted from a document. An empty list means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyFilters {
    pub events: Vec<Pattern>,
    pub repos: Vec<Pattern>,
    pub branches: Vec<Pattern>,
}

impl PolicyFilters {
    /// Read the reserved fields of a document.
    pub fn extract(doc: &SecretDocument, names: &FieldNames) -> Self {
        Self {
            events: split_patterns(doc.get(&names.events)),
            repos: split_patterns(doc.get(&names.repos)),
            branches: split_patterns(doc.get(&names.branches)),
        }
    }

    /// Whether none of the three lists restricts anything
    pub fn is_unrestricted(&self) -> bool {
        self.events.is_empty() && self.repos.is_empty() && self.branches.is_empty()
    }

    pub fn allows_event(&self, event: &str) -> bool {
        pattern::matches_any(event, &self.events)
    }

    pub fn allows_repo(&self, repo_slug: &str) -> bool {
        pattern::matches_any(repo_slug, &self.repos)
    }

    pub fn allows_branch(&self, branch: &str) -> bool {
        pattern::matches_any(branch, &self.branches)
    }
}

/// Split a comma-separated field into trimmed, non-empty patterns.
fn split_patterns(raw: Option<&str>) -> Vec<Pattern> {
    raw.map(|s| {
        s.split(PATTERN_SEPARATOR)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

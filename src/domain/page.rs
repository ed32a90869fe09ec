//! Page entity: the payload carried by every tree node

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};

/// Content page with title, route, tags and a modification timestamp.
///
/// The timestamp is captured at construction and never updated; there is no
/// mutation API for it. Tags are a set: duplicates are suppressed and
/// insertion order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    /// Display name
    pub title: String,
    /// Route string, not validated for uniqueness or format
    pub route: String,
    tags: BTreeSet<String>,
    last_modified: DateTime<Utc>,
}

impl PageData {
    /// Create a page stamped with the current time.
    pub fn new(title: impl Into<String>, route: impl Into<String>) -> Self {
        Self::with_modified(title, route, Utc::now())
    }

    /// Create a page with an explicit modification timestamp.
    ///
    /// Used by the manifest loader, where loading is construction time.
    pub fn with_modified(
        title: impl Into<String>,
        route: impl Into<String>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            route: route.into(),
            tags: BTreeSet::new(),
            last_modified,
        }
    }

    /// Add a tag. Empty strings and duplicates are silently ignored.
    pub fn add_tag(&mut self, tag: &str) {
        if !tag.is_empty() {
            self.tags.insert(tag.to_string());
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }
}

impl fmt::Display for PageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.route)
    }
}

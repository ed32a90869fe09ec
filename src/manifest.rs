//! Site manifest: declarative TOML description of a page hierarchy
//!
//! Pages reference their parent by route:
//!
//! ```toml
//! [[page]]
//! title = "Home"
//! route = "/"
//!
//! [[page]]
//! title = "Academics"
//! route = "/academics"
//! parent = "/"
//! tags = ["education", "courses"]
//! modified = "2026-07-20T09:00:00Z"
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::error::{SiteError, SiteResult};
use crate::domain::page::PageData;

/// Parsed site manifest: an ordered list of page declarations.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteManifest {
    #[serde(default, rename = "page")]
    pub pages: Vec<PageEntry>,
}

/// One page declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageEntry {
    pub title: String,
    pub route: String,
    /// Route of the parent page; absent for the root
    pub parent: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// RFC 3339 timestamp; absent means "now" (load time is construction time)
    pub modified: Option<String>,
}

impl PageEntry {
    /// Convert the declaration into a page payload.
    pub fn to_page_data(&self) -> SiteResult<PageData> {
        let last_modified = match &self.modified {
            Some(value) => parse_timestamp(&self.route, value)?,
            None => Utc::now(),
        };
        let mut data = PageData::with_modified(&self.title, &self.route, last_modified);
        for tag in &self.tags {
            data.add_tag(tag);
        }
        Ok(data)
    }
}

fn parse_timestamp(route: &str, value: &str) -> SiteResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| SiteError::InvalidTimestamp {
            route: route.to_string(),
            value: value.to_string(),
        })
}

/// Load and parse a manifest file.
#[instrument(level = "debug")]
pub fn load_manifest(path: &Path) -> SiteResult<SiteManifest> {
    let content = fs::read_to_string(path).map_err(|source| SiteError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SiteError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_entry_with_timestamp_when_converting_then_timestamp_kept() {
        let entry = PageEntry {
            title: "Home".to_string(),
            route: "/".to_string(),
            parent: None,
            tags: vec![],
            modified: Some("2026-07-20T09:00:00Z".to_string()),
        };
        let data = entry.to_page_data().unwrap();
        assert_eq!(
            data.last_modified(),
            DateTime::parse_from_rfc3339("2026-07-20T09:00:00Z").unwrap()
        );
    }

    #[test]
    fn given_entry_with_bad_timestamp_when_converting_then_errors() {
        let entry = PageEntry {
            title: "Home".to_string(),
            route: "/".to_string(),
            parent: None,
            tags: vec![],
            modified: Some("last tuesday".to_string()),
        };
        let result = entry.to_page_data();
        assert!(matches!(
            result,
            Err(SiteError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn given_entry_with_duplicate_tags_when_converting_then_deduplicated() {
        let entry = PageEntry {
            title: "Academics".to_string(),
            route: "/academics".to_string(),
            parent: Some("/".to_string()),
            tags: vec!["education".to_string(), "education".to_string()],
            modified: None,
        };
        let data = entry.to_page_data().unwrap();
        assert_eq!(data.tags().count(), 1);
    }
}

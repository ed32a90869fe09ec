//! Domain-level errors (no external dependencies)

use std::path::PathBuf;

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the content tree contract.
///
/// Structural misuse (re-attachment, cycles, a second root) is rejected
/// with a named error rather than left undefined.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("page not found in arena: {0:?}")]
    PageNotFound(Index),

    #[error("tree already has a root: {0}")]
    RootAlreadyExists(String),

    #[error("manifest declares no root page (every page names a parent)")]
    MissingRoot,

    #[error("manifest declares multiple root pages: {0} and {1}")]
    MultipleRoots(String, String),

    #[error("duplicate route in manifest: {0}")]
    DuplicateRoute(String),

    #[error("page {route} names unknown parent: {parent}")]
    UnknownParent { route: String, parent: String },

    #[error("cycle detected in page hierarchy at: {0}")]
    CycleDetected(String),

    #[error("no page with route: {0}")]
    RouteNotFound(String),

    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid timestamp for {route}: {value} (expected RFC 3339)")]
    InvalidTimestamp { route: String, value: String },
}

/// Result type for content tree operations.
pub type SiteResult<T> = Result<T, SiteError>;

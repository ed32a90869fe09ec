pub mod cli;
pub mod demo;
pub mod domain;
pub mod manifest;
pub mod util;

pub use domain::{PageArena, PageData, PageNode, SiteBuilder, SiteError, SiteResult};

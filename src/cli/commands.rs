//! Command dispatch

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::demo::run_demo;
use crate::domain::{PageArena, SiteBuilder, SiteError};
use crate::manifest::load_manifest;

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Demo) => _demo(),
        Some(Commands::Tree { manifest }) => _tree(manifest),
        Some(Commands::Breadcrumb { manifest, route }) => _breadcrumb(manifest, route),
        Some(Commands::Search { manifest, tag }) => _search(manifest, tag),
        Some(Commands::Recent { manifest, days }) => _recent(manifest, *days),
        Some(Commands::Completion { shell }) => _completion(*shell),
        // Bare invocation runs the demonstration script
        None => _demo(),
    }
}

fn load_site(manifest_path: &Path) -> Result<PageArena> {
    let manifest = load_manifest(manifest_path)?;
    let site = SiteBuilder::new()
        .build(&manifest)
        .with_context(|| format!("cannot build site from {}", manifest_path.display()))?;
    debug!("loaded {} pages from {:?}", site.len(), manifest_path);
    Ok(site)
}

#[instrument]
fn _demo() -> Result<()> {
    run_demo()?;
    Ok(())
}

#[instrument]
fn _tree(manifest_path: &Path) -> Result<()> {
    let site = load_site(manifest_path)?;
    if let Some(root) = site.root() {
        print!("{}", site.to_display_tree(root)?);
        output::info(&format!(
            "{} pages, depth {}",
            site.len(),
            site.depth()
        ));
    }
    Ok(())
}

#[instrument]
fn _breadcrumb(manifest_path: &Path, route: &str) -> Result<()> {
    let site = load_site(manifest_path)?;
    let idx = site
        .find_route(route)
        .ok_or_else(|| SiteError::RouteNotFound(route.to_string()))?;
    output::info(&site.breadcrumb(idx)?);
    Ok(())
}

#[instrument]
fn _search(manifest_path: &Path, tag: &str) -> Result<()> {
    let site = load_site(manifest_path)?;
    let hits = site.search_by_tag(tag);
    if hits.is_empty() {
        output::info(&format!("No pages tagged '{}'", tag));
        return Ok(());
    }
    for idx in hits {
        if let Some(node) = site.get_page(idx) {
            output::info(&node.data);
        }
    }
    Ok(())
}

#[instrument]
fn _recent(manifest_path: &Path, days: i64) -> Result<()> {
    let site = load_site(manifest_path)?;
    let hits = site.recently_modified(days);
    if hits.is_empty() {
        output::info(&format!("No pages modified in the last {} days", days));
        return Ok(());
    }
    for idx in hits {
        if let Some(node) = site.get_page(idx) {
            output::info(&format!(
                "{}  {}",
                node.data.last_modified().format("%Y-%m-%d"),
                node.data
            ));
        }
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

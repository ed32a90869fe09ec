//! Site builder: turns a declarative manifest into a page arena

use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::domain::arena::PageArena;
use crate::domain::error::{SiteError, SiteResult};
use crate::manifest::{PageEntry, SiteManifest};

/// Constructs a page hierarchy from manifest entries.
///
/// Parents are addressed by route, so routes must be unique within one
/// manifest. Children attach in declaration order.
pub struct SiteBuilder {
    relationship_cache: HashMap<String, Vec<usize>>,
    visited_routes: HashSet<String>,
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self {
            relationship_cache: HashMap::new(),
            visited_routes: HashSet::new(),
        }
    }

    /// Build the tree described by `manifest`.
    #[instrument(level = "debug", skip(self, manifest))]
    pub fn build(&mut self, manifest: &SiteManifest) -> SiteResult<PageArena> {
        // Reset state for a fresh build
        self.relationship_cache.clear();
        self.visited_routes.clear();

        let by_route = self.index_routes(&manifest.pages)?;
        let root = find_root(&manifest.pages)?;

        // Record parent -> children in declaration order
        for (pos, entry) in manifest.pages.iter().enumerate() {
            if let Some(parent) = &entry.parent {
                if !by_route.contains_key(parent.as_str()) {
                    return Err(SiteError::UnknownParent {
                        route: entry.route.clone(),
                        parent: parent.clone(),
                    });
                }
                self.relationship_cache
                    .entry(parent.clone())
                    .or_default()
                    .push(pos);
            }
        }

        let mut tree = PageArena::new();
        let mut stack = vec![(root, None)];

        while let Some((entry, parent_idx)) = stack.pop() {
            // Cycle detection
            if !self.visited_routes.insert(entry.route.clone()) {
                return Err(SiteError::CycleDetected(entry.route.clone()));
            }

            let current_idx = tree.insert_page(entry.to_page_data()?, parent_idx)?;

            // Add children to stack, reversed so they pop in declaration order
            if let Some(children) = self.relationship_cache.get(&entry.route) {
                for &child_pos in children.iter().rev() {
                    stack.push((&manifest.pages[child_pos], Some(current_idx)));
                }
            }
        }

        // Pages unreachable from the root can only sit on a parent cycle
        if tree.len() != manifest.pages.len() {
            let stranded = manifest
                .pages
                .iter()
                .find(|e| !self.visited_routes.contains(&e.route))
                .map(|e| e.route.clone())
                .unwrap_or_default();
            return Err(SiteError::CycleDetected(stranded));
        }

        Ok(tree)
    }

    fn index_routes<'a>(
        &self,
        pages: &'a [PageEntry],
    ) -> SiteResult<HashMap<&'a str, &'a PageEntry>> {
        let mut by_route = HashMap::new();
        for entry in pages {
            if by_route.insert(entry.route.as_str(), entry).is_some() {
                return Err(SiteError::DuplicateRoute(entry.route.clone()));
            }
        }
        Ok(by_route)
    }
}

fn find_root(pages: &[PageEntry]) -> SiteResult<&PageEntry> {
    let mut roots = pages.iter().filter(|e| e.parent.is_none());
    let first = roots.next().ok_or(SiteError::MissingRoot)?;
    if let Some(second) = roots.next() {
        return Err(SiteError::MultipleRoots(
            first.route.clone(),
            second.route.clone(),
        ));
    }
    Ok(first)
}

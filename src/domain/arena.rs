//! Arena-based content tree and its traversals

use chrono::{DateTime, Duration, Utc};
use generational_arena::{Arena, Index};
use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::domain::error::{SiteError, SiteResult};
use crate::domain::page::PageData;

/// Tree node in the arena-based page hierarchy.
#[derive(Debug)]
pub struct PageNode {
    /// Page payload for this node
    pub data: PageData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, insertion order = traversal order
    pub children: Vec<Index>,
}

/// Arena-based content tree for a single website.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// A node's parent link is set exactly once, when the node is inserted; there
/// is no re-attach operation, so cycles are unrepresentable through this API.
#[derive(Debug)]
pub struct PageArena {
    /// Arena storage for all tree nodes
    arena: Arena<PageNode>,
    /// Index of the root node, None for an empty tree
    root: Option<Index>,
}

impl Default for PageArena {
    fn default() -> Self {
        Self::new()
    }
}

impl PageArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a page, attaching it under `parent` in one step.
    ///
    /// Inserting with `parent = None` sets the root; a second root is
    /// rejected, as is a parent index that does not resolve.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_page(&mut self, data: PageData, parent: Option<Index>) -> SiteResult<Index> {
        match parent {
            Some(parent_idx) => {
                if !self.arena.contains(parent_idx) {
                    return Err(SiteError::PageNotFound(parent_idx));
                }
                let node_idx = self.arena.insert(PageNode {
                    data,
                    parent: Some(parent_idx),
                    children: Vec::new(),
                });
                // contains() checked above, the parent slot is live
                self.arena[parent_idx].children.push(node_idx);
                Ok(node_idx)
            }
            None => {
                if let Some(root_idx) = self.root {
                    let title = self
                        .get_page(root_idx)
                        .map(|n| n.data.title.clone())
                        .unwrap_or_default();
                    return Err(SiteError::RootAlreadyExists(title));
                }
                let node_idx = self.arena.insert(PageNode {
                    data,
                    parent: None,
                    children: Vec::new(),
                });
                self.root = Some(node_idx);
                Ok(node_idx)
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_page(&self, idx: Index) -> Option<&PageNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iterator from the root: parents before children, siblings
    /// in insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIterator {
        PreOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_page(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Find the page with the given route, pre-order.
    #[instrument(level = "trace", skip(self))]
    pub fn find_route(&self, route: &str) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.data.route == route)
            .map(|(idx, _)| idx)
    }

    /// Titles joined by `" > "` from the root down to `idx`.
    ///
    /// Walks the parent chain, which is acyclic by construction.
    #[instrument(level = "debug", skip(self))]
    pub fn breadcrumb(&self, idx: Index) -> SiteResult<String> {
        let mut titles = Vec::new();
        let mut current = Some(idx);
        while let Some(current_idx) = current {
            let node = self
                .get_page(current_idx)
                .ok_or(SiteError::PageNotFound(current_idx))?;
            titles.push(node.data.title.as_str());
            current = node.parent;
        }
        Ok(titles.iter().rev().join(" > "))
    }

    /// All pages whose own tag set contains `tag`, pre-order from the root.
    #[instrument(level = "debug", skip(self))]
    pub fn search_by_tag(&self, tag: &str) -> Vec<Index> {
        self.iter()
            .filter(|(_, node)| node.data.has_tag(tag))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// All pages modified strictly after `cutoff`, pre-order from the root.
    ///
    /// A node's inclusion is independent of its parent's: a stale parent can
    /// still have fresh descendants.
    #[instrument(level = "debug", skip(self))]
    pub fn modified_since(&self, cutoff: DateTime<Utc>) -> Vec<Index> {
        self.iter()
            .filter(|(_, node)| node.data.last_modified() > cutoff)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// All pages modified within the last `days` days.
    #[instrument(level = "debug", skip(self))]
    pub fn recently_modified(&self, days: i64) -> Vec<Index> {
        self.modified_since(Utc::now() - Duration::days(days))
    }

    /// Render the subtree under `idx` for terminal display.
    pub fn to_display_tree(&self, idx: Index) -> SiteResult<Tree<String>> {
        let node = self.get_page(idx).ok_or(SiteError::PageNotFound(idx))?;
        let leaves = node
            .children
            .iter()
            .map(|&child| self.to_display_tree(child))
            .collect::<SiteResult<Vec<_>>>()?;
        Ok(Tree::new(node.data.to_string()).with_leaves(leaves))
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a PageArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a PageArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a PageNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_page(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

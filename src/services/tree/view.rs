//! A rendered tree plus the expansion state that belongs to it.

use super::expansion::ExpansionState;
use super::render::{render_tree, RenderOptions};
use super::types::{TreeNode, TreeRow};
use crate::types::errors::AppResult;

/// Owns the current structure payload and its per-directory state.
///
/// Replacing the tree keeps state only for directories that still exist.
#[derive(Debug, Clone)]
pub struct TreeView {
    root: TreeNode,
    state: ExpansionState,
    options: RenderOptions,
}

impl TreeView {
    pub fn new(root: TreeNode, options: RenderOptions) -> Self {
        Self {
            root,
            state: ExpansionState::new(),
            options,
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    /// Flip one directory. Returns the new expanded flag.
    pub fn toggle(&mut self, key: &str) -> bool {
        self.state.toggle(key)
    }

    pub fn set_expanded(&mut self, key: &str, expanded: bool) {
        self.state.set_expanded(key, expanded);
    }

    pub fn replace(&mut self, root: TreeNode) {
        self.state.retain_existing(&root);
        self.root = root;
    }

    pub fn rows(&self) -> AppResult<Vec<TreeRow>> {
        render_tree(&self.root, &self.state, &self.options)
    }
}

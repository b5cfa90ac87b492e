//! Per-directory expand/collapse state, held outside the tree.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::types::TreeNode;

/// Expanded/collapsed flag per directory key.
///
/// A key with no entry is expanded. Changing one key never touches another,
/// so collapsing a parent keeps whatever its descendants were set to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState {
    entries: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.entries.get(key).copied().unwrap_or(true)
    }

    /// Flip `key` and return its new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let next = !self.is_expanded(key);
        self.entries.insert(key.to_string(), next);
        next
    }

    pub fn set_expanded(&mut self, key: &str, expanded: bool) {
        self.entries.insert(key.to_string(), expanded);
    }

    /// Drop state for directories that no longer exist in `root`.
    pub fn retain_existing(&mut self, root: &TreeNode) {
        let live = directory_keys(root);
        self.entries.retain(|key, _| live.contains(key));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key segment for one node name. `%`, `/` and `#` are percent-escaped so a
/// name can never imitate a path separator or a duplicate suffix.
pub fn key_segment(name: &str) -> String {
    let mut segment = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '%' => segment.push_str("%25"),
            '/' => segment.push_str("%2F"),
            '#' => segment.push_str("%23"),
            other => segment.push(other),
        }
    }
    segment
}

/// Key of the tree root.
pub fn root_key(root: &TreeNode) -> String {
    key_segment(&root.name)
}

/// Keys for `children` of the node at `parent_key`, in order.
///
/// A key is the `/`-joined path of escaped names. A repeated sibling name
/// gets a `#<index>` suffix; escaped names contain no `#`, so every key
/// stays unique.
pub fn child_keys(parent_key: &str, children: &[TreeNode]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let segment = key_segment(&child.name);
            if seen.insert(child.name.as_str()) {
                format!("{parent_key}/{segment}")
            } else {
                format!("{parent_key}/{segment}#{index}")
            }
        })
        .collect()
}

/// Every directory key in the tree rooted at `root`.
pub fn directory_keys(root: &TreeNode) -> HashSet<String> {
    let mut keys = HashSet::new();
    let mut stack = vec![(root, root_key(root))];
    while let Some((node, key)) = stack.pop() {
        if !node.is_directory() {
            continue;
        }
        let children = node.children();
        for (child, child_key) in children.iter().zip(child_keys(&key, children)) {
            stack.push((child, child_key));
        }
        keys.insert(key);
    }
    keys
}

//! Flattening a [`TreeNode`] into visible rows.

use std::fmt::Write;

use super::classifier::{classify, is_visible};
use super::expansion::{child_keys, root_key, ExpansionState};
use super::types::{RowKind, TreeNode, TreeRow};
use crate::services::config::AppConfig;
use crate::types::errors::{AppError, AppResult};

/// Depth guard and indentation for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest nesting level accepted below the root.
    pub max_depth: usize,
    /// Indentation per depth level, in columns.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            indent_width: 2,
        }
    }
}

impl From<&AppConfig> for RenderOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_depth: config.max_tree_depth,
            indent_width: config.indent_width,
        }
    }
}

/// Render a whole tree starting at depth 0.
pub fn render_tree(
    root: &TreeNode,
    state: &ExpansionState,
    options: &RenderOptions,
) -> AppResult<Vec<TreeRow>> {
    render_from(root, 0, state, options)
}

/// Render `root` as if it sat at `depth`.
///
/// The whole tree is depth-checked before any row is produced, so a payload
/// nested deeper than `options.max_depth` fails outright regardless of which
/// directories are collapsed.
pub fn render_from(
    root: &TreeNode,
    depth: usize,
    state: &ExpansionState,
    options: &RenderOptions,
) -> AppResult<Vec<TreeRow>> {
    check_depth(root, options.max_depth)?;

    let mut rows = Vec::new();
    if is_visible(root) {
        push_rows(root, root_key(root), depth, state, options, &mut rows);
    }
    Ok(rows)
}

fn push_rows(
    node: &TreeNode,
    key: String,
    depth: usize,
    state: &ExpansionState,
    options: &RenderOptions,
    rows: &mut Vec<TreeRow>,
) {
    let indent = depth * options.indent_width;

    if !node.is_directory() {
        rows.push(TreeRow {
            key,
            name: node.name.clone(),
            depth,
            indent,
            kind: RowKind::File {
                category: classify(&node.name),
            },
        });
        return;
    }

    let children = node.children();
    let has_toggle = children.iter().any(is_visible);
    let expanded = state.is_expanded(&key);

    rows.push(TreeRow {
        key: key.clone(),
        name: node.name.clone(),
        depth,
        indent,
        kind: RowKind::Directory {
            expanded,
            has_toggle,
        },
    });

    if !expanded {
        return;
    }

    for (child, child_key) in children.iter().zip(child_keys(&key, children)) {
        if is_visible(child) {
            push_rows(child, child_key, depth + 1, state, options, rows);
        }
    }
}

/// Reject trees nested deeper than `max_depth` below the root.
///
/// Iterative, so a hostile payload cannot blow the stack while being checked.
pub fn check_depth(root: &TreeNode, max_depth: usize) -> AppResult<()> {
    let mut stack = vec![(root, 0usize)];
    while let Some((node, level)) = stack.pop() {
        if level > max_depth {
            return Err(AppError::MalformedTree(format!(
                "nesting exceeds {max_depth} levels at '{}'",
                node.name
            )));
        }
        stack.extend(node.children().iter().map(|child| (child, level + 1)));
    }
    Ok(())
}

/// Plain-text view of rendered rows, one per line.
pub fn format_rows(rows: &[TreeRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let (marker, label) = match row.kind {
            RowKind::Directory {
                expanded,
                has_toggle,
            } => {
                let marker = match (has_toggle, expanded) {
                    (false, _) => "  ",
                    (true, true) => "▾ ",
                    (true, false) => "▸ ",
                };
                (marker, format!("{}/", row.name))
            }
            RowKind::File { category } => ("  ", format!("{} [{}]", row.name, category.as_str())),
        };
        let _ = writeln!(out, "{:indent$}{marker}{label}", "", indent = row.indent);
    }
    out
}

/// Names of the file rows, in render order.
pub fn visible_file_names(rows: &[TreeRow]) -> Vec<&str> {
    rows.iter()
        .filter(|row| row.is_file())
        .map(|row| row.name.as_str())
        .collect()
}

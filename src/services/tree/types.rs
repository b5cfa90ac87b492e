use serde::{Deserialize, Serialize};

use super::classifier::FileCategory;

/// Node kind as sent by the backend (`"directory"` / `"file"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Directory,
    File,
}

/// One element of a project structure payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Only meaningful for directories; ignored on files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    /// Backend-side path, when the payload carries one. Not used for identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: NodeType::File,
            children: None,
            path: None,
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            node_type: NodeType::Directory,
            children: Some(children),
            path: None,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.node_type == NodeType::Directory
    }

    /// Children in display order. Always empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match (self.node_type, &self.children) {
            (NodeType::Directory, Some(children)) => children,
            _ => &[],
        }
    }
}

/// What a rendered row shows besides its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RowKind {
    Directory { expanded: bool, has_toggle: bool },
    File { category: FileCategory },
}

/// A single visible line of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    /// Stable node identity, also the [`super::ExpansionState`] key.
    pub key: String,
    pub name: String,
    pub depth: usize,
    pub indent: usize,
    pub kind: RowKind,
}

impl TreeRow {
    pub fn is_file(&self) -> bool {
        matches!(self.kind, RowKind::File { .. })
    }
}

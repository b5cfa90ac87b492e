use std::path::{Path, PathBuf};

use crate::commands::context::AppContext;
use crate::services::api::HttpTransport;
use crate::services::tree::{RenderOptions, TreeNode, TreeView};
use crate::types::errors::{AppError, AppResult};

/// Where a structure payload comes from.
#[derive(Debug, Clone)]
pub enum TreeSource {
    Project(String),
    File(PathBuf),
}

impl TreeSource {
    pub fn from_args(project: Option<String>, file: Option<PathBuf>) -> AppResult<Self> {
        match (project, file) {
            (_, Some(path)) => Ok(Self::File(path)),
            (Some(id), None) => Ok(Self::Project(id)),
            (None, None) => Err(AppError::Config(
                "Provide a project id or --file <structure.json>".into(),
            )),
        }
    }
}

pub async fn load_tree<T: HttpTransport>(
    ctx: &AppContext<T>,
    source: &TreeSource,
) -> AppResult<TreeNode> {
    match source {
        TreeSource::Project(id) => ctx.client.project_structure(id).await,
        TreeSource::File(path) => read_tree_file(path).await,
    }
}

/// Accepts either a bare node or a `{"project": {"structure": ...}}` body.
pub async fn read_tree_file(path: &Path) -> AppResult<TreeNode> {
    let raw = tokio::fs::read_to_string(path).await?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| AppError::MalformedTree(e.to_string()))?;
    let node = value
        .pointer("/project/structure")
        .cloned()
        .unwrap_or(value);
    serde_json::from_value(node).map_err(|e| AppError::MalformedTree(e.to_string()))
}

/// A view with the given directory keys collapsed and everything else at
/// its default (expanded).
pub fn build_view(root: TreeNode, options: RenderOptions, collapse: &[String]) -> TreeView {
    let mut view = TreeView::new(root, options);
    for key in collapse {
        view.set_expanded(key, false);
    }
    view
}

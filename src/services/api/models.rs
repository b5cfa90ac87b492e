use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::services::docs::Documentation;
use crate::services::tree::TreeNode;

/// One item of `GET /api/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub info: Option<ProjectInfo>,
}

impl ProjectSummary {
    /// Path identifier for detail and delete calls. The backend keys projects
    /// by name and only some payloads carry an `id`.
    pub fn identifier(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    pub fn embedded_documentation(&self) -> Option<&Documentation> {
        self.info.as_ref().and_then(|info| info.documentation.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub dependencies: Value,
    pub entry_points: Value,
    pub key_components: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Documentation>,
}

/// Body of `POST /api/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UploadResponse {
    pub status: Option<String>,
    pub error: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub project_id: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub project_name: Option<String>,
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    pub fn identifier(self) -> Option<String> {
        self.project_id.or(self.id).or(self.project_name)
    }
}

/// Outcome of an accepted upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    pub project_name: String,
    pub project_id: Option<String>,
}

/// Body of `POST /api/generate-docs/{name}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GenerateDocsResponse {
    pub status: Option<String>,
    pub error: Option<String>,
    pub documentation: Option<Documentation>,
}

/// Body of `GET /api/projects/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ProjectDetailResponse {
    pub project: Option<ProjectDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDetail {
    pub name: Option<String>,
    pub structure: Option<TreeNode>,
}

/// Error body shape used by the backend (`{"detail": "..."}`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorDetail {
    pub detail: Option<Value>,
}

impl ErrorDetail {
    pub fn message(self) -> Option<String> {
        match self.detail? {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            Value::String(_) | Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

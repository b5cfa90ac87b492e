use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output of the generate-docs endpoint. Every field is optional on the wire;
/// unknown fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Documentation {
    pub project_name: Option<String>,
    pub project_info: DocProjectInfo,
    pub file_structure: Value,
    pub analysis: Analysis,
    pub modules: Vec<Value>,
    pub functions: Vec<Value>,
    pub classes: Vec<Value>,
    pub apis: Vec<Value>,
    pub overview: Option<String>,
    pub architecture: Option<String>,
    pub dependencies: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocProjectInfo {
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub dependencies: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    pub summary: Option<String>,
    pub components: Vec<Component>,
    pub code_quality: CodeQuality,
}

/// One analysed source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    pub file: String,
    pub description: Option<String>,
    pub functions: Vec<FunctionDoc>,
    pub classes: Vec<ClassDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionDoc {
    pub name: String,
    pub args: Vec<String>,
    pub docstring: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassDoc {
    pub name: String,
    pub docstring: Option<String>,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeQuality {
    pub total_lines: u64,
    pub code_lines: u64,
    pub comment_lines: u64,
    /// Percentage, 0-100.
    pub docstring_coverage: f64,
    pub recommendations: Option<String>,
}

/// Display text for a loosely typed list item (dependency, module, ...).
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

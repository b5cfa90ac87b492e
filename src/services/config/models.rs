use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings for the client and the tree view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin, no trailing slash (e.g. `http://localhost:8000`).
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub max_tree_depth: usize,
    pub indent_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".into(),
            timeout_secs: 30,
            max_tree_depth: 64,
            indent_width: 2,
        }
    }
}

impl AppConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Values given on the command line; `None` keeps the loaded value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_tree_depth: Option<usize>,
}

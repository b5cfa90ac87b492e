//! Extension-driven file classification for the tree view.
//!
//! Classification looks only at the final extension (text after the last
//! `.`, lowercased) and walks [`CATEGORY_TABLE`] in order; the first
//! category that lists the extension wins.

use serde::Serialize;

use super::types::TreeNode;

/// Icon category of a file row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Script,
    Style,
    Markup,
    Config,
    Doc,
    Source,
    Data,
    Default,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
            Self::Markup => "markup",
            Self::Config => "config",
            Self::Doc => "doc",
            Self::Source => "source",
            Self::Data => "data",
            Self::Default => "file",
        }
    }
}

/// Ordered category table, first match wins.
const CATEGORY_TABLE: &[(FileCategory, &[&str])] = &[
    (
        FileCategory::Script,
        &["js", "jsx", "ts", "tsx", "vue", "svelte"],
    ),
    (FileCategory::Style, &["css", "scss", "sass", "less", "styl"]),
    (
        FileCategory::Markup,
        &[
            "html", "htm", "xhtml", "jsp", "asp", "aspx", "ejs", "hbs", "pug",
        ],
    ),
    (
        FileCategory::Config,
        &["json", "yaml", "yml", "xml", "toml", "ini", "env", "config"],
    ),
    (
        FileCategory::Doc,
        &["md", "mdx", "txt", "rst", "pdf", "doc", "docx"],
    ),
    (
        FileCategory::Source,
        &[
            // backend
            "py", "rb", "php", "java", "kt", "scala", "go", "rs", "cs", "fs", "vb",
            // systems
            "c", "cpp", "h", "hpp", "cc", "cxx",
            // shell
            "sh", "bash", "zsh", "fish", "ps1", "bat", "cmd",
            // other languages
            "swift", "r", "dart", "lua", "pl", "pm", "ex", "exs", "erl", "hrl",
            // build tools and frameworks
            "spring", "gradle", "maven", "ant", "django", "flask", "rails",
        ],
    ),
    (
        FileCategory::Data,
        &["sql", "sqlite", "prisma", "graphql", "gql"],
    ),
];

/// Image formats hidden from the tree entirely.
const HIDDEN_IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "svg", "ico", "webp", "tiff",
];

/// Lowercased text after the last `.`; a name without a dot is its own extension.
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

pub fn classify(name: &str) -> FileCategory {
    let ext = extension_of(name);
    CATEGORY_TABLE
        .iter()
        .find(|(_, extensions)| extensions.contains(&ext.as_str()))
        .map(|(category, _)| *category)
        .unwrap_or(FileCategory::Default)
}

/// `false` for image files. Directories are never hidden.
pub fn is_visible(node: &TreeNode) -> bool {
    if node.is_directory() {
        return true;
    }
    let ext = extension_of(&node.name);
    !HIDDEN_IMAGE_EXTENSIONS.contains(&ext.as_str())
}

use serde::Serialize;

/// One selected file: its picker-relative path and raw content.
///
/// The path starts with the project folder name, e.g. `my-app/src/main.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub content: Vec<u8>,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A packaged project, ready to hand to the transport.
#[derive(Debug, Clone)]
pub struct ArchiveBlob {
    pub project_name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveBlob {
    /// Upload file name, `<projectName>.zip`.
    pub fn file_name(&self) -> String {
        format!("{}.zip", self.project_name)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Summary of a local `pack` run.
#[derive(Debug, Clone, Serialize)]
pub struct PackReport {
    pub project_name: String,
    pub output_path: String,
    pub file_count: usize,
    pub size_bytes: usize,
}

//! Local stand-in for the browser's directory picker.
//! Uses `walkdir` for the recursive traversal.

use std::path::Path;

use walkdir::WalkDir;

use super::types::FileEntry;
use crate::types::errors::{AppError, AppResult};

/// Read every file under `dir` into picker-style entries.
///
/// Paths are rooted at the folder's own name and use `/` separators, so
/// `~/code/my-app/src/lib.rs` becomes `my-app/src/lib.rs`. Traversal order is
/// sorted by file name, which keeps the archive layout deterministic.
pub fn read_folder(dir: &Path) -> AppResult<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(AppError::Io(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    // Canonicalize so `.` and `..` still yield a real folder name.
    let root = dir.canonicalize()?;
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Io(format!("Folder has no name: {}", root.display())))?;

    let mut entries = Vec::new();
    for item in WalkDir::new(&root).sort_by_file_name() {
        let item = item?;
        if !item.file_type().is_file() {
            continue;
        }

        let relative = item
            .path()
            .strip_prefix(&root)
            .map_err(|e| AppError::Io(e.to_string()))?;
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let content = std::fs::read(item.path())?;
        entries.push(FileEntry::new(format!("{root_name}/{relative}"), content));
    }

    log::debug!("Read {} file(s) from {}", entries.len(), root.display());
    Ok(entries)
}

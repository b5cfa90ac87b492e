//! In-memory zip packaging of picker entries.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::types::{ArchiveBlob, FileEntry};
use crate::types::errors::{AppError, AppResult};

/// Project name: the text before the first `/` of a picker path.
pub fn project_name_of(path: &str) -> &str {
    path.split('/').next().unwrap_or(path)
}

/// Remove the first occurrence of `<project_name>/` from `path`.
///
/// Paths that do not contain the prefix come back unchanged.
pub fn strip_project_prefix(path: &str, project_name: &str) -> String {
    let prefix = format!("{project_name}/");
    path.replacen(&prefix, "", 1)
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Package `files` into one zip blob named after the first entry's project.
///
/// Entries are written in input order. Entries that don't share the project
/// prefix are still packaged (at their own path). Fails with
/// [`AppError::EmptyInput`] when nothing was selected and with
/// [`AppError::ArchiveEncoding`] when the zip writer rejects an entry.
pub fn pack(files: &[FileEntry]) -> AppResult<ArchiveBlob> {
    let first = files.first().ok_or(AppError::EmptyInput)?;
    let project_name = project_name_of(&first.path).to_string();

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for entry in files {
        let relative_path = strip_project_prefix(&entry.path, &project_name);
        writer.start_file(relative_path, entry_options())?;
        writer
            .write_all(&entry.content)
            .map_err(|e| AppError::ArchiveEncoding(e.to_string()))?;
    }
    let bytes = writer.finish()?.into_inner();

    log::debug!(
        "Packed {} file(s) for '{}' into {} bytes",
        files.len(),
        project_name,
        bytes.len()
    );

    Ok(ArchiveBlob {
        project_name,
        bytes,
    })
}

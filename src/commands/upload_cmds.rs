use std::path::{Path, PathBuf};

use crate::commands::context::AppContext;
use crate::services::api::{HttpTransport, UploadReceipt};
use crate::services::archive::types::PackReport;
use crate::services::archive::{pack, read_folder, ArchiveBlob};
use crate::services::events::ClientEvent;
use crate::types::errors::{AppError, AppResult};

/// Read and zip a folder off the async runtime. Returns the blob and the
/// number of files it holds.
async fn pack_dir(dir: &Path) -> AppResult<(ArchiveBlob, usize)> {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || -> AppResult<(ArchiveBlob, usize)> {
        let entries = read_folder(&dir)?;
        let blob = pack(&entries)?;
        Ok((blob, entries.len()))
    })
    .await
    .map_err(|e| AppError::Io(format!("Packaging task failed: {e}")))?
}

/// Zip `dir` and write it to `output` (default `<project>.zip` in the
/// working directory).
pub async fn pack_folder(dir: &Path, output: Option<&Path>) -> AppResult<PackReport> {
    let (blob, file_count) = pack_dir(dir).await?;
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(blob.file_name()));

    tokio::fs::write(&output_path, &blob.bytes).await?;
    log::info!(
        "Wrote {} ({} files, {} bytes)",
        output_path.display(),
        file_count,
        blob.len()
    );

    Ok(PackReport {
        project_name: blob.project_name,
        output_path: output_path.to_string_lossy().to_string(),
        file_count,
        size_bytes: blob.bytes.len(),
    })
}

/// Package `dir` and submit it. Only one upload runs at a time per context;
/// an empty folder fails before anything is sent.
pub async fn upload_folder<T: HttpTransport>(
    ctx: &AppContext<T>,
    dir: &Path,
) -> AppResult<UploadReceipt> {
    let _lock = ctx.upload_lock.acquire().await?;

    let (blob, files) = pack_dir(dir).await?;
    ctx.client.events().emit(ClientEvent::ArchivePacked {
        project: blob.project_name.clone(),
        files,
        bytes: blob.len(),
    });

    ctx.client.upload(&blob).await
}

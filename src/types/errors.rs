use serde::Serialize;
use thiserror::Error;

/// Every failure the client can surface to a caller.
///
/// All of them are recovered at the CLI boundary and shown as a single
/// message. None is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No files selected")]
    EmptyInput,
    #[error("Archive encoding failed: {0}")]
    ArchiveEncoding(String),
    #[error("Upload failed: {0}")]
    UploadFailed(String),
    #[error("Fetch failed: {0}")]
    Fetch(String),
    #[error("Malformed tree: {0}")]
    MalformedTree(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("An upload is already in progress. Please wait.")]
    Busy,
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error.to_string())
    }
}

impl From<walkdir::Error> for AppError {
    fn from(error: walkdir::Error) -> Self {
        AppError::Io(error.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(error: zip::result::ZipError) -> Self {
        AppError::ArchiveEncoding(error.to_string())
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type AppResult<T> = Result<T, AppError>;

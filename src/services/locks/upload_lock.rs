//! Guard against overlapping uploads.
//!
//! A second upload started while one is in flight is rejected right away
//! instead of queueing behind it.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::types::errors::{AppError, AppResult};

/// Held for the duration of one upload. Acquired at the command layer so the
/// API client stays reusable.
pub struct UploadLock {
    lock: Arc<Mutex<()>>,
}

impl UploadLock {
    pub fn new() -> Self {
        Self {
            lock: Arc::new(Mutex::new(())),
        }
    }
}

impl Default for UploadLock {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadLock {
    /// Try to acquire the lock, waiting at most 50ms.
    /// Returns [`AppError::Busy`] if another upload holds it.
    pub async fn acquire(&self) -> AppResult<OwnedMutexGuard<()>> {
        match tokio::time::timeout(Duration::from_millis(50), self.lock.clone().lock_owned()).await
        {
            Ok(guard) => Ok(guard),
            Err(_) => Err(AppError::Busy),
        }
    }
}

#[cfg(test)]
#[path = "tests/upload_lock_tests.rs"]
mod tests;

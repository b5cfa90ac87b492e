//! Observability capability handed to the API client.
//!
//! The client never logs directly; it emits [`ClientEvent`]s into an
//! [`EventSink`]. [`LogSink`] forwards them to the `log` facade and
//! [`RecordingSink`] keeps them in memory.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use log::Level;

use crate::services::api::transport::Method;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    RequestSent {
        method: Method,
        url: String,
    },
    ResponseReceived {
        method: Method,
        url: String,
        status: u16,
    },
    TransportFailed {
        method: Method,
        url: String,
        message: String,
    },
    ArchivePacked {
        project: String,
        files: usize,
        bytes: usize,
    },
    UploadAccepted {
        project: String,
        project_id: Option<String>,
    },
    UploadRejected {
        project: String,
        reason: String,
    },
    DocumentationReused {
        project: String,
    },
}

impl ClientEvent {
    pub fn level(&self) -> Level {
        match self {
            Self::RequestSent { .. } | Self::DocumentationReused { .. } => Level::Debug,
            Self::ResponseReceived { status, .. } if (200..300).contains(status) => Level::Debug,
            Self::ResponseReceived { .. } => Level::Warn,
            Self::TransportFailed { .. } | Self::UploadRejected { .. } => Level::Error,
            Self::ArchivePacked { .. } | Self::UploadAccepted { .. } => Level::Info,
        }
    }
}

impl fmt::Display for ClientEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestSent { method, url } => write!(f, "{method} {url}"),
            Self::ResponseReceived {
                method,
                url,
                status,
            } => write!(f, "{method} {url} -> {status}"),
            Self::TransportFailed {
                method,
                url,
                message,
            } => write!(f, "{method} {url} failed: {message}"),
            Self::ArchivePacked {
                project,
                files,
                bytes,
            } => write!(f, "Packed '{project}': {files} file(s), {bytes} bytes"),
            Self::UploadAccepted {
                project,
                project_id,
            } => match project_id {
                Some(id) => write!(f, "Upload of '{project}' accepted as '{id}'"),
                None => write!(f, "Upload of '{project}' accepted"),
            },
            Self::UploadRejected { project, reason } => {
                write!(f, "Upload of '{project}' rejected: {reason}")
            }
            Self::DocumentationReused { project } => {
                write!(f, "Using embedded documentation for '{project}'")
            }
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

/// Default sink: one `log` record per event at the event's level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: ClientEvent) {
        log::log!(event.level(), "{event}");
    }
}

/// Keeps every event in order, for callers that want to inspect them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ClientEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ClientEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: ClientEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;

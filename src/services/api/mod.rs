//! Typed access to the documentation generator backend.
//!
//! [`ProjectsClient`] builds requests and interprets responses; the actual
//! I/O goes through an [`HttpTransport`], which is [`ReqwestTransport`] in
//! production.

pub mod client;
pub mod models;
pub mod transport;

pub use client::ProjectsClient;
pub use models::{ProjectSummary, UploadReceipt};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;

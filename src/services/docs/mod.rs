//! Generated documentation: the lenient payload model and a plain-text view.

pub mod format;
pub mod models;

pub use format::{categorize_technology, format_documentation, TechCategory};
pub use models::Documentation;

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;

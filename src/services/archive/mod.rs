//! Folder packaging for upload.
//!
//! - [`folder_reader`] turns a local directory into the `(path, bytes)` list a
//!   directory picker would hand over.
//! - [`packer`] strips the shared project segment and zips the entries in memory.

pub mod folder_reader;
pub mod packer;
pub mod types;

pub use folder_reader::read_folder;
pub use packer::pack;
pub use types::{ArchiveBlob, FileEntry};

#[cfg(test)]
#[path = "tests/packer_tests.rs"]
mod packer_tests;

#[cfg(test)]
#[path = "tests/folder_reader_tests.rs"]
mod folder_reader_tests;

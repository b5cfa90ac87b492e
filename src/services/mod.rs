pub mod api;
pub mod archive;
pub mod config;
pub mod locks;
pub mod docs;
pub mod events;
pub mod tree;

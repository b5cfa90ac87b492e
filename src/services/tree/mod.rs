//! Project structure rendering.
//!
//! The backend returns a nested [`TreeNode`] payload. Rendering turns it into a
//! flat list of [`TreeRow`]s: image files are hidden, files get a category
//! from their extension, and directories honour an explicit
//! [`ExpansionState`] keyed by node path.

pub mod classifier;
pub mod expansion;
pub mod render;
pub mod types;
pub mod view;

pub use classifier::{classify, FileCategory};
pub use expansion::ExpansionState;
pub use render::{format_rows, render_tree, visible_file_names, RenderOptions};
pub use types::{NodeType, RowKind, TreeNode, TreeRow};
pub use view::TreeView;

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod classifier_tests;

#[cfg(test)]
#[path = "tests/expansion_tests.rs"]
mod expansion_tests;

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod render_tests;

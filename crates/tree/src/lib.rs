//! The laid-out box tree the painter reads.
//!
//! Layout produces it; painting only reads it. Trees can be assembled in code
//! through [`BoxTree::add_root`] / [`BoxTree::add_child`] or loaded from a JSON
//! [`BoxDescription`].

pub mod description;
pub mod error;
pub mod node;
pub mod tree;

pub use description::{BoxDescription, StyleInput};
pub use error::TreeError;
pub use node::{BoxGeometry, BoxNode, Fragment, SourceNode, TEXT_TAG};
pub use tree::{BoxId, BoxTree, Preorder};

#[cfg(test)]
mod tree_test;

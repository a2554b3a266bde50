//! The command tree: munging flat declarations into a forest and merging
//! forests together.
//!
//! - [`NameMunger`] - Flat declarations to a [`Forest`]
//! - [`merge_forests`] - Name-keyed recursive merge
//! - [`TreeDisplay`] - Human-readable rendering

mod display;
mod merge;
mod munge;
mod node;

pub use display::{DisplayStyle, TreeDisplay};
pub use merge::{forest_eq, merge_forests};
pub use munge::{MungeError, NameMunger, REPLACEMENT_NAME};
pub use node::{Forest, TreeNode, dispatch_depth};

//! Indented text output for emitters.
//!
//! Emitters describe Go source as [`CodeFragment`]s (usually through
//! [`Renderable`]) and a [`CodeBuilder`] lays them out with tab indentation.

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};

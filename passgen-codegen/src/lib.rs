//! Shared code generation for the passgen command tree generator.
//!
//! This crate turns flat command declarations into a command tree and
//! provides the language-agnostic pieces used by target generators
//! (e.g., `passgen-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`flags`] - Flag translation onto runtime flag constructs
//! - [`middleware`] - Action middlewares
//! - [`tree`] - Command tree munging, merging and display
//! - [`pipeline`] - Validation and tree-building phases
//! - [`language`] - Target language abstractions (LanguageCodegen, PreviewFile)

pub mod builder;
pub mod flags;
pub mod language;
pub mod middleware;
pub mod pipeline;
mod source;
pub mod tree;

pub use flags::{FlagKind, FlagTranslator, GenericFlag, StandardFlag, TranslatedFlag};
pub use middleware::Middleware;
pub use source::CommandSource;

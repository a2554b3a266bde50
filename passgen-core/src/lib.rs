//! Core utilities and types for passgen.
//!
//! This crate provides the file-writing and post-processing primitives
//! shared by the generator crates.

mod file;
mod format;
mod utils;

// File operations
pub use file::{GENERATED_HEADER, GeneratedFile};
// Post-processing
pub use format::Formatter;
// String utilities
pub use utils::{quote_go_string, strip_flag_prefix};

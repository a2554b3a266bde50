//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the declarations
//! - [`MungePhase`] - builds the command forest

mod munge;
mod validate;

pub use munge::MungePhase;
pub use validate::{
    DuplicateSlugLint, EmptyDescriptionLint, Lint, LintInfo, UsagePrefixLint, ValidatePhase,
};

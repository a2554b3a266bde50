//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for target language generators
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};

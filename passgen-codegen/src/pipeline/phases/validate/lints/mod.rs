//! Built-in lints for command declarations.

mod duplicate_slug;
mod empty_description;
mod usage_prefix;

pub use duplicate_slug::DuplicateSlugLint;
pub use empty_description::EmptyDescriptionLint;
pub use usage_prefix::UsagePrefixLint;

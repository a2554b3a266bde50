//! Organization commands.

mod create;

pub use create::{NAME_RULE, OrgsCreate, validate_name};

//! Generation pipeline.
//!
//! The [`Pipeline`] loads a [`CommandSource`](crate::CommandSource) once,
//! then runs its phases in order:
//!
//! - Explicit phase boundaries (validate → munge)
//! - Plugin hooks before and after each phase
//! - Unified diagnostics collection in [`CompilationContext`]
//!
//! # Example
//!
//! ```
//! use passgen_codegen::pipeline::Pipeline;
//! use passgen_manifest::{CommandSpec, Tables};
//!
//! let commands = vec![
//!     CommandSpec::new("orgs:create", "create", "orgs create <name>")
//!         .with_group("orgs")
//!         .with_description("Create a new organization"),
//! ];
//!
//! let mut ctx = Pipeline::new(Tables::default()).run(&commands).unwrap();
//! assert!(!ctx.has_warnings());
//!
//! let forest = ctx.take_forest().unwrap();
//! assert_eq!(forest.command_count(), 1);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::{Plugin, TracingPlugin};
pub use runner::Pipeline;

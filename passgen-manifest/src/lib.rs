// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! `passgen.toml` parsing and validation.
//!
//! The manifest declares the command registry (a flat list of
//! [`CommandSpec`]s), the lookup [`Tables`] and the generator settings.

mod command;
mod error;
mod manifest;
mod native;
mod tables;

pub use command::{CommandSpec, FlagSpec};
pub use error::{Error, Result, SourceContext};
pub use manifest::{GeneratorConfig, Manifest, ParseContext, PassgenToml, parse_manifest};
pub use native::NativeCommand;
pub use tables::Tables;

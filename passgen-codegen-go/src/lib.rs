//! Go code generator for passgen.
//!
//! Renders a command forest as `urfave/cli` command descriptors in a
//! single `passthrough.go`, together with the routine that merges them
//! into the hand-written command tree at startup.

mod emit;
mod generator;

pub mod ast;
pub mod files;

pub use emit::{CMD_PACKAGE, CodeEmitter, CommandsVar, PASSTHROUGH_FN};
pub use generator::Generator;
pub use passgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};

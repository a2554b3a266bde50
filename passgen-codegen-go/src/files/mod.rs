//! Generated files.

mod passthrough_go;

pub use passthrough_go::{COMMANDS_VAR, PassthroughGo, URFAVE_CLI};

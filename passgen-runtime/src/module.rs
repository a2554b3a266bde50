use passgen_manifest::CommandSpec;
use serde_json::Value;

use crate::{ExecContext, Result};

/// A command implemented in-process.
///
/// The generated CLI dispatches to modules by slug; `spec` is the
/// declaration the generator builds the command tree from.
pub trait CommandModule {
    fn spec(&self) -> CommandSpec;

    fn execute(&self, ctx: &ExecContext) -> Result<Value>;
}

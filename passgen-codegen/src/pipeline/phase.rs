use eyre::Result;

use super::CompilationContext;

/// One step of the pipeline.
///
/// The built-in steps are `validate` (lints over the raw declarations) and
/// `munge` (builds the forest). Extra phases run after them and see the
/// finished forest in the context.
pub trait Phase: Send + Sync {
    /// Name used in diagnostics and plugin hooks.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run on the context.
    ///
    /// # Errors
    ///
    /// A returned error stops the pipeline. Problems that should not stop
    /// it are recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}

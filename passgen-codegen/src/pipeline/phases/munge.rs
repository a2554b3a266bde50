//! Munge phase - builds the command forest.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Diagnostic, Phase},
    tree::{MungeError, NameMunger},
};

/// Phase that turns the flat declarations into a [`Forest`](crate::tree::Forest).
pub struct MungePhase;

impl Phase for MungePhase {
    fn name(&self) -> &'static str {
        "munge"
    }

    fn description(&self) -> &'static str {
        "Group flat declarations into a command tree"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        match NameMunger::new(&ctx.tables).munge(&ctx.commands) {
            Ok(forest) => {
                ctx.forest = Some(forest);
                Ok(())
            }
            Err(err) => {
                let diagnostic = Diagnostic::error(self.name(), err.to_string());
                ctx.add_diagnostic(locate(diagnostic, &err));
                Err(err.into())
            }
        }
    }
}

fn locate(diagnostic: Diagnostic, err: &MungeError) -> Diagnostic {
    match err {
        MungeError::DuplicateKey { second, .. } => diagnostic.at_command(second),
        MungeError::DuplicateName { slug, .. } => diagnostic.at_command(slug),
        MungeError::MalformedUsage { slug, .. } => diagnostic.at_field(slug, "usage"),
    }
}

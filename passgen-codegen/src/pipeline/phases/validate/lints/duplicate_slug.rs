//! Lint for duplicate slug detection.

use indexmap::IndexSet;
use passgen_manifest::CommandSpec;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on slugs declared more than once.
pub struct DuplicateSlugLint;

impl Lint for DuplicateSlugLint {
    fn name(&self) -> &'static str {
        "duplicate-slug"
    }

    fn description(&self) -> &'static str {
        "Detect commands declared more than once"
    }

    fn check(&self, commands: &[CommandSpec], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = IndexSet::new();

        for cmd in commands {
            if !seen.insert(cmd.slug.as_str()) {
                diagnostics.push(
                    Diagnostic::error("validate", format!("duplicate command '{}'", cmd.slug))
                        .at_command(&cmd.slug),
                );
            }
        }
    }
}

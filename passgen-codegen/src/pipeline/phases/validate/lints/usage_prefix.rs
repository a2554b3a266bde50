//! Lint for usage strings that do not start with their command path.

use passgen_manifest::CommandSpec;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when a usage string cannot be split into command path
/// and argument usage.
pub struct UsagePrefixLint;

impl Lint for UsagePrefixLint {
    fn name(&self) -> &'static str {
        "usage-prefix"
    }

    fn description(&self) -> &'static str {
        "Check that every usage string starts with its command path"
    }

    fn check(&self, commands: &[CommandSpec], diagnostics: &mut Vec<Diagnostic>) {
        for cmd in commands {
            if cmd.args_usage().is_none() {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "usage '{}' of '{}' does not start with '{}'",
                            cmd.usage,
                            cmd.slug,
                            cmd.slug.replace(':', " ")
                        ),
                    )
                    .at_field(&cmd.slug, "usage"),
                );
            }
        }
    }
}

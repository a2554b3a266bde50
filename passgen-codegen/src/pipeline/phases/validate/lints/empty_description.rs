//! Lint for empty command descriptions.

use passgen_manifest::CommandSpec;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about commands missing descriptions.
///
/// The description becomes the help usage line of the generated command.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about commands without help text"
    }

    fn check(&self, commands: &[CommandSpec], diagnostics: &mut Vec<Diagnostic>) {
        for cmd in commands {
            if cmd.description.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("command '{}' has no description", cmd.slug),
                    )
                    .at_command(&cmd.slug),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description() {
        let commands = [CommandSpec::new("view", "view", "view")];

        let mut diagnostics = Vec::new();
        EmptyDescriptionLint.check(&commands, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("view"));
        assert!(diagnostics[0].severity.is_warning());
    }

    #[test]
    fn test_has_description() {
        let commands =
            [CommandSpec::new("view", "view", "view").with_description("View secrets")];

        let mut diagnostics = Vec::new();
        EmptyDescriptionLint.check(&commands, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}

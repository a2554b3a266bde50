//! Interactive input for missing arguments.

use dialoguer::{Input, theme::ColorfulTheme};
use indexmap::IndexMap;

use crate::{Result, RuntimeError};

/// One value to ask the user for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptField {
    pub name: String,
    pub label: String,
    /// Pre-filled answer, usually taken from the command line
    pub default: Option<String>,
}

impl PromptField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }
}

/// Asks the user for values, keyed by field name.
pub trait Prompt {
    fn prompt(&self, fields: &[PromptField]) -> Result<IndexMap<String, String>>;
}

/// Terminal prompt backed by `dialoguer`.
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompt for TerminalPrompt {
    fn prompt(&self, fields: &[PromptField]) -> Result<IndexMap<String, String>> {
        let mut answers = IndexMap::new();

        for field in fields {
            let mut input = Input::<String>::with_theme(&self.theme).with_prompt(&field.label);
            if let Some(default) = &field.default {
                input = input.default(default.clone());
            }

            let value = input
                .interact_text()
                .map_err(|e| RuntimeError::Prompt(e.to_string()))?;
            answers.insert(field.name.clone(), value);
        }

        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_default() {
        let field = PromptField::new("name", "Org name").with_default(Some("acme".to_string()));
        assert_eq!(field.default.as_deref(), Some("acme"));
        assert_eq!(PromptField::new("name", "Org name").default, None);
    }
}

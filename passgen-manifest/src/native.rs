use serde::{Deserialize, Serialize};

use crate::{error::Result, manifest::ParseContext};

/// A node of the hand-written command tree.
///
/// Only names and nesting matter for merging; the generated tree is merged
/// into this one by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NativeCommand {
    pub name: String,

    #[serde(default)]
    pub usage: String,

    #[serde(default)]
    pub subcmds: Vec<NativeCommand>,
}

impl NativeCommand {
    pub fn validate(&self, ctx: &ParseContext) -> Result<()> {
        if self.name.is_empty() || self.name.chars().any(char::is_whitespace) {
            return Err(ctx.source_context().validation_error(
                format!("invalid native command name '{}'", self.name),
                ctx.find_value_span("name", &self.name),
            ));
        }
        for sub in &self.subcmds {
            sub.validate(ctx)?;
        }
        Ok(())
    }
}

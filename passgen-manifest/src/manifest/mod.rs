//! Manifest types and parsing for passgen.toml files.

mod file;
mod generator;
mod parse;
mod validate;

pub use file::PassgenToml;
pub use generator::GeneratorConfig;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

use crate::{CommandSpec, NativeCommand, Tables};

/// Root manifest for passgen.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Output settings for the generated artifact
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Lookup tables driving naming, categories and middleware selection
    #[serde(default)]
    pub tables: Tables,

    /// Declared commands, in registry order
    #[serde(default)]
    pub commands: Vec<CommandSpec>,

    /// The hand-written command tree the generated one is merged into
    #[serde(default)]
    pub native: Vec<NativeCommand>,
}

impl Manifest {
    /// Find a declared command by slug.
    pub fn command(&self, slug: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.slug == slug)
    }
}

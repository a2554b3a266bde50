use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use passgen_manifest::PassgenToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TreeCommand {
    /// Path to passgen.toml (defaults to ./passgen.toml)
    #[arg(short, long, default_value = "passgen.toml")]
    pub config: PathBuf,

    /// Merge with the native command tree declared in `[[native]]`
    #[arg(long)]
    pub merged: bool,

    /// Print the tree as JSON
    #[arg(long)]
    pub json: bool,
}

impl TreeCommand {
    pub fn run(&self) -> Result<()> {
        let passgen_toml = PassgenToml::open(&self.config).unwrap_or_exit();

        let report = ops::tree(passgen_toml.manifest(), self.merged)?;
        if self.json {
            println!("{}", report.to_json()?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}

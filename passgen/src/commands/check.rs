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
pub struct CheckCommand {
    /// Path to passgen.toml (defaults to ./passgen.toml)
    #[arg(short, long, default_value = "passgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let passgen_toml = PassgenToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(passgen_toml.manifest(), &self.config)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}

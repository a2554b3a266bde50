use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use passgen_manifest::PassgenToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to passgen.toml (defaults to ./passgen.toml)
    #[arg(short, long, default_value = "passgen.toml")]
    pub config: PathBuf,

    /// Output file (overrides `generator.output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Skip running the formatter on the written file
    #[arg(long)]
    pub no_format: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let passgen_toml = PassgenToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &passgen_toml,
            GenerateOptions {
                output: self.output.as_deref(),
                dry_run: self.dry_run,
                format: !self.no_format,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

//! External formatter invocation for generated files.

use std::{path::Path, process::Command};

use eyre::{Result, WrapErr, bail};

/// An external source formatter run over a file after it is written
/// (e.g. `gofmt -w`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    program: String,
    args: Vec<String>,
}

impl Formatter {
    /// Create a formatter from a program and its leading arguments.
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a formatter from an argv list. An empty list disables formatting.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    /// `gofmt -w`
    pub fn gofmt() -> Self {
        Self::new("gofmt", ["-w"])
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the formatter on `path`, blocking until it exits.
    ///
    /// A spawn failure or a non-zero exit status is an error.
    pub fn run(&self, path: &Path) -> Result<()> {
        tracing::debug!(program = %self.program, path = %path.display(), "running formatter");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .wrap_err_with(|| format!("failed to run formatter '{}'", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "formatter '{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
        }

        Ok(())
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::gofmt()
    }
}

//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from declaration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Commands in the built tree, if it could be built.
    pub command_count: Option<usize>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            if let Some(count) = self.command_count {
                out.preformatted(&format!(
                    "  {} command{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
            }
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.config_path.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
        }
    }
}

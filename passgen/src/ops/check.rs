//! Check operation - declaration validation.

use std::path::Path;

use eyre::Result;
use passgen_codegen::pipeline::{Pipeline, Severity};
use passgen_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint and the munger, collecting diagnostics instead of
/// stopping at the first failure.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let ctx = Pipeline::new(manifest.tables.clone()).check(manifest)?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let command_count = ctx.forest.as_ref().map(|f| f.command_count());

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        command_count,
    })
}

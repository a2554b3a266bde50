//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use passgen_manifest::{CommandSpec, Tables};

use super::diagnostic::{Diagnostic, Severity};
use crate::tree::Forest;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of generation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The fully loaded declarations, in registry order.
    pub commands: Vec<CommandSpec>,
    /// Lookup tables driving naming and middleware selection.
    pub tables: Tables,
    /// The command forest (populated by MungePhase).
    pub forest: Option<Forest>,
    /// Diagnostics collected during generation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(commands: Vec<CommandSpec>, tables: Tables) -> Self {
        Self {
            commands,
            tables,
            forest: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the forest out of the context.
    ///
    /// # Errors
    ///
    /// Returns an error if MungePhase hasn't run.
    pub fn take_forest(&mut self) -> Result<Forest> {
        self.forest
            .take()
            .ok_or_else(|| eyre!("command forest not built - did MungePhase run?"))
    }
}

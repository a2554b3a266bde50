//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Number of commands with an action.
    pub command_count: usize,

    /// Command tree display string.
    pub command_tree: String,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub files: Vec<PathBuf>,
    /// Whether the formatter ran.
    pub formatted: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => Self::render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.section(&format!("Commands ({})", self.command_count));
        out.preformatted(&self.command_tree);
        out.newline();

        out.section("Generated");
        for file in &written.files {
            out.added_item(&file.display().to_string());
        }
        if !written.formatted {
            out.key_value("Formatter", "skipped");
        }
    }

    fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

//! Generate operation - Go code generation from the manifest.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use passgen_codegen::{
    pipeline::{Pipeline, TracingPlugin},
    tree::{DisplayStyle, TreeDisplay},
};
use passgen_codegen_go::{Generator, LanguageCodegen};
use passgen_manifest::PassgenToml;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output file, relative to the working directory. Falls back to
    /// `generator.output` relative to the manifest.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to run the configured formatter.
    pub format: bool,
}

/// Execute the generate operation.
pub fn generate(passgen_toml: &PassgenToml, opts: GenerateOptions) -> Result<GenerateReport> {
    let manifest = passgen_toml.manifest();

    let mut ctx = Pipeline::new(manifest.tables.clone())
        .plugin(TracingPlugin)
        .run(manifest)
        .wrap_err("Pipeline failed")?;

    let warnings = ctx.warnings().map(|d| d.message.clone()).collect();

    let forest = ctx.take_forest()?;
    let command_count = forest.command_count();
    let nodes = forest.into_nodes();
    let command_tree = TreeDisplay::new(&nodes)
        .style(DisplayStyle::WithSignature)
        .indent("  ")
        .to_string();

    let mut config = manifest.generator.clone();
    let base = match opts.output {
        Some(output) => {
            config.output = output.to_path_buf();
            PathBuf::new()
        }
        None => passgen_toml.resolve(Path::new("")),
    };

    let mut generator = Generator::new(nodes, &manifest.tables, &config);
    if !opts.format {
        generator = generator.without_formatter();
    }

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let gen_result = generator
            .generate(&base)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            files: gen_result.written,
            formatted: gen_result.formatted,
        })
    };

    Ok(GenerateReport {
        warnings,
        command_count,
        command_tree,
        result,
    })
}

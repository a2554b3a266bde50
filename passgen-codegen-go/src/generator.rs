use std::path::Path;

use eyre::{Result, WrapErr};
use passgen_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    tree::TreeNode,
};
use passgen_core::{Formatter, GeneratedFile};
use passgen_manifest::{GeneratorConfig, Tables};

use crate::{emit::CodeEmitter, files::PassthroughGo};

/// Go code generator that produces `urfave/cli` command descriptors
pub struct Generator<'a> {
    nodes: Vec<TreeNode>,
    tables: &'a Tables,
    config: &'a GeneratorConfig,
    formatter: Option<Formatter>,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: self.config.output.display().to_string(),
            content: self.render(),
        }]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let emitter = CodeEmitter::new(self.tables);
        let file = PassthroughGo::new(self.config, &emitter, &self.nodes);
        let path = file
            .write(output_dir)
            .wrap_err("failed to write passthrough file")?;
        tracing::info!(path = %path.display(), commands = self.nodes.len(), "wrote passthrough file");

        // The artifact stays on disk when formatting fails so it can be inspected.
        let formatted = match &self.formatter {
            Some(formatter) => {
                formatter
                    .run(&path)
                    .wrap_err_with(|| format!("failed to format '{}'", path.display()))?;
                true
            }
            None => false,
        };

        Ok(GenerateResult {
            written: vec![path],
            formatted,
        })
    }
}

impl<'a> Generator<'a> {
    /// A generator for `nodes`, formatting with the configured formatter.
    pub fn new(nodes: Vec<TreeNode>, tables: &'a Tables, config: &'a GeneratorConfig) -> Self {
        Self {
            nodes,
            tables,
            config,
            formatter: Formatter::from_argv(&config.formatter),
        }
    }

    /// Skip the formatting step.
    pub fn without_formatter(mut self) -> Self {
        self.formatter = None;
        self
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn formatter(&self) -> Option<&Formatter> {
        self.formatter.as_ref()
    }

    /// Render the artifact in memory.
    pub fn render(&self) -> String {
        let emitter = CodeEmitter::new(self.tables);
        PassthroughGo::new(self.config, &emitter, &self.nodes).render()
    }
}

#[cfg(test)]
mod tests {
    use passgen_codegen::tree::NameMunger;
    use passgen_manifest::CommandSpec;

    use super::*;

    fn nodes(tables: &Tables) -> Vec<TreeNode> {
        NameMunger::new(tables)
            .munge(&[CommandSpec::new("view", "view", "view [path]").with_description("View secrets")])
            .unwrap()
            .into_nodes()
    }

    #[test]
    fn test_preview_uses_configured_path() {
        let tables = Tables::default();
        let config = GeneratorConfig::default();
        let generator = Generator::new(nodes(&tables), &tables, &config);

        let files = generator.preview();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "passthrough.go");
        assert!(files[0].content.contains("Category: \"SECRETS\","));
    }

    #[test]
    fn test_formatter_from_config() {
        let tables = Tables::default();
        let config = GeneratorConfig::default();
        let generator = Generator::new(Vec::new(), &tables, &config);
        assert_eq!(generator.formatter(), Some(&Formatter::gofmt()));

        let config = GeneratorConfig {
            formatter: Vec::new(),
            ..GeneratorConfig::default()
        };
        let generator = Generator::new(Vec::new(), &tables, &config);
        assert!(generator.formatter().is_none());
    }

    #[test]
    fn test_generate_without_formatter() {
        let dir = tempfile::tempdir().unwrap();
        let tables = Tables::default();
        let config = GeneratorConfig::default();
        let generator = Generator::new(nodes(&tables), &tables, &config).without_formatter();

        let result = generator.generate(dir.path()).unwrap();

        assert!(!result.formatted);
        assert_eq!(result.written, vec![dir.path().join("passthrough.go")]);
        let written = std::fs::read_to_string(dir.path().join("passthrough.go")).unwrap();
        assert_eq!(written, generator.render());
    }

    #[cfg(unix)]
    #[test]
    fn test_formatter_failure_keeps_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let tables = Tables::default();
        let config = GeneratorConfig::default();
        let generator = Generator::new(nodes(&tables), &tables, &config)
            .with_formatter(Formatter::new("false", Vec::<String>::new()));

        let err = generator.generate(dir.path()).unwrap_err();

        assert!(err.to_string().starts_with("failed to format"));
        assert!(dir.path().join("passthrough.go").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_formatter_success() {
        let dir = tempfile::tempdir().unwrap();
        let tables = Tables::default();
        let config = GeneratorConfig::default();
        let generator = Generator::new(Vec::new(), &tables, &config)
            .with_formatter(Formatter::new("true", Vec::<String>::new()));

        assert!(generator.generate(dir.path()).unwrap().formatted);
    }
}

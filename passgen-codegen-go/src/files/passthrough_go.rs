use std::path::{Path, PathBuf};

use passgen_codegen::{builder::CodeBuilder, tree::TreeNode};
use passgen_core::{GENERATED_HEADER, GeneratedFile, quote_go_string};
use passgen_manifest::GeneratorConfig;

use crate::emit::{CMD_PACKAGE, CodeEmitter, CommandsVar};

/// Import path of the command-line framework.
pub const URFAVE_CLI: &str = "github.com/urfave/cli";

/// Variable holding the generated commands.
pub const COMMANDS_VAR: &str = "passthroughs";

/// Go counterpart of the tree merge: name-keyed, `a` wins, children merged.
const MERGE_CMDS: &str = "\
func mergeCmds(a, b []cli.Command) []cli.Command {
	merged := []cli.Command{}
	index := map[string]int{}

	for _, c := range a {
		if i, ok := index[c.Name]; ok {
			merged[i] = c
			continue
		}
		index[c.Name] = len(merged)
		merged = append(merged, c)
	}

	for _, c := range b {
		if i, ok := index[c.Name]; ok {
			merged[i].Subcommands = mergeCmds(merged[i].Subcommands, c.Subcommands)
			continue
		}
		index[c.Name] = len(merged)
		merged = append(merged, c)
	}

	return merged
}";

/// The generated `passthrough.go`.
pub struct PassthroughGo<'a> {
    config: &'a GeneratorConfig,
    emitter: &'a CodeEmitter<'a>,
    nodes: &'a [TreeNode],
}

impl<'a> PassthroughGo<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        emitter: &'a CodeEmitter<'a>,
        nodes: &'a [TreeNode],
    ) -> Self {
        Self {
            config,
            emitter,
            nodes,
        }
    }

    /// The runtime import line, aliased when the package is not named `cmd`.
    fn cmd_import(&self) -> String {
        let path = self.config.cmd_import.as_str();
        let last = path.rsplit('/').next().unwrap_or(path);
        if last == CMD_PACKAGE {
            quote_go_string(path)
        } else {
            format!("{CMD_PACKAGE} {}", quote_go_string(path))
        }
    }
}

impl GeneratedFile for PassthroughGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.config.output)
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::go();

        builder
            .push_line(GENERATED_HEADER)
            .push_blank()
            .push_line(&format!("package {}", self.config.package))
            .push_blank()
            .push_line("import (")
            .push_indent()
            .push_line(&quote_go_string(URFAVE_CLI))
            .push_blank()
            .push_line(&self.cmd_import())
            .push_dedent()
            .push_line(")")
            .push_blank();

        builder.emit(&CommandsVar {
            emitter: self.emitter,
            name: COMMANDS_VAR,
            nodes: self.nodes,
        });

        builder
            .push_blank()
            .push_lines(MERGE_CMDS.lines())
            .push_blank()
            .push_line("func init() {")
            .push_indent()
            .push_line(&format!(
                "{CMD_PACKAGE}.Cmds = mergeCmds({CMD_PACKAGE}.Cmds, {COMMANDS_VAR})"
            ))
            .push_dedent()
            .push_line("}");

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use passgen_manifest::Tables;

    use super::*;

    fn render(config: &GeneratorConfig, nodes: &[TreeNode]) -> String {
        let tables = Tables::default();
        let emitter = CodeEmitter::new(&tables);
        PassthroughGo::new(config, &emitter, nodes).render()
    }

    #[test]
    fn test_empty_forest() {
        let out = render(&GeneratorConfig::default(), &[]);

        assert!(out.starts_with(
            "// THIS FILE IS AUTOMATICALLY GENERATED. DO NOT EDIT!\n\npackage main\n\nimport (\n\t\"github.com/urfave/cli\"\n\n\t\"github.com/arigatomachine/cli/cmd\"\n)\n\nvar passthroughs = []cli.Command{}\n\nfunc mergeCmds(a, b []cli.Command) []cli.Command {\n"
        ));
        assert!(out.ends_with(
            "\treturn merged\n}\n\nfunc init() {\n\tcmd.Cmds = mergeCmds(cmd.Cmds, passthroughs)\n}\n"
        ));
    }

    #[test]
    fn test_merge_routine_keeps_go_indentation() {
        let out = render(&GeneratorConfig::default(), &[]);
        assert!(out.contains("\n\tfor _, c := range b {\n\t\tif i, ok := index[c.Name]; ok {\n"));
        assert!(out.contains("\n\n\tfor _, c := range a {\n"));
    }

    #[test]
    fn test_custom_package_and_aliased_import() {
        let config = GeneratorConfig {
            package: "cli".to_string(),
            cmd_import: "example.com/tool/runtime".to_string(),
            ..GeneratorConfig::default()
        };

        let out = render(&config, &[]);
        assert!(out.contains("\npackage cli\n"));
        assert!(out.contains("\n\tcmd \"example.com/tool/runtime\"\n"));
    }

    #[test]
    fn test_path_is_relative_to_base() {
        let config = GeneratorConfig {
            output: PathBuf::from("gen/passthrough.go"),
            ..GeneratorConfig::default()
        };
        let tables = Tables::default();
        let emitter = CodeEmitter::new(&tables);
        let file = PassthroughGo::new(&config, &emitter, &[]);

        assert_eq!(
            file.path(Path::new("/work")),
            PathBuf::from("/work/gen/passthrough.go")
        );
    }
}

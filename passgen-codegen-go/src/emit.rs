//! Command descriptors for `urfave/cli`.
//!
//! Every [`TreeNode`] becomes one `cli.Command` composite literal. The
//! emitter decides on preference middlewares while it translates flags, so
//! the action chain always matches the emitted flag list.

use passgen_codegen::{
    FlagKind, FlagTranslator, Middleware, TranslatedFlag,
    builder::{CodeFragment, Renderable},
    tree::{TreeNode, dispatch_depth},
};
use passgen_manifest::{FlagSpec, Tables};

use crate::ast::{Call, Composite, Expr, FuncLit};

/// Package identifier the runtime is imported under.
pub const CMD_PACKAGE: &str = "cmd";

/// Name of the dispatch function every generated action calls.
pub const PASSTHROUGH_FN: &str = "passthrough";

/// Serializes command trees into Go source.
#[derive(Debug, Clone)]
pub struct CodeEmitter<'a> {
    tables: &'a Tables,
    translator: FlagTranslator,
}

impl<'a> CodeEmitter<'a> {
    pub fn new(tables: &'a Tables) -> Self {
        Self {
            tables,
            translator: FlagTranslator,
        }
    }

    /// `[]cli.Command{...}` holding every node.
    pub fn commands<'n>(&self, nodes: impl IntoIterator<Item = &'n TreeNode>) -> Composite {
        nodes
            .into_iter()
            .fold(Composite::new("[]cli.Command"), |list, node| {
                list.item(self.command(node))
            })
    }

    /// The descriptor of one node, its subtree included.
    pub fn command(&self, node: &TreeNode) -> Composite {
        let mut lit = Composite::elided()
            .field("Name", Expr::str(&node.name))
            .field("Usage", Expr::str(&node.usage));

        if !node.args_usage.is_empty() {
            lit = lit.field("ArgsUsage", Expr::str(&node.args_usage));
        }

        if let Some(category) = self.tables.category(&node.name) {
            lit = lit.field("Category", Expr::str(category));
        }

        if !node.subcmds.is_empty() {
            lit = lit.field("Subcommands", self.commands(&node.subcmds));
        }

        let mut preference_backed = false;
        if !node.flags.is_empty() {
            let mut flags = Composite::new("[]cli.Flag");
            for flag in &node.flags {
                let (expr, standard) = self.flag(flag);
                preference_backed |= standard;
                flags = flags.item(expr);
            }
            lit = lit.field("Flags", flags);
        }

        if !node.skip_exec
            && let Some(slug) = &node.slug
        {
            let depth = node.slug_len.unwrap_or_else(|| dispatch_depth(slug));
            let middlewares = Middleware::chain(&node.middlewares, preference_backed);
            lit = lit.field("Action", self.action(&middlewares, depth, slug));
        }

        lit
    }

    /// A flag expression, and whether it is preference-backed.
    pub fn flag(&self, flag: &FlagSpec) -> (Expr, bool) {
        match self.translator.translate(flag) {
            TranslatedFlag::Standard(standard) => {
                (Expr::raw(format!("{CMD_PACKAGE}.{}", standard.ident())), true)
            }
            TranslatedFlag::Generic(generic) => {
                let ty = match generic.kind {
                    FlagKind::Bool => "cli.BoolFlag",
                    FlagKind::String => "cli.StringFlag",
                };
                let lit = Composite::new(ty)
                    .field("Name", Expr::str(generic.name))
                    .field("Usage", Expr::str(generic.usage))
                    .field_opt("Value", generic.default.map(Expr::str));
                (lit.into(), false)
            }
        }
    }

    fn action(&self, middlewares: &[Middleware], depth: usize, slug: &str) -> Expr {
        let handler = FuncLit::new("(ctx *cli.Context) error").body_line(format!(
            "return {PASSTHROUGH_FN}(ctx, {depth}, {})",
            passgen_core::quote_go_string(slug)
        ));

        if middlewares.is_empty() {
            return handler.into();
        }

        Call::new(format!("{CMD_PACKAGE}.Chain"))
            .args(
                middlewares
                    .iter()
                    .map(|m| Expr::raw(format!("{CMD_PACKAGE}.{}", m.ident()))),
            )
            .arg(handler)
            .into()
    }
}

/// The `var passthroughs = []cli.Command{...}` declaration.
pub struct CommandsVar<'e, 'n> {
    pub emitter: &'e CodeEmitter<'e>,
    pub name: &'n str,
    pub nodes: &'n [TreeNode],
}

impl Renderable for CommandsVar<'_, '_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let list = self.emitter.commands(self.nodes);
        vec![list.to_fragment(&format!("var {} = ", self.name), "")]
    }
}

#[cfg(test)]
mod tests {
    use passgen_codegen::{builder::CodeBuilder, tree::NameMunger};
    use passgen_manifest::CommandSpec;

    use super::*;

    fn render(nodes: &[TreeNode]) -> String {
        let tables = Tables::default();
        let emitter = CodeEmitter::new(&tables);
        let mut builder = CodeBuilder::go();
        builder.emit(&CommandsVar {
            emitter: &emitter,
            name: "passthroughs",
            nodes,
        });
        builder.build()
    }

    fn munge(commands: &[CommandSpec]) -> Vec<TreeNode> {
        NameMunger::new(&Tables::default())
            .munge(commands)
            .unwrap()
            .into_nodes()
    }

    #[test]
    fn test_orgs_create_scenario() {
        let nodes = munge(&[CommandSpec::new("orgs:create", "create", "orgs create <name>")
            .with_group("orgs")
            .with_description("Create a new organization")
            .with_pre_hook("auth")
            .with_option(FlagSpec::string("--org").with_short("-o"))]);

        let expected = "\
var passthroughs = []cli.Command{
\t{
\t\tName: \"orgs\",
\t\tUsage: \"\",
\t\tCategory: \"ORGANIZATIONS\",
\t\tSubcommands: []cli.Command{
\t\t\t{
\t\t\t\tName: \"create\",
\t\t\t\tUsage: \"Create a new organization\",
\t\t\t\tArgsUsage: \"<name>\",
\t\t\t\tFlags: []cli.Flag{
\t\t\t\t\tcmd.StdOrgFlag,
\t\t\t\t},
\t\t\t\tAction: cmd.Chain(
\t\t\t\t\tcmd.EnsureDaemon,
\t\t\t\t\tcmd.EnsureSession,
\t\t\t\t\tcmd.LoadDirPrefs,
\t\t\t\t\tcmd.LoadPrefDefaults,
\t\t\t\t\tcmd.SetUserEnv,
\t\t\t\t\tfunc(ctx *cli.Context) error {
\t\t\t\t\t\treturn passthrough(ctx, 3, \"orgs:create\")
\t\t\t\t\t},
\t\t\t\t),
\t\t\t},
\t\t},
\t},
}
";
        assert_eq!(render(&nodes), expected);
    }

    #[test]
    fn test_orgs_list_scenario() {
        let nodes = munge(&[CommandSpec::new("orgs", "orgs", "orgs")
            .with_group("orgs")
            .with_description("List organizations")]);

        let out = render(&nodes);
        assert!(out.contains("\t\t\t\tName: \"list\",\n"));
        assert!(out.contains("return passthrough(ctx, 2, \"orgs\")"));
        assert!(!out.contains("ArgsUsage"));
        assert!(out.contains("cmd.Chain(\n\t\t\t\t\tcmd.EnsureDaemon,\n\t\t\t\t\tfunc("));
    }

    #[test]
    fn test_action_without_middlewares() {
        let node = TreeNode::command("verify", "prefs:verify");
        let out = render(&[node]);

        assert!(out.contains(
            "\t\tAction: func(ctx *cli.Context) error {\n\t\t\treturn passthrough(ctx, 3, \"prefs:verify\")\n\t\t},\n"
        ));
        assert!(!out.contains("Chain"));
    }

    #[test]
    fn test_group_has_no_action() {
        let nodes = munge(&[CommandSpec::new("prefs:list", "list", "prefs list").with_group("prefs")]);
        let out = render(&nodes);

        assert_eq!(out.matches("Action:").count(), 1);
        assert!(!out.contains("Category"));
    }

    #[test]
    fn test_generic_flags() {
        let tables = Tables::default();
        let emitter = CodeEmitter::new(&tables);

        let (expr, standard) = emitter.flag(
            &FlagSpec::string("--name")
                .with_short("-n")
                .with_default("acme")
                .with_description("Org \"name\""),
        );
        assert!(!standard);

        let mut builder = CodeBuilder::go();
        builder.apply_fragment(expr.to_fragment("", ","));
        assert_eq!(
            builder.build(),
            "cli.StringFlag{\n\tName: \"name, n\",\n\tUsage: \"Org \\\"name\\\"\",\n\tValue: \"acme\",\n},\n"
        );

        let (expr, _) = emitter.flag(&FlagSpec::switch("--force"));
        let mut builder = CodeBuilder::go();
        builder.apply_fragment(expr.to_fragment("", ","));
        assert_eq!(builder.build(), "cli.BoolFlag{\n\tName: \"force\",\n\tUsage: \"\",\n},\n");
    }

    #[test]
    fn test_standard_flag_reference() {
        let tables = Tables::default();
        let emitter = CodeEmitter::new(&tables);

        let (expr, standard) = emitter.flag(&FlagSpec::string("--service").with_short("-s"));
        assert!(standard);
        assert_eq!(expr, Expr::raw("cmd.StdServiceFlag"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let commands = [
            CommandSpec::new("view", "view", "view [name]").with_pre_hook("auth"),
            CommandSpec::new("orgs:create", "create", "orgs create").with_group("orgs"),
            CommandSpec::new("orgs", "orgs", "orgs").with_group("orgs"),
        ];
        assert_eq!(render(&munge(&commands)), render(&munge(&commands)));
    }
}

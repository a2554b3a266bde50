//! Flat command list to command tree.

use passgen_manifest::{CommandSpec, Tables};
use thiserror::Error;

use super::{Forest, TreeNode};
use crate::Middleware;

/// Name used for commands demoted under their own group.
pub const REPLACEMENT_NAME: &str = "list";

/// A declaration that cannot be placed in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MungeError {
    #[error("'{second}' and '{first}' both map to top-level command '{key}'")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("'{slug}' collides with an existing command named '{name}' {}", scope(.parent))]
    DuplicateName {
        parent: Option<String>,
        name: String,
        slug: String,
    },

    #[error("usage '{usage}' of '{slug}' does not start with its slug")]
    MalformedUsage { slug: String, usage: String },
}

fn scope(parent: &Option<String>) -> String {
    match parent {
        Some(parent) => format!("in group '{parent}'"),
        None => "at the top level".to_string(),
    }
}

/// Builds the command forest from the flat declaration list.
#[derive(Debug, Clone, Copy)]
pub struct NameMunger<'a> {
    tables: &'a Tables,
}

impl<'a> NameMunger<'a> {
    pub fn new(tables: &'a Tables) -> Self {
        Self { tables }
    }

    /// Munge every declaration, in order, into one forest.
    pub fn munge(&self, commands: &[CommandSpec]) -> Result<Forest, MungeError> {
        let mut forest = Forest::new();
        for command in commands {
            self.munge_command(&mut forest, command)?;
        }
        tracing::debug!(
            commands = commands.len(),
            top_level = forest.len(),
            "munged command tree"
        );
        Ok(forest)
    }

    /// Node name and top-level lookup key for a declaration.
    pub fn name_and_lookup(&self, command: &CommandSpec) -> (String, String) {
        if self.tables.is_replacement(&command.slug) {
            (
                REPLACEMENT_NAME.to_string(),
                format!("{}:{}", command.slug, REPLACEMENT_NAME),
            )
        } else {
            (command.subpath.clone(), command.slug.clone())
        }
    }

    /// Daemon/session middlewares for a declaration.
    pub fn middlewares(&self, command: &CommandSpec) -> Vec<Middleware> {
        let mut middlewares = Vec::new();

        let blacklisted = command
            .group
            .as_deref()
            .is_some_and(|group| self.tables.is_daemon_blacklisted(group));
        if !blacklisted {
            middlewares.push(Middleware::EnsureDaemon);
        }

        if command.has_pre_hook(&self.tables.auth_hook) {
            middlewares.push(Middleware::EnsureSession);
        }

        middlewares
    }

    /// Build the node for a declaration, without placing it.
    pub fn node(&self, command: &CommandSpec) -> Result<(String, TreeNode), MungeError> {
        let (name, lookup) = self.name_and_lookup(command);

        let args_usage = command
            .args_usage()
            .ok_or_else(|| MungeError::MalformedUsage {
                slug: command.slug.clone(),
                usage: command.usage.clone(),
            })?;

        let mut node = TreeNode::command(name, command.slug.clone());
        node.usage = command.description.clone();
        node.args_usage = args_usage.to_string();
        node.flags = command.options.clone();
        node.middlewares = self.middlewares(command);

        Ok((lookup, node))
    }

    fn munge_command(&self, forest: &mut Forest, command: &CommandSpec) -> Result<(), MungeError> {
        let (lookup, node) = self.node(command)?;

        // A command grouped under its own name stays top-level.
        match command.group.as_deref().filter(|group| *group != node.name) {
            Some(group) => attach_to_group(forest, group, node),
            None => insert_top_level(forest, lookup, node),
        }
    }
}

fn attach_to_group(forest: &mut Forest, group: &str, node: TreeNode) -> Result<(), MungeError> {
    if forest.get(group).is_none() {
        ensure_unique_top_level_name(forest, group, group, None)?;
    }

    let parent = forest
        .entries_mut()
        .entry(group.to_string())
        .or_insert_with(|| TreeNode::group(group));

    if parent.subcmds.iter().any(|sibling| sibling.name == node.name) {
        return Err(MungeError::DuplicateName {
            parent: Some(group.to_string()),
            name: node.name,
            slug: node.slug.unwrap_or_default(),
        });
    }

    parent.subcmds.push(node);
    Ok(())
}

fn insert_top_level(forest: &mut Forest, lookup: String, mut node: TreeNode) -> Result<(), MungeError> {
    let slug = node.slug.clone().unwrap_or_default();

    match forest.get(&lookup) {
        Some(existing) if !existing.is_synthetic() => {
            return Err(MungeError::DuplicateKey {
                first: existing.slug.clone().unwrap_or_default(),
                key: lookup,
                second: slug,
            });
        }
        // The group was synthesized by an earlier child; the command takes its
        // place, possibly under a different name.
        Some(_) => ensure_unique_top_level_name(forest, &node.name, &slug, Some(&lookup))?,
        None => ensure_unique_top_level_name(forest, &node.name, &slug, None)?,
    }

    let entries = forest.entries_mut();
    if let Some(existing) = entries.get_mut(&lookup) {
        node.subcmds = std::mem::take(&mut existing.subcmds);
        *existing = node;
    } else {
        entries.insert(lookup, node);
    }
    Ok(())
}

/// Fail if a top-level node other than the one at `replacing` is called `name`.
fn ensure_unique_top_level_name(
    forest: &Forest,
    name: &str,
    slug: &str,
    replacing: Option<&str>,
) -> Result<(), MungeError> {
    let taken = forest
        .entries()
        .any(|(key, existing)| Some(key) != replacing && existing.name == name);

    if taken {
        return Err(MungeError::DuplicateName {
            parent: None,
            name: name.to_string(),
            slug: slug.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use passgen_manifest::FlagSpec;

    use super::*;

    fn munge(commands: &[CommandSpec]) -> Forest {
        NameMunger::new(&Tables::default())
            .munge(commands)
            .expect("munge should succeed")
    }

    fn orgs_create() -> CommandSpec {
        CommandSpec::new("orgs:create", "create", "orgs create <name>")
            .with_group("orgs")
            .with_description("Create a new organization")
            .with_option(FlagSpec::string("--org").with_short("-o"))
    }

    #[test]
    fn test_grouped_command_under_synthetic_group() {
        let forest = munge(&[orgs_create()]);

        let group = forest.get("orgs").expect("group node");
        assert_eq!(group.name, "orgs");
        assert!(group.skip_exec);
        assert!(group.flags.is_empty());
        assert!(group.middlewares.is_empty());

        let create = &group.subcmds[0];
        assert_eq!(create.name, "create");
        assert_eq!(create.args_usage, "<name>");
        assert_eq!(create.usage, "Create a new organization");
        assert_eq!(create.slug_len, Some(3));
        assert!(!create.skip_exec);
    }

    #[test]
    fn test_replacement_becomes_list_subcommand() {
        let tables = Tables::default();
        let munger = NameMunger::new(&tables);
        let orgs = CommandSpec::new("orgs", "orgs", "orgs").with_group("orgs");

        let (name, lookup) = munger.name_and_lookup(&orgs);
        assert_eq!(name, "list");
        assert_eq!(lookup, "orgs:list");

        let forest = munger.munge(&[orgs]).unwrap();
        let list = &forest.get("orgs").unwrap().subcmds[0];
        assert_eq!(list.name, "list");
        assert_eq!(list.slug.as_deref(), Some("orgs"));
        assert_eq!(list.args_usage, "");
        assert!(!list.skip_exec);
    }

    #[test]
    fn test_ungrouped_replacement_uses_lookup_key() {
        let forest = munge(&[CommandSpec::new("teams", "teams", "teams")]);
        assert_eq!(forest.keys().collect::<Vec<_>>(), ["teams:list"]);
        assert_eq!(forest.get("teams:list").unwrap().name, "list");
    }

    #[test]
    fn test_group_equal_to_name_stays_top_level() {
        let forest = munge(&[CommandSpec::new("view", "view", "view").with_group("view")]);
        let view = forest.get("view").unwrap();
        assert!(!view.skip_exec);
        assert!(view.subcmds.is_empty());
    }

    #[test]
    fn test_group_reused_for_later_children() {
        let forest = munge(&[
            orgs_create(),
            CommandSpec::new("orgs", "orgs", "orgs").with_group("orgs"),
            CommandSpec::new("orgs:remove", "remove", "orgs remove <name>").with_group("orgs"),
        ]);

        assert_eq!(forest.len(), 1);
        let names: Vec<_> = forest
            .get("orgs")
            .unwrap()
            .subcmds
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, ["create", "list", "remove"]);
    }

    #[test]
    fn test_daemon_middleware_unless_blacklisted() {
        let forest = munge(&[
            CommandSpec::new("prefs:list", "list", "prefs list").with_group("prefs"),
            CommandSpec::new("view", "view", "view"),
        ]);

        let prefs_list = &forest.get("prefs").unwrap().subcmds[0];
        assert!(!prefs_list.middlewares.contains(&Middleware::EnsureDaemon));
        assert_eq!(forest.get("view").unwrap().middlewares, [Middleware::EnsureDaemon]);
    }

    #[test]
    fn test_session_middleware_iff_auth_hook() {
        let forest = munge(&[
            CommandSpec::new("set", "set", "set <key> <value>").with_pre_hook("auth"),
            CommandSpec::new("signup", "signup", "signup").with_pre_hook("telemetry"),
        ]);

        assert_eq!(
            forest.get("set").unwrap().middlewares,
            [Middleware::EnsureDaemon, Middleware::EnsureSession]
        );
        assert_eq!(forest.get("signup").unwrap().middlewares, [Middleware::EnsureDaemon]);
    }

    #[test]
    fn test_preference_middlewares_follow_session() {
        let forest = munge(&[orgs_create().with_pre_hook("auth")]);
        let create = &forest.get("orgs").unwrap().subcmds[0];

        let chain = create.action_middlewares();
        assert_eq!(
            chain,
            [
                Middleware::EnsureDaemon,
                Middleware::EnsureSession,
                Middleware::LoadDirPrefs,
                Middleware::LoadPrefDefaults,
                Middleware::SetUserEnv,
            ]
        );
    }

    #[test]
    fn test_custom_tables_are_honored() {
        let tables = Tables {
            replacements: ["projects".to_string()].into_iter().collect(),
            daemon_blacklist: Default::default(),
            auth_hook: "login".to_string(),
            ..Tables::default()
        };
        let forest = NameMunger::new(&tables)
            .munge(&[
                CommandSpec::new("projects", "projects", "projects")
                    .with_group("projects")
                    .with_pre_hook("login"),
                CommandSpec::new("prefs:list", "list", "prefs list").with_group("prefs"),
            ])
            .unwrap();

        let list = &forest.get("projects").unwrap().subcmds[0];
        assert_eq!(list.name, "list");
        assert!(list.middlewares.contains(&Middleware::EnsureSession));
        let prefs_list = &forest.get("prefs").unwrap().subcmds[0];
        assert_eq!(prefs_list.middlewares, [Middleware::EnsureDaemon]);
    }

    #[test]
    fn test_command_adopts_synthetic_group_children() {
        let forest = munge(&[
            CommandSpec::new("prefs:list", "list", "prefs list").with_group("prefs"),
            CommandSpec::new("prefs", "prefs", "prefs").with_group("prefs"),
        ]);

        let prefs = forest.get("prefs").unwrap();
        assert!(!prefs.skip_exec);
        assert_eq!(prefs.slug.as_deref(), Some("prefs"));
        assert_eq!(prefs.subcmds[0].name, "list");
    }

    #[test]
    fn test_adopting_command_keeps_top_level_names_unique() {
        let err = NameMunger::new(&Tables::default())
            .munge(&[
                CommandSpec::new("prefs:list", "list", "prefs list").with_group("prefs"),
                CommandSpec::new("view", "view", "view [path]"),
                CommandSpec::new("prefs", "view", "prefs"),
            ])
            .unwrap_err();

        assert_eq!(
            err,
            MungeError::DuplicateName {
                parent: None,
                name: "view".to_string(),
                slug: "prefs".to_string(),
            }
        );
    }

    #[test]
    fn test_adopting_command_may_rename_the_group() {
        let forest = munge(&[
            CommandSpec::new("prefs:list", "list", "prefs list").with_group("prefs"),
            CommandSpec::new("prefs", "settings", "prefs"),
        ]);

        let prefs = forest.get("prefs").unwrap();
        assert_eq!(prefs.name, "settings");
        assert_eq!(prefs.subcmds[0].name, "list");
    }

    #[test]
    fn test_children_attach_to_existing_command() {
        let forest = munge(&[
            CommandSpec::new("prefs", "prefs", "prefs").with_group("prefs"),
            CommandSpec::new("prefs:list", "list", "prefs list").with_group("prefs"),
        ]);

        let prefs = forest.get("prefs").unwrap();
        assert!(!prefs.skip_exec);
        assert_eq!(prefs.subcmds.len(), 1);
    }

    #[test]
    fn test_duplicate_top_level_key_is_rejected() {
        let err = NameMunger::new(&Tables::default())
            .munge(&[
                CommandSpec::new("view", "view", "view"),
                CommandSpec::new("view", "view", "view <path>"),
            ])
            .unwrap_err();

        assert_eq!(
            err,
            MungeError::DuplicateKey {
                key: "view".to_string(),
                first: "view".to_string(),
                second: "view".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_sibling_name_is_rejected() {
        let err = NameMunger::new(&Tables::default())
            .munge(&[
                orgs_create(),
                CommandSpec::new("orgs:new", "create", "orgs new").with_group("orgs"),
            ])
            .unwrap_err();

        assert!(matches!(
            err,
            MungeError::DuplicateName { parent: Some(ref p), ref name, .. } if p == "orgs" && name == "create"
        ));
        assert_eq!(
            err.to_string(),
            "'orgs:new' collides with an existing command named 'create' in group 'orgs'"
        );
    }

    #[test]
    fn test_duplicate_top_level_name_is_rejected() {
        let err = NameMunger::new(&Tables::default())
            .munge(&[
                CommandSpec::new("teams", "teams", "teams"),
                CommandSpec::new("orgs", "orgs", "orgs"),
            ])
            .unwrap_err();

        assert!(matches!(err, MungeError::DuplicateName { parent: None, .. }));
    }

    #[test]
    fn test_malformed_usage_is_rejected() {
        let err = NameMunger::new(&Tables::default())
            .munge(&[CommandSpec::new("orgs:create", "create", "create <name>")])
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "usage 'create <name>' of 'orgs:create' does not start with its slug"
        );
    }
}

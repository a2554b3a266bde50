use indexmap::IndexMap;
use passgen_manifest::{FlagSpec, NativeCommand};
use serde::Serialize;

use crate::{FlagTranslator, Middleware};

/// One command of the generated tree, possibly a synthetic group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    /// Help usage line (the command's description)
    pub usage: String,
    pub args_usage: String,
    pub flags: Vec<FlagSpec>,
    pub subcmds: Vec<TreeNode>,
    /// Originating command slug; `None` for synthetic groups
    pub slug: Option<String>,
    /// Path components the dispatcher strips: 1 + slug segment count
    pub slug_len: Option<usize>,
    /// Daemon/session middlewares; preference middlewares are derived from flags
    pub middlewares: Vec<Middleware>,
    /// Group nodes have no action of their own
    pub skip_exec: bool,
}

impl TreeNode {
    /// A synthetic group node with no action.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: String::new(),
            args_usage: String::new(),
            flags: Vec::new(),
            subcmds: Vec::new(),
            slug: None,
            slug_len: None,
            middlewares: Vec::new(),
            skip_exec: true,
        }
    }

    /// An executable node dispatching to `slug`.
    pub fn command(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            slug_len: Some(dispatch_depth(&slug)),
            slug: Some(slug),
            skip_exec: false,
            ..Self::group(name)
        }
    }

    pub fn with_subcmd(mut self, node: TreeNode) -> Self {
        self.subcmds.push(node);
        self
    }

    /// True for group nodes synthesized by the munger (no originating command).
    pub fn is_synthetic(&self) -> bool {
        self.skip_exec && self.slug.is_none()
    }

    /// The middleware chain the action runs through.
    pub fn action_middlewares(&self) -> Vec<Middleware> {
        Middleware::chain(&self.middlewares, FlagTranslator.uses_standard(&self.flags))
    }

    /// Number of executable nodes in this subtree.
    pub fn command_count(&self) -> usize {
        let own = usize::from(!self.skip_exec);
        own + self.subcmds.iter().map(TreeNode::command_count).sum::<usize>()
    }
}

impl From<&NativeCommand> for TreeNode {
    fn from(native: &NativeCommand) -> Self {
        Self {
            name: native.name.clone(),
            usage: native.usage.clone(),
            args_usage: String::new(),
            flags: Vec::new(),
            subcmds: native.subcmds.iter().map(TreeNode::from).collect(),
            slug: None,
            slug_len: None,
            middlewares: Vec::new(),
            skip_exec: false,
        }
    }
}

/// Dispatch depth for a slug: the binary name plus one component per segment.
pub fn dispatch_depth(slug: &str) -> usize {
    1 + slug.split(':').count()
}

/// Top-level nodes keyed by lookup key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    nodes: IndexMap<String, TreeNode>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&TreeNode> {
        self.nodes.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.values()
    }

    /// Lookup keys with their nodes, in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.nodes.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn into_nodes(self) -> Vec<TreeNode> {
        self.nodes.into_values().collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of executable nodes across the forest.
    pub fn command_count(&self) -> usize {
        self.nodes().map(TreeNode::command_count).sum()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut IndexMap<String, TreeNode> {
        &mut self.nodes
    }
}

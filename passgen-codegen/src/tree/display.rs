//! Command tree display formatting.
//!
//! # Example
//!
//! ```
//! use passgen_codegen::tree::{DisplayStyle, TreeDisplay, TreeNode};
//!
//! let nodes = vec![
//!     TreeNode::group("orgs").with_subcmd(TreeNode::command("list", "orgs")),
//! ];
//! let display = TreeDisplay::new(&nodes).style(DisplayStyle::Simple);
//!
//! assert_eq!(display.to_string(), "  orgs\n    list");
//! ```

use std::fmt;

use super::TreeNode;

/// Display style for command trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Simple indented names only.
    ///
    /// ```text
    /// orgs
    ///   list
    ///   create
    /// ```
    #[default]
    Simple,

    /// Names with args usage, flags and dispatch slug.
    ///
    /// ```text
    /// orgs
    ///   list -> orgs
    ///   create <name> [--org/-o] -> orgs:create
    /// ```
    WithSignature,
}

/// Declarative command tree display formatter.
#[derive(Debug, Clone)]
pub struct TreeDisplay<'a> {
    nodes: &'a [TreeNode],
    style: DisplayStyle,
    indent_str: &'a str,
}

impl<'a> TreeDisplay<'a> {
    pub fn new(nodes: &'a [TreeNode]) -> Self {
        Self {
            nodes,
            style: DisplayStyle::default(),
            indent_str: "  ",
        }
    }

    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation string (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        for node in self.nodes {
            self.render_recursive(&mut output, node, 0);
        }
        output
    }

    fn render_recursive(&self, output: &mut String, node: &TreeNode, depth: usize) {
        // Base indent + depth-based indent
        output.push_str(self.indent_str);
        output.push_str(&self.indent_str.repeat(depth));

        match self.style {
            DisplayStyle::Simple => output.push_str(&node.name),
            DisplayStyle::WithSignature => output.push_str(&Self::format_signature(node)),
        }
        output.push('\n');

        for child in &node.subcmds {
            self.render_recursive(output, child, depth + 1);
        }
    }

    fn format_signature(node: &TreeNode) -> String {
        let mut parts = vec![node.name.clone()];

        if !node.args_usage.is_empty() {
            parts.push(node.args_usage.clone());
        }

        let flags: Vec<String> = node
            .flags
            .iter()
            .map(|flag| match &flag.short {
                Some(short) => format!("{}/{}", flag.long, short),
                None => flag.long.clone(),
            })
            .collect();
        if !flags.is_empty() {
            parts.push(format!("[{}]", flags.join(" ")));
        }

        if let Some(slug) = &node.slug {
            parts.push(format!("-> {slug}"));
        }

        parts.join(" ")
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = self.render();
        // Remove trailing newline for Display
        write!(f, "{}", output.trim_end())
    }
}

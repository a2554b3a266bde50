//! Tree command report.

use eyre::Result;
use passgen_codegen::tree::{DisplayStyle, TreeDisplay, TreeNode};

use super::output::{Output, Report};

/// The command forest as it will be generated.
#[derive(Debug)]
pub struct TreeReport {
    pub nodes: Vec<TreeNode>,
    /// Whether the native forest was merged in.
    pub merged: bool,
}

impl TreeReport {
    pub fn command_count(&self) -> usize {
        self.nodes.iter().map(TreeNode::command_count).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.nodes)?)
    }
}

impl Report for TreeReport {
    fn render(&self, out: &mut dyn Output) {
        let label = if self.merged { "Merged commands" } else { "Commands" };
        out.section(&format!("{} ({})", label, self.command_count()));
        out.preformatted(
            &TreeDisplay::new(&self.nodes)
                .style(DisplayStyle::WithSignature)
                .to_string(),
        );
    }
}

//! Merging generated command trees into hand-written ones.
//!
//! This is the contract the emitted `mergeCmds` routine implements at
//! runtime; the generator uses it to preview the final tree.

use indexmap::IndexMap;

use super::TreeNode;

/// Merge `b` into `a` by node name.
///
/// For a name present in both, `a`'s scalar fields win and the children are
/// merged recursively. Nodes only in `b` are appended after `a`'s nodes.
pub fn merge_forests(a: Vec<TreeNode>, b: Vec<TreeNode>) -> Vec<TreeNode> {
    let mut merged: IndexMap<String, TreeNode> = IndexMap::new();
    for node in a {
        merged.insert(node.name.clone(), node);
    }

    for node in b {
        match merged.get_mut(&node.name) {
            Some(existing) => {
                let children = std::mem::take(&mut existing.subcmds);
                existing.subcmds = merge_forests(children, node.subcmds);
            }
            None => {
                merged.insert(node.name.clone(), node);
            }
        }
    }

    merged.into_values().collect()
}

/// Equality of forests as name-keyed sets, ignoring sibling order.
pub fn forest_eq(a: &[TreeNode], b: &[TreeNode]) -> bool {
    canonical(a) == canonical(b)
}

fn canonical(nodes: &[TreeNode]) -> Vec<TreeNode> {
    let mut nodes: Vec<TreeNode> = nodes
        .iter()
        .map(|node| TreeNode {
            subcmds: canonical(&node.subcmds),
            ..node.clone()
        })
        .collect();
    nodes.sort_by(|x, y| x.name.cmp(&y.name));
    nodes
}

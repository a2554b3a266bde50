//! Tree operation - show the munged command forest.

use eyre::{Context, Result};
use passgen_codegen::{
    pipeline::Pipeline,
    tree::{TreeNode, merge_forests},
};
use passgen_manifest::Manifest;

use crate::reports::TreeReport;

/// Build the command forest, optionally merged under the native forest.
pub fn tree(manifest: &Manifest, merged: bool) -> Result<TreeReport> {
    let generated = Pipeline::new(manifest.tables.clone())
        .run(manifest)
        .wrap_err("Pipeline failed")?
        .take_forest()?
        .into_nodes();

    let nodes = if merged {
        let native = manifest.native.iter().map(TreeNode::from).collect();
        merge_forests(native, generated)
    } else {
        generated
    };

    Ok(TreeReport { nodes, merged })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MANIFEST: &str = r#"
[[commands]]
slug = "orgs:create"
subpath = "create"
group = "orgs"
usage = "orgs create [name]"

[[native]]
name = "orgs"
usage = "View and create organizations"

[[native.subcmds]]
name = "remove"
usage = "Remove a user from an org"
"#;

    #[test]
    fn test_generated_only() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let report = tree(&manifest, false).unwrap();

        assert_eq!(report.nodes.len(), 1);
        assert_eq!(report.nodes[0].subcmds[0].name, "create");
    }

    #[test]
    fn test_merged_with_native() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let report = tree(&manifest, true).unwrap();

        let orgs = &report.nodes[0];
        assert_eq!(orgs.usage, "View and create organizations");
        let names: Vec<_> = orgs.subcmds.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["remove", "create"]);
    }

    #[test]
    fn test_json() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&tree(&manifest, false).unwrap().to_json().unwrap()).unwrap();

        assert_eq!(json[0]["name"], "orgs");
        assert_eq!(json[0]["subcmds"][0]["slug"], "orgs:create");
    }
}

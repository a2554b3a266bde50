use std::path::PathBuf;

use serde::Deserialize;

/// `[generator]` settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Go package the artifact belongs to
    pub package: String,

    /// Import path of the runtime package providing `Cmds`, `Chain`,
    /// the standard flags and the middlewares
    pub cmd_import: String,

    /// Artifact path, relative to the output directory
    pub output: PathBuf,

    /// Formatter argv run on the artifact after writing; empty disables it
    pub formatter: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            cmd_import: "github.com/arigatomachine/cli/cmd".to_string(),
            output: PathBuf::from("passthrough.go"),
            formatter: vec!["gofmt".to_string(), "-w".to_string()],
        }
    }
}

//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "passgen.toml")
    }
}

impl Manifest {
    /// Parse a passgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a passgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for command in &manifest.commands {
        command.validate(&ctx)?;
    }
    for native in &manifest.native {
        native.validate(&ctx)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_has_span() {
        let err = parse_manifest("[[commands]]\nslug = ", "passgen.toml").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse_manifest(
            r#"
            [[commands]]
            slug = "orgs"
            usage = "orgs"
            "#,
            "passgen.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/nonexistent/passgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_commands_keep_declaration_order() {
        let manifest = Manifest::from_str(
            r#"
            [[commands]]
            slug = "set"
            subpath = "set"
            usage = "set <key> <value>"

            [[commands]]
            slug = "allow"
            subpath = "allow"
            usage = "allow <crudl> <path> <team>"
            "#,
        )
        .unwrap();

        let slugs: Vec<_> = manifest.commands.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["set", "allow"]);
        assert!(manifest.command("allow").is_some());
        assert!(manifest.command("deny").is_none());
    }
}

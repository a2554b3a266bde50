use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Header placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// THIS FILE IS AUTOMATICALLY GENERATED. DO NOT EDIT!";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing whatever was there.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path` through a temporary sibling that is renamed into
/// place once fully flushed, so a reader never observes a partial file.
fn write_file(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)
        .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = parent.join(format!(".{}.tmp", file_name));

    let staged = stage(&tmp, content).and_then(|()| {
        std::fs::rename(&tmp, path)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))
    });
    if staged.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    staged?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

fn stage(tmp: &Path, content: &str) -> Result<()> {
    let mut out = std::fs::File::create(tmp)
        .wrap_err_with(|| format!("failed to create '{}'", tmp.display()))?;
    out.write_all(content.as_bytes())
        .wrap_err_with(|| format!("failed to write '{}'", tmp.display()))?;
    out.sync_all()
        .wrap_err_with(|| format!("failed to sync '{}'", tmp.display()))
}

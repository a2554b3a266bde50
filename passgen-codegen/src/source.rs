//! Where command declarations come from.

use eyre::Result;
use passgen_manifest::{CommandSpec, Manifest};

/// A registry of command declarations.
///
/// `load` materializes the whole registry; nothing downstream runs until it
/// has returned.
pub trait CommandSource {
    fn load(&self) -> Result<Vec<CommandSpec>>;
}

impl CommandSource for Manifest {
    fn load(&self) -> Result<Vec<CommandSpec>> {
        Ok(self.commands.clone())
    }
}

impl CommandSource for [CommandSpec] {
    fn load(&self) -> Result<Vec<CommandSpec>> {
        Ok(self.to_vec())
    }
}

impl CommandSource for Vec<CommandSpec> {
    fn load(&self) -> Result<Vec<CommandSpec>> {
        Ok(self.clone())
    }
}

use indexmap::IndexMap;
use passgen_codegen::CommandSource;
use passgen_manifest::CommandSpec;

use crate::{CommandModule, Result, RuntimeError};

/// In-process command modules, keyed by slug in registration order.
#[derive(Default)]
pub struct Registry {
    modules: IndexMap<String, Box<dyn CommandModule>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under the slug its spec declares.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::DuplicateCommand`] if the slug is taken.
    pub fn register(&mut self, module: impl CommandModule + 'static) -> Result<()> {
        let slug = module.spec().slug;
        if self.modules.contains_key(&slug) {
            return Err(RuntimeError::DuplicateCommand(slug));
        }

        tracing::debug!(slug = %slug, "registered command module");
        self.modules.insert(slug, Box::new(module));
        Ok(())
    }

    /// Builder form of [`Registry::register`].
    pub fn with(mut self, module: impl CommandModule + 'static) -> Result<Self> {
        self.register(module)?;
        Ok(self)
    }

    pub fn get(&self, slug: &str) -> Option<&dyn CommandModule> {
        self.modules.get(slug).map(|m| m.as_ref())
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn specs(&self) -> Vec<CommandSpec> {
        self.modules.values().map(|m| m.spec()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl CommandSource for Registry {
    fn load(&self) -> eyre::Result<Vec<CommandSpec>> {
        Ok(self.specs())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.modules.keys()).finish()
    }
}

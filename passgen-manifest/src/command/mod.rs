mod validate;

use serde::{Deserialize, Serialize};

/// A declared CLI command.
///
/// Commands are declared flat; grouping is expressed through [`group`](Self::group)
/// and resolved into a tree during generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandSpec {
    /// Stable colon-delimited identity, e.g. `orgs:create`
    pub slug: String,

    /// Leaf name within its group, e.g. `create`
    pub subpath: String,

    /// Full usage string, starting with the slug path, e.g. `orgs create <name>`
    pub usage: String,

    /// Help text
    #[serde(default)]
    pub description: String,

    /// Parent group name
    #[serde(default)]
    pub group: Option<String>,

    /// Flags, in declaration order
    #[serde(default)]
    pub options: Vec<FlagSpec>,

    /// Hooks run before the command executes
    #[serde(default)]
    pub pre_hooks: Vec<String>,
}

impl CommandSpec {
    pub fn new(
        slug: impl Into<String>,
        subpath: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            subpath: subpath.into(),
            usage: usage.into(),
            description: String::new(),
            group: None,
            options: Vec::new(),
            pre_hooks: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_option(mut self, flag: FlagSpec) -> Self {
        self.options.push(flag);
        self
    }

    pub fn with_pre_hook(mut self, hook: impl Into<String>) -> Self {
        self.pre_hooks.push(hook.into());
        self
    }

    /// The colon-delimited segments of the slug.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.slug.split(':')
    }

    /// Whether the given hook is registered as a pre-hook.
    pub fn has_pre_hook(&self, hook: &str) -> bool {
        self.pre_hooks.iter().any(|h| h == hook)
    }

    /// The argument portion of the usage string.
    ///
    /// The usage must start with the slug (where each `:` may be written as a
    /// space) followed by end-of-string or one whitespace separator. Returns
    /// `None` when the usage does not start with the slug.
    pub fn args_usage(&self) -> Option<&str> {
        let slug = self.slug.as_bytes();
        let usage = self.usage.as_bytes();
        if usage.len() < slug.len() {
            return None;
        }

        let prefix_matches = slug
            .iter()
            .zip(usage)
            .all(|(s, u)| s == u || (*s == b':' && *u == b' '));
        if !prefix_matches {
            return None;
        }

        // Prefix bytes are ASCII-equivalent to the slug, so this is a char boundary.
        let rest = &self.usage[self.slug.len()..];
        if rest.is_empty() {
            return Some(rest);
        }
        rest.strip_prefix(|c: char| c.is_ascii_whitespace())
    }
}

/// A flag declared on a command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlagSpec {
    /// Long alias including its prefix, e.g. `--org`
    pub long: String,

    /// Short alias including its prefix, e.g. `-o`
    #[serde(default)]
    pub short: Option<String>,

    /// Boolean switch (no value)
    #[serde(default, rename = "bool")]
    pub is_bool: bool,

    /// Default value (string flags only)
    #[serde(default)]
    pub default: Option<String>,

    /// Help text
    #[serde(default)]
    pub description: String,
}

impl FlagSpec {
    /// A string-valued flag.
    pub fn string(long: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            short: None,
            is_bool: false,
            default: None,
            description: String::new(),
        }
    }

    /// A boolean switch.
    pub fn switch(long: impl Into<String>) -> Self {
        Self {
            is_bool: true,
            ..Self::string(long)
        }
    }

    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

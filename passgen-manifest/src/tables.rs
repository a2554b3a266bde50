//! Lookup tables that drive naming, help categories and middleware selection.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Immutable lookup tables injected into the generator.
///
/// Every lookup is an exact, case-sensitive match. Each key in `[tables]`
/// replaces the corresponding default table as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tables {
    /// Help category by command name
    pub categories: IndexMap<String, String>,

    /// Slugs whose top-level form is implemented natively; they are demoted
    /// to a `list` subcommand of themselves
    pub replacements: IndexSet<String>,

    /// Groups whose commands run without the daemon-readiness middleware
    pub daemon_blacklist: IndexSet<String>,

    /// Pre-hook identifier that marks a command as requiring a session
    pub auth_hook: String,
}

impl Tables {
    pub fn category(&self, name: &str) -> Option<&str> {
        self.categories.get(name).map(String::as_str)
    }

    pub fn is_replacement(&self, slug: &str) -> bool {
        self.replacements.contains(slug)
    }

    pub fn is_daemon_blacklisted(&self, group: &str) -> bool {
        self.daemon_blacklist.contains(group)
    }
}

impl Default for Tables {
    fn default() -> Self {
        let categories = [
            ("set", "SECRETS"),
            ("unset", "SECRETS"),
            ("view", "SECRETS"),
            ("run", "SECRETS"),
            ("signup", "ACCOUNT"),
            ("verify", "ACCOUNT"),
            ("allow", "ACCESS CONTROL"),
            ("deny", "ACCESS CONTROL"),
            ("policies", "ACCESS CONTROL"),
            ("orgs", "ORGANIZATIONS"),
            ("invites", "ORGANIZATIONS"),
            ("keypairs", "ORGANIZATIONS"),
            ("envs", "ORGANIZATIONS"),
            ("services", "ORGANIZATIONS"),
            ("teams", "ORGANIZATIONS"),
        ];
        let replacements = [
            "orgs", "invites", "keypairs", "envs", "services", "teams", "policies",
        ];

        Self {
            categories: categories
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            replacements: replacements.into_iter().map(String::from).collect(),
            daemon_blacklist: IndexSet::from(["prefs".to_string()]),
            auth_hook: "auth".to_string(),
        }
    }
}

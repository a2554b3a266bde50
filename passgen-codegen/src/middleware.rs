//! Middlewares composed in front of a generated command's action.

use std::fmt;

use serde::Serialize;

/// A runtime middleware, run in order before the passthrough dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Middleware {
    /// Make sure the daemon is running
    EnsureDaemon,
    /// Make sure the user is logged in
    EnsureSession,
    /// Load directory-scoped preferences
    LoadDirPrefs,
    /// Apply global preference defaults to unset standard flags
    LoadPrefDefaults,
    /// Populate the user flag from the environment
    SetUserEnv,
}

impl Middleware {
    /// Appended, in this order, to every command that uses a standard flag.
    /// Preferences resolve against an established daemon/session, so these
    /// always come last.
    pub const PREFERENCES: [Middleware; 3] = [
        Middleware::LoadDirPrefs,
        Middleware::LoadPrefDefaults,
        Middleware::SetUserEnv,
    ];

    /// Identifier exported by the runtime package.
    pub fn ident(&self) -> &'static str {
        match self {
            Middleware::EnsureDaemon => "EnsureDaemon",
            Middleware::EnsureSession => "EnsureSession",
            Middleware::LoadDirPrefs => "LoadDirPrefs",
            Middleware::LoadPrefDefaults => "LoadPrefDefaults",
            Middleware::SetUserEnv => "SetUserEnv",
        }
    }

    /// The full chain for an action: `base` followed by the preference
    /// middlewares when the command uses a preference-backed flag.
    pub fn chain(base: &[Middleware], preference_backed: bool) -> Vec<Middleware> {
        let mut chain = base.to_vec();
        if preference_backed {
            chain.extend(Self::PREFERENCES);
        }
        chain
    }
}

impl fmt::Display for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

//! Execution context handed to command modules.

use std::path::PathBuf;

use crate::{Result, RuntimeError};

/// Directory-scoped configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cwd: PathBuf,
}

impl Config {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Configuration rooted at the process working directory.
    pub fn current() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

/// Credentials of an established daemon session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub passphrase: String,
}

impl Session {
    pub fn new(token: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            passphrase: passphrase.into(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

/// The directory and organization/project context a command targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    pub context: Option<String>,
}

impl Target {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Everything a command sees while it executes.
#[derive(Debug, Clone)]
pub struct ExecContext {
    /// Positional parameters, with the command path already stripped
    pub params: Vec<String>,
    pub config: Config,
    /// Set once the session middleware has run
    pub daemon: Option<Session>,
    pub target: Target,
}

impl ExecContext {
    pub fn new(config: Config) -> Self {
        let target = Target::new(config.cwd.clone());
        Self {
            params: Vec::new(),
            config,
            daemon: None,
            target,
        }
    }

    pub fn with_params(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.daemon = Some(session);
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// The positional parameter at `index`.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// The established session.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NotLoggedIn`] when no session has been set up.
    pub fn session(&self) -> Result<&Session> {
        self.daemon.as_ref().ok_or(RuntimeError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_defaults_to_cwd() {
        let ctx = ExecContext::new(Config::new("/work/project"));
        assert_eq!(ctx.target.path, PathBuf::from("/work/project"));
        assert_eq!(ctx.target.context, None);
    }

    #[test]
    fn test_session_required() {
        let ctx = ExecContext::new(Config::new("/work"));
        assert!(matches!(ctx.session(), Err(RuntimeError::NotLoggedIn)));

        let ctx = ctx.with_session(Session::new("this is a token", "hi"));
        assert_eq!(ctx.session().unwrap().token, "this is a token");
    }

    #[test]
    fn test_session_debug_is_redacted() {
        let debug = format!("{:?}", Session::new("secret-token", "secret-pass"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_params() {
        let ctx = ExecContext::new(Config::new("/work")).with_params(["knotty-buoy"]);
        assert_eq!(ctx.param(0), Some("knotty-buoy"));
        assert_eq!(ctx.param(1), None);
    }
}

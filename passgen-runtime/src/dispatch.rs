//! The Rust side of the generated `passthrough(ctx, depth, slug)` call.

use serde_json::Value;

use crate::{ExecContext, Output, Registry, Result, RuntimeError};

/// Routes a generated command invocation to its registered module.
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    auth_hook: String,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            auth_hook: "auth".to_string(),
        }
    }

    /// Use `hook` as the pre-hook that requires a session.
    pub fn with_auth_hook(mut self, hook: impl Into<String>) -> Self {
        self.auth_hook = hook.into();
        self
    }

    /// Run `slug` with the raw `argv` of the generated binary.
    ///
    /// The first `depth` components of `argv` (the binary name and the
    /// command path) are dropped; the rest become `ctx.params`. The outcome
    /// is reported through `output` and returned.
    pub fn dispatch(
        &self,
        ctx: ExecContext,
        argv: &[String],
        depth: usize,
        slug: &str,
        output: &mut dyn Output,
    ) -> Result<Value> {
        let ctx = ctx.with_params(argv.iter().skip(depth).cloned());
        let result = self.execute(&ctx, slug);

        match &result {
            Ok(value) => {
                tracing::debug!(slug, params = ctx.params.len(), "command succeeded");
                output.success(&ctx, value);
            }
            Err(err) => {
                tracing::debug!(slug, error = %err, "command failed");
                output.failure(&ctx, err);
            }
        }

        result
    }

    fn execute(&self, ctx: &ExecContext, slug: &str) -> Result<Value> {
        let module = self
            .registry
            .get(slug)
            .ok_or_else(|| RuntimeError::UnknownCommand(slug.to_string()))?;

        if module.spec().has_pre_hook(&self.auth_hook) {
            ctx.session()?;
        }

        module.execute(ctx)
    }
}

#[cfg(test)]
mod tests {
    use passgen_manifest::CommandSpec;
    use serde_json::json;

    use super::*;
    use crate::{CollectedOutput, CommandModule, Config, Session};

    struct Params;

    impl CommandModule for Params {
        fn spec(&self) -> CommandSpec {
            CommandSpec::new("envs:create", "create", "envs create [name]")
                .with_group("envs")
                .with_pre_hook("auth")
        }

        fn execute(&self, ctx: &ExecContext) -> Result<Value> {
            Ok(json!(ctx.params))
        }
    }

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn ctx() -> ExecContext {
        ExecContext::new(Config::new("/work")).with_session(Session::new("this is a token", "hi"))
    }

    #[test]
    fn test_strips_command_path() {
        let registry = Registry::new().with(Params).unwrap();
        let mut output = CollectedOutput::default();

        let value = Dispatcher::new(&registry)
            .dispatch(
                ctx(),
                &argv(&["passgen", "envs", "create", "staging"]),
                3,
                "envs:create",
                &mut output,
            )
            .unwrap();

        assert_eq!(value, json!(["staging"]));
        assert_eq!(output.successes, vec![json!(["staging"])]);
        assert!(output.failures.is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let registry = Registry::new();
        let mut output = CollectedOutput::default();

        let err = Dispatcher::new(&registry)
            .dispatch(ctx(), &argv(&["passgen", "view"]), 2, "view", &mut output)
            .unwrap_err();

        assert!(matches!(err, RuntimeError::UnknownCommand(_)));
        assert_eq!(output.failures, vec!["unknown command 'view'".to_string()]);
    }

    #[test]
    fn test_auth_hook_requires_session() {
        let registry = Registry::new().with(Params).unwrap();
        let mut output = CollectedOutput::default();
        let ctx = ExecContext::new(Config::new("/work"));

        let err = Dispatcher::new(&registry)
            .dispatch(ctx, &argv(&["passgen", "envs", "create"]), 3, "envs:create", &mut output)
            .unwrap_err();

        assert!(matches!(err, RuntimeError::NotLoggedIn));
        assert_eq!(output.failures, vec!["Please login to perform that command".to_string()]);
    }

    #[test]
    fn test_custom_auth_hook() {
        let registry = Registry::new().with(Params).unwrap();
        let mut output = CollectedOutput::default();
        let ctx = ExecContext::new(Config::new("/work"));

        let value = Dispatcher::new(&registry)
            .with_auth_hook("session")
            .dispatch(ctx, &argv(&["passgen", "envs", "create"]), 3, "envs:create", &mut output)
            .unwrap();

        assert_eq!(value, json!([]));
    }
}

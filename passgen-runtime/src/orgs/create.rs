use passgen_manifest::CommandSpec;
use serde_json::{Value, json};

use crate::{ApiClient, CommandModule, ExecContext, Prompt, PromptField, Result, RuntimeError};

pub const NAME_RULE: &str = "Only alphanumeric, hyphens and underscores are allowed";

const MAX_NAME_LEN: usize = 64;

/// Check an organization name.
///
/// # Errors
///
/// Returns a `name` validation error when the name is empty, longer than
/// 64 characters, or contains anything but ASCII alphanumerics, `-` and `_`.
pub fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(RuntimeError::validation("name", NAME_RULE))
    }
}

/// `orgs create [name]`
pub struct OrgsCreate<A, P> {
    api: A,
    prompt: P,
}

impl<A: ApiClient, P: Prompt> OrgsCreate<A, P> {
    pub fn new(api: A, prompt: P) -> Self {
        Self { api, prompt }
    }
}

impl<A: ApiClient, P: Prompt> CommandModule for OrgsCreate<A, P> {
    fn spec(&self) -> CommandSpec {
        CommandSpec::new("orgs:create", "create", "orgs create [name]")
            .with_description("Create a new organization")
            .with_group("orgs")
            .with_pre_hook("auth")
    }

    fn execute(&self, ctx: &ExecContext) -> Result<Value> {
        // A name given on the command line is rejected before asking for anything.
        let given = ctx.param(0);
        if let Some(name) = given {
            validate_name(name)?;
        }

        let field = PromptField::new("name", "Org name").with_default(given.map(String::from));
        let mut answers = self.prompt.prompt(&[field])?;
        let name = answers.swap_remove("name").unwrap_or_default();
        validate_name(&name)?;

        let session = ctx.session()?;
        tracing::debug!(org = %name, "creating organization");
        let body = self.api.post(&session.token, "/orgs", &json!({ "name": name }))?;

        Ok(json!({ "body": body }))
    }
}

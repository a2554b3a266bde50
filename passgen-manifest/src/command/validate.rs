use super::{CommandSpec, FlagSpec};
use crate::{error::Result, manifest::ParseContext};

impl CommandSpec {
    /// Validate the shape of a single declaration.
    ///
    /// Cross-command checks (duplicate slugs, usage/slug agreement) happen
    /// later in the generation pipeline, where they can be reported together.
    pub fn validate(&self, ctx: &ParseContext) -> Result<()> {
        let source = ctx.source_context();

        if self.slug.is_empty() {
            return Err(source.validation_error("command slug must not be empty", None));
        }
        if self.segments().any(str::is_empty) {
            return Err(source.invalid_slug_error(
                &self.slug,
                "slug contains an empty segment",
                ctx.find_value_span("slug", &self.slug),
            ));
        }
        if self.slug.chars().any(char::is_whitespace) {
            return Err(source.invalid_slug_error(
                &self.slug,
                "slug must not contain whitespace",
                ctx.find_value_span("slug", &self.slug),
            ));
        }

        if self.subpath.is_empty() || self.subpath.chars().any(char::is_whitespace) {
            return Err(source.validation_error(
                format!("'{}' has an invalid subpath '{}'", self.slug, self.subpath),
                ctx.find_value_span("subpath", &self.subpath),
            ));
        }

        if let Some(group) = &self.group
            && group.is_empty()
        {
            return Err(source.validation_error(
                format!("'{}' declares an empty group", self.slug),
                ctx.find_value_span("slug", &self.slug),
            ));
        }

        for flag in &self.options {
            flag.validate(&self.slug, ctx)?;
        }

        Ok(())
    }
}

impl FlagSpec {
    fn validate(&self, slug: &str, ctx: &ParseContext) -> Result<()> {
        let source = ctx.source_context();

        match self.long.strip_prefix("--") {
            Some(name) if !name.is_empty() && !name.starts_with('-') => {}
            _ => {
                return Err(source.invalid_flag_error(
                    &self.long,
                    slug,
                    "long flags need a '--' prefix followed by a name",
                    ctx.find_value_span("long", &self.long),
                ));
            }
        }

        if let Some(short) = &self.short {
            match short.strip_prefix('-') {
                Some(name) if !name.is_empty() && !name.starts_with('-') => {}
                _ => {
                    return Err(source.invalid_flag_error(
                        short,
                        slug,
                        "short flags need a single '-' prefix followed by a name",
                        ctx.find_value_span("short", short),
                    ));
                }
            }
        }

        if self.is_bool && self.default.is_some() {
            return Err(source.invalid_flag_error(
                &self.long,
                slug,
                "boolean flags cannot declare a default value",
                ctx.find_value_span("long", &self.long),
            ));
        }

        Ok(())
    }
}

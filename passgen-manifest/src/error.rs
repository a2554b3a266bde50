use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid flag alias error.
    pub fn invalid_flag_error(
        &self,
        flag: impl Into<String>,
        slug: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidFlag {
            src: self.named_source(),
            span,
            flag: flag.into(),
            slug: slug.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid slug error.
    pub fn invalid_slug_error(
        &self,
        slug: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidSlug {
            src: self.named_source(),
            span,
            slug: slug.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the registry with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse passgen.toml")]
    #[diagnostic(code(passgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(passgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid slug '{slug}'")]
    #[diagnostic(
        code(passgen::invalid_slug),
        help("{reason}. Slugs are colon-delimited command paths, e.g. 'orgs:create'.")
    )]
    InvalidSlug {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid slug")]
        span: Option<SourceSpan>,
        slug: String,
        reason: String,
    },

    #[error("invalid flag '{flag}' on '{slug}'")]
    #[diagnostic(
        code(passgen::invalid_flag),
        help("{reason}. Long flags look like '--name', short flags like '-n'.")
    )]
    InvalidFlag {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid flag")]
        span: Option<SourceSpan>,
        flag: String,
        slug: String,
        reason: String,
    },
}

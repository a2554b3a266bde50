use thiserror::Error;

/// A command failure. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A parameter failed validation
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// The API rejected the request or could not be reached
    #[error("{0}")]
    Api(String),

    /// Reading input from the user failed
    #[error("failed to read input: {0}")]
    Prompt(String),

    #[error("Please login to perform that command")]
    NotLoggedIn,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),
}

impl RuntimeError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

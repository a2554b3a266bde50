//! Runtime contract for commands dispatched from a passgen-generated CLI.
//!
//! Each generated Go action calls `passthrough(ctx, depth, slug)`. On this
//! side a [`Dispatcher`] finds the [`CommandModule`] registered under the
//! slug, hands it an [`ExecContext`] and reports the result through an
//! [`Output`]. A [`Registry`] is also a
//! [`CommandSource`](passgen_codegen::CommandSource), so the generator can
//! build the command tree straight from the registered modules.

mod api;
mod context;
mod dispatch;
mod error;
mod module;
mod output;
mod prompt;
mod registry;

pub mod orgs;

pub use api::ApiClient;
pub use context::{Config, ExecContext, Session, Target};
pub use dispatch::Dispatcher;
pub use error::{Result, RuntimeError};
pub use module::CommandModule;
pub use output::{CollectedOutput, Output, TerminalOutput};
pub use prompt::{Prompt, PromptField, TerminalPrompt};
pub use registry::Registry;

//! Output hooks for command results.

use serde_json::Value;

use crate::{ExecContext, RuntimeError};

/// Reports the outcome of a command.
///
/// Commands produce values; implementations decide how to show them.
pub trait Output {
    fn success(&mut self, ctx: &ExecContext, result: &Value);

    fn failure(&mut self, ctx: &ExecContext, err: &RuntimeError);
}

/// Terminal output implementation.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn success(&mut self, _ctx: &ExecContext, result: &Value) {
        match serde_json::to_string_pretty(result) {
            Ok(text) => println!("{}", text),
            Err(_) => println!("{}", result),
        }
    }

    fn failure(&mut self, _ctx: &ExecContext, err: &RuntimeError) {
        eprintln!("error: {}", err);
    }
}

/// Output that keeps every outcome in memory.
#[derive(Debug, Default)]
pub struct CollectedOutput {
    pub successes: Vec<Value>,
    pub failures: Vec<String>,
}

impl Output for CollectedOutput {
    fn success(&mut self, _ctx: &ExecContext, result: &Value) {
        self.successes.push(result.clone());
    }

    fn failure(&mut self, _ctx: &ExecContext, err: &RuntimeError) {
        self.failures.push(err.to_string());
    }
}

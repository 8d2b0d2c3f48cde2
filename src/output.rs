//! Terminal output rendering
//!
//! One [`Printer`] is built in `main` from the global `--output` flag and
//! handed to every command handler. Data and confirmations go to stdout,
//! errors to stderr. In `json` mode the response is the only thing written
//! to stdout, as a single machine-parseable document.

use crate::error::{Error, Result};
use serde_json::Value;
use std::str::FromStr;

/// Output rendering mode, chosen once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable, indented rendering.
    #[default]
    Pretty,
    /// Compact single-document JSON for piping into other tools.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    // Exact match only; unknown values are rejected rather than silently
    // falling back to the default.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pretty" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidArgument(format!(
                "unknown output format '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

/// Renders responses and messages for the terminal.
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a success payload to stdout.
    pub fn print_response(&self, payload: &Value) {
        println!("{}", self.render(payload));
    }

    /// Render an error message to stderr, prefixed so it stands out
    /// regardless of the output mode.
    pub fn print_error(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    /// Confirmation text for configuration-mutating commands.
    pub fn print_success(&self, message: &str) {
        println!("✓ {}", message);
    }

    pub fn print_info(&self, message: &str) {
        println!("{}", message);
    }

    fn render(&self, payload: &Value) -> String {
        match self.format {
            OutputFormat::Json => payload.to_string(),
            OutputFormat::Pretty => {
                serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
            }
        }
    }
}

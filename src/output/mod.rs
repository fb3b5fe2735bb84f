//! Output formatting for command results
//!
//! The `workspaces` command can print plain text for humans and shell scripts,
//! or JSON for bars that read the result directly.

use crate::workspaces::{ParseResult, WorkspaceReport};
use std::str::FromStr;

pub mod formatters;

pub use formatters::*;

/// Trait for workspace result formatters
pub trait OutputFormatter {
    /// Format the resolved workspaces for one screen
    fn format_result(&self, screen: &str, result: &ParseResult) -> String;

    /// Format the result together with every output in the report
    fn format_full(&self, screen: &str, result: &ParseResult, report: &WorkspaceReport) -> String;
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `workspaces: 1 2 3` / `current: 2`
    #[default]
    Text,
    /// A single JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl OutputFormat {
    /// Create a formatter instance for this format
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

//! JSON output formatter

use crate::output::OutputFormatter;
use crate::workspaces::{ParseResult, WorkspaceReport};
use serde_json::json;

/// JSON formatter for bars that consume the result directly
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, _screen: &str, result: &ParseResult) -> String {
        serde_json::to_string(result).unwrap_or_default()
    }

    fn format_full(&self, screen: &str, result: &ParseResult, report: &WorkspaceReport) -> String {
        let value = json!({
            "screen": screen,
            "workspace_list": result.workspace_list,
            "current_workspace": result.current_workspace,
            "outputs": report.outputs(),
            "focused": report.focused(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_default()
    }
}

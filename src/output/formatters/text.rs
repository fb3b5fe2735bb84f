//! Plain text output formatter

use crate::output::OutputFormatter;
use crate::workspaces::{ParseResult, WorkspaceReport};

/// Line-oriented output that is easy to read from shell scripts
#[derive(Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers.iter().map(u32::to_string).collect::<Vec<_>>().join(" ")
}

impl OutputFormatter for TextFormatter {
    fn format_result(&self, _screen: &str, result: &ParseResult) -> String {
        format!(
            "workspaces: {}\ncurrent: {}",
            join_numbers(&result.workspace_list),
            result.current_workspace
        )
    }

    fn format_full(&self, screen: &str, result: &ParseResult, report: &WorkspaceReport) -> String {
        let mut lines = vec![format!("screen: {screen}"), self.format_result(screen, result)];

        for (name, workspaces) in report.outputs() {
            lines.push(format!("output {name}: {}", join_numbers(workspaces)));
        }

        match report.focused() {
            Some(focused) if !focused.output.is_empty() => {
                lines.push(format!("focused: {} {}", focused.output, focused.workspace))
            }
            Some(focused) => lines.push(format!("focused: {}", focused.workspace)),
            None => lines.push("focused: none".to_string()),
        }

        lines.join("\n")
    }
}

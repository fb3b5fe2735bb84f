//! Handler for the `workspaces` command.

use colored::*;
use std::str::FromStr;

use barkit_lib::config::Config;
use barkit_lib::exit_codes::exit;
use barkit_lib::output::OutputFormat;
use barkit_lib::workspaces::WorkspaceReport;

use crate::cli_types::WorkspacesArgs;
use crate::input::read_input;

/// Parse a workspace report and print what the bar on the chosen screen shows.
pub fn handle_workspaces(args: &WorkspacesArgs, config: &Config) {
    let env_output_format = std::env::var("BARKIT_OUTPUT_FORMAT").ok();

    // Precedence: CLI → env var → config → default
    let output_format_str = args
        .output_format
        .as_deref()
        .or(env_output_format.as_deref())
        .or(config.global.output_format.as_deref())
        .unwrap_or("text");

    let output_format = match OutputFormat::from_str(output_format_str) {
        Ok(fmt) => fmt,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    let content = match read_input(args.input.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    let screen = args
        .screen
        .as_deref()
        .or(config.workspaces.screen.as_deref())
        .unwrap_or_default();
    if screen.is_empty() {
        log::warn!("No screen name given, showing the fallback workspaces");
    }

    let report = WorkspaceReport::parse(&content);
    let result = report.resolve(screen);

    let formatter = output_format.create_formatter();
    let output = if args.all {
        formatter.format_full(screen, &result, &report)
    } else {
        formatter.format_result(screen, &result)
    };
    println!("{output}");
}

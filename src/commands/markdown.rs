//! Handler for the `markdown` command.

use colored::*;

use barkit_lib::exit_codes::exit;
use barkit_lib::markdown::MarkdownRenderer;

use crate::cli_types::MarkdownArgs;
use crate::input::read_input;

/// Render Markdown from a file or stdin as HTML.
pub fn handle_markdown(args: &MarkdownArgs) {
    let renderer = MarkdownRenderer::new();

    if args.explain {
        for (i, step) in renderer.steps().enumerate() {
            println!("{:>2}. {step}", i + 1);
        }
        return;
    }

    let content = match read_input(args.input.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    // The newline that ends a file is not part of the message
    let text = content.strip_suffix('\n').unwrap_or(&content);
    println!("{}", renderer.render(Some(text)));
}

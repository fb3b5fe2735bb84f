//! Handler for the `init` command.

use colored::*;

use barkit_lib::config::CONFIG_FILE_NAME;
use barkit_lib::exit_codes::exit;
use barkit_lib::init::create_default_config;

/// Write the commented default configuration file.
pub fn handle_init(path: Option<&str>, force: bool) {
    let path = path.unwrap_or(CONFIG_FILE_NAME);

    match create_default_config(path, force) {
        Ok(true) => println!("Created default configuration file: {path}"),
        Ok(false) => {
            eprintln!(
                "{}: Configuration file {path} already exists (use --force to overwrite)",
                "Error".red().bold()
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

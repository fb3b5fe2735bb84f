use clap::{Parser, Subcommand};
use colored::*;
use std::path::Path;

use barkit_lib::config::Config;
use barkit_lib::exit_codes::exit;

mod cli_types;
mod commands;
mod input;

use cli_types::{MarkdownArgs, PaletteArgs, WorkspacesArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a workspace report and print the workspaces for one screen
    Workspaces(WorkspacesArgs),
    /// Render notification Markdown as HTML
    Markdown(MarkdownArgs),
    /// Generate a 16-colour terminal palette from a base colour
    Palette(PaletteArgs),
    /// Create a default .barkit.toml
    Init {
        /// Where to write the file (default: .barkit.toml)
        #[arg(long)]
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show version information
    Version,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_config(explicit: Option<&str>) -> Config {
    match Config::load(explicit.map(Path::new), Path::new(".")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Workspaces(args) => {
            let config = load_config(cli.config.as_deref());
            commands::workspaces::handle_workspaces(args, &config);
        }
        Commands::Markdown(args) => commands::markdown::handle_markdown(args),
        Commands::Palette(args) => {
            let config = load_config(cli.config.as_deref());
            commands::palette::handle_palette(args, &config);
        }
        Commands::Init { path, force } => commands::init::handle_init(path.as_deref(), *force),
        Commands::Version => commands::version::handle_version(),
    }
}

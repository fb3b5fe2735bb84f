//! Handler for the `palette` command.

use colored::*;

use barkit_lib::config::Config;
use barkit_lib::exit_codes::exit;
use barkit_lib::palette::generate_palette;

use crate::cli_types::PaletteArgs;

/// Print a 16-colour terminal palette derived from the given colour.
pub fn handle_palette(args: &PaletteArgs, config: &Config) {
    let variant = args.variant.unwrap_or(config.palette.variant);
    let light = args.light || config.palette.light;
    log::debug!("Generating {variant} palette from {} (light: {light})", args.color);

    match generate_palette(&args.color, variant, light, args.honor_primary.as_deref()) {
        Ok(palette) if args.kitty => print!("{}", palette.to_kitty()),
        Ok(palette) => print!("{}", palette.to_ghostty()),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

use barkit_lib::palette::Variant;
use clap::Args;

#[derive(Args, Debug)]
pub struct WorkspacesArgs {
    /// Workspace report to parse (use '-' or omit for stdin)
    #[arg(required = false)]
    pub input: Option<String>,

    /// Output (monitor) name to resolve; falls back to `screen` in the config
    #[arg(short, long)]
    pub screen: Option<String>,

    /// Also print every output and the globally focused workspace
    #[arg(short, long)]
    pub all: bool,

    /// Output format for the result
    #[arg(long, short = 'o', value_parser = ["text", "json"],
          help = "Output format (default: text, or $BARKIT_OUTPUT_FORMAT, or output-format in config)")]
    pub output_format: Option<String>,
}

#[derive(Args, Debug)]
pub struct MarkdownArgs {
    /// Markdown file to render (use '-' or omit for stdin)
    #[arg(required = false)]
    pub input: Option<String>,

    /// List the conversion steps in the order they run instead of rendering
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Base colour, e.g. '#1e66f5' or 1e66f5
    pub color: String,

    /// Generate a light palette
    #[arg(long)]
    pub light: bool,

    /// Print Kitty `colorN` lines instead of Ghostty `palette =` lines
    #[arg(long)]
    pub kitty: bool,

    /// Keep this accent colour for magenta/cyan (dank16 only)
    #[arg(long, value_name = "HEX")]
    pub honor_primary: Option<String>,

    /// Palette generator (default: dank16, or variant in config)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,
}

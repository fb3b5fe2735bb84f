//! Text utilities behind a desktop status bar.
//!
//! - [`workspaces`] parses the window manager's workspace listing
//! - [`markdown`] turns notification Markdown into HTML for a rich-text label
//! - [`shell_state`] tracks tray menu and notification popup visibility
//! - [`palette`] derives 16-colour terminal palettes from a base colour

pub mod config;
pub mod exit_codes;
pub mod init;
pub mod markdown;
pub mod output;
pub mod palette;
pub mod shell_state;
pub mod utils;
pub mod workspaces;

pub use config::Config;
pub use markdown::{MarkdownRenderer, markdown_to_html, render};
pub use palette::{Palette, PaletteError, Variant, generate_palette};
pub use shell_state::{NotificationState, ShellState, TickEvents, TrayMenuState};
pub use workspaces::{FocusedWorkspace, ParseResult, WorkspaceReport, parse};

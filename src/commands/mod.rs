//! Command handlers for the barkit CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod init;
pub mod markdown;
pub mod palette;
pub mod version;
pub mod workspaces;

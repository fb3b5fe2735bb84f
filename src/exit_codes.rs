//! Exit codes for barkit
//!
//! The transforms themselves never fail, so the only non-zero code reports
//! problems around them: unreadable input, a broken config file, a bad colour.

/// Tool error - Configuration error, file access error or invalid argument
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::TOOL_ERROR;

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}

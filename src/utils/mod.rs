//! Helpers shared by the parsers and generators.

pub mod color;
pub mod line_ending;

pub use line_ending::{LineEnding, detect_line_ending, normalize_to_lf};

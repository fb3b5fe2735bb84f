//! Reading command input from a file or stdin

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

use barkit_lib::utils::{LineEnding, detect_line_ending, normalize_to_lf};

/// Read `path`, or stdin when it is `None` or `-`, with line endings normalised to LF
pub fn read_input(path: Option<&str>) -> Result<String> {
    let content = match path {
        None | Some("-") => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read from stdin")?;
            content
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?,
    };

    let ending = detect_line_ending(&content);
    if ending != LineEnding::Lf {
        log::debug!("Normalizing {ending:?} line endings to LF");
    }

    Ok(normalize_to_lf(&content).into_owned())
}

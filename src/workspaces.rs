//!
//! Parsing of the window manager's workspace listing.
//!
//! The report looks like this:
//!
//! ```text
//! Output "DP-1"
//!    1
//!  * 2
//!    3
//! Output "HDMI-A-1"
//!  * 4
//! ```
//!
//! Each `Output "<name>"` line opens a block; every following line that holds
//! only a workspace number (optionally marked with `*` when focused) belongs
//! to that block. Anything else is ignored, so the parser never fails.

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const OUTPUT_PREFIX: &str = "Output \"";

/// Workspaces shown when the requested output is unknown.
pub const FALLBACK_WORKSPACES: [u32; 2] = [1, 2];

/// Workspace highlighted when no focus marker applies.
pub const DEFAULT_WORKSPACE: u32 = 1;

static OUTPUT_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"Output "(.+)""#).unwrap());
static WORKSPACE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\*?)\s*([0-9]+)$").unwrap());
static ACTIVE_WORKSPACE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*\s*([0-9]+)$").unwrap());

/// The workspace marked as focused anywhere in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusedWorkspace {
    /// Output the marker appeared under. Empty when it preceded every `Output` line.
    pub output: String,
    pub workspace: u32,
}

/// What the bar needs to draw the indicators for one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub workspace_list: Vec<u32>,
    pub current_workspace: u32,
}

impl ParseResult {
    /// The degraded result used for unknown or unnamed outputs
    pub fn fallback() -> Self {
        Self {
            workspace_list: FALLBACK_WORKSPACES.to_vec(),
            current_workspace: DEFAULT_WORKSPACE,
        }
    }
}

/// Every output found in a report, in the order they were listed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkspaceReport {
    outputs: IndexMap<String, Vec<u32>>,
    focused: Option<FocusedWorkspace>,
    #[serde(skip)]
    lines: Vec<String>,
}

/// Returns the captured name for a header line, or `None` if the line is not a
/// header at all. `Some(None)` is a header whose name could not be read.
fn header_name(line: &str) -> Option<Option<&str>> {
    if !line.starts_with(OUTPUT_PREFIX) {
        return None;
    }
    Some(OUTPUT_NAME.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str()))
}

impl WorkspaceReport {
    /// Build the output map and the global focus from raw report text.
    ///
    /// A repeated `Output` line resets that output's list. When several lines
    /// carry the focus marker, the last one wins.
    pub fn parse(report: &str) -> Self {
        let lines: Vec<String> = report.split('\n').map(str::to_string).collect();
        let mut outputs: IndexMap<String, Vec<u32>> = IndexMap::new();
        let mut focused = None;
        let mut current_output: Option<String> = None;

        for line in &lines {
            if let Some(name) = header_name(line) {
                if let Some(name) = name {
                    current_output = Some(name.to_string());
                    outputs.insert(name.to_string(), Vec::new());
                }
                continue;
            }

            if line.trim().is_empty() {
                continue;
            }

            let Some(caps) = WORKSPACE_LINE.captures(line) else {
                continue;
            };
            let Ok(number) = caps[2].parse::<u32>() else {
                log::debug!("Ignoring out of range workspace number: {}", line.trim());
                continue;
            };

            if let Some(list) = current_output.as_ref().and_then(|name| outputs.get_mut(name)) {
                list.push(number);
            }

            if &caps[1] == "*" {
                focused = Some(FocusedWorkspace {
                    output: current_output.clone().unwrap_or_default(),
                    workspace: number,
                });
            }
        }

        log::debug!("Parsed {} outputs from workspace report", outputs.len());

        Self { outputs, focused, lines }
    }

    /// Workspaces listed for `output`, if the output appeared in the report
    pub fn workspaces_for(&self, output: &str) -> Option<&[u32]> {
        self.outputs.get(output).map(Vec::as_slice)
    }

    /// Output names in report order
    pub fn output_names(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(String::as_str)
    }

    pub fn outputs(&self) -> &IndexMap<String, Vec<u32>> {
        &self.outputs
    }

    pub fn focused(&self) -> Option<&FocusedWorkspace> {
        self.focused.as_ref()
    }

    /// The focused workspace inside `output`'s own block.
    ///
    /// Unlike the global focus this takes the first marked line of the block.
    fn active_workspace_on(&self, output: &str) -> u32 {
        let mut in_target = false;

        for line in &self.lines {
            if let Some(name) = header_name(line) {
                in_target = name == Some(output);
                continue;
            }

            if !in_target || line.trim().is_empty() {
                continue;
            }

            // The first marker decides, even when its number is out of range
            if let Some(caps) = ACTIVE_WORKSPACE_LINE.captures(line) {
                return caps[1].parse::<u32>().unwrap_or_else(|_| {
                    log::debug!("Out of range focused workspace on {output}: {}", line.trim());
                    DEFAULT_WORKSPACE
                });
            }
        }

        DEFAULT_WORKSPACE
    }

    /// Resolve what the bar on `screen` should show.
    ///
    /// Unknown or empty screen names get [`ParseResult::fallback`].
    pub fn resolve(&self, screen: &str) -> ParseResult {
        if screen.is_empty() {
            return ParseResult::fallback();
        }

        match self.outputs.get(screen) {
            Some(list) => ParseResult {
                workspace_list: list.clone(),
                current_workspace: self.active_workspace_on(screen),
            },
            None => {
                log::debug!("Output {screen:?} not found in workspace report, using fallback");
                ParseResult::fallback()
            }
        }
    }
}

/// Parse `report` and resolve the workspaces for `screen`
pub fn parse(report: &str, screen: &str) -> ParseResult {
    WorkspaceReport::parse(report).resolve(screen)
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bt_core::Status;

pub(crate) const BLUE: &str = "\x1b[94m";
pub(crate) const GREEN: &str = "\x1b[92m";
pub(crate) const RED: &str = "\x1b[91m";
pub(crate) const BOLD: &str = "\x1b[1m";
pub(crate) const END: &str = "\x1b[0m";

/// Default number of columns per tree level.
pub const DEFAULT_INDENT: usize = 5;
/// Default width of the client column in activity dumps.
pub const DEFAULT_CELL_WIDTH: usize = 25;

/// Tree rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderStyle {
    pub indent: usize,
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            color: true,
        }
    }
}

impl RenderStyle {
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}

/// Activity stream rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActivityStyle {
    /// Render lists and maps in full instead of `<<NoExpansion>>`.
    pub expand: bool,
    pub color: bool,
    pub cell_width: usize,
}

impl Default for ActivityStyle {
    fn default() -> Self {
        Self {
            expand: false,
            color: true,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl ActivityStyle {
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}

pub(crate) fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{code}{text}{END}")
    } else {
        text.to_string()
    }
}

/// `⦿` colored by status; blank for `Idle`.
pub fn status_glyph(status: Status, color: bool) -> String {
    const SYMBOL: &str = "⦿";
    match status {
        Status::Success => paint(SYMBOL, GREEN, color),
        Status::Failure => paint(SYMBOL, RED, color),
        Status::Running => paint(SYMBOL, BLUE, color),
        Status::Idle => " ".to_string(),
    }
}

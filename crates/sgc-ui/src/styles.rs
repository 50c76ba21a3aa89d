//! Ayu color theme and styling functions for sgc output.
//!
//! Color source: <https://github.com/ayu-theme/ayu-colors>
//!
//! Only outcomes and diff markers get color; section bodies stay plain so
//! git's own output reads as git printed it.

use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

pub const ICON_WARN: &str = "\u{26A0}"; // ⚠

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Semantic render helpers
// ---------------------------------------------------------------------------

/// Renders text with pass (green) styling.
pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

/// Renders text with fail (red) styling.
pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

/// Renders text with muted (gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders a `=== Title ===` section header in bold accent.
pub fn render_section(title: &str) -> String {
    color_bold_str(&format!("=== {title} ==="), ACCENT)
}

/// Renders an existence flag as `存在` (green) or `不存在` (muted).
pub fn render_exists(exists: bool) -> String {
    if exists {
        render_pass("存在")
    } else {
        render_muted("不存在")
    }
}

pub fn render_warn_icon() -> String {
    color_str(ICON_WARN, WARN)
}

// ---------------------------------------------------------------------------
// Diff rendering
// ---------------------------------------------------------------------------

/// Colors one line of a unified diff by its leading marker.
pub fn render_diff_line(line: &str) -> String {
    if line.starts_with("+++") || line.starts_with("---") || line.starts_with("diff ") {
        render_bold_plain(line)
    } else if line.starts_with('+') {
        render_pass(line)
    } else if line.starts_with('-') {
        render_fail(line)
    } else if line.starts_with("@@") {
        color_str(line, ACCENT)
    } else {
        line.to_string()
    }
}

/// Colors every line of a unified diff.
pub fn render_diff(diff: &str) -> String {
    diff.lines()
        .map(render_diff_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_bold_plain(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

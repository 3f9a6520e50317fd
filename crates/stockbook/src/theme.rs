#![forbid(unsafe_code)]

//! Named styles for the shell chrome and fallback view.

use ftui_render::cell::PackedRgba;
use ftui_style::{Style, StyleFlags};

fn ink() -> PackedRgba {
    PackedRgba::rgb(226, 232, 240)
}

fn muted_ink() -> PackedRgba {
    PackedRgba::rgb(148, 163, 184)
}

fn surface() -> PackedRgba {
    PackedRgba::rgb(24, 28, 38)
}

fn highlight() -> PackedRgba {
    PackedRgba::rgb(51, 65, 85)
}

fn danger() -> PackedRgba {
    PackedRgba::rgb(239, 104, 104)
}

/// Navigation bar background.
pub fn nav_bar() -> Style {
    Style::new().bg(surface()).fg(muted_ink())
}

/// Inactive navigation entry.
pub fn nav_entry() -> Style {
    Style::new().bg(surface()).fg(muted_ink()).attrs(StyleFlags::BOLD)
}

/// Active navigation entry.
pub fn nav_active() -> Style {
    Style::new()
        .bg(highlight())
        .fg(ink())
        .attrs(StyleFlags::BOLD)
}

/// Content area border.
pub fn content_border() -> Style {
    Style::new().fg(muted_ink())
}

/// Page title line.
pub fn page_title() -> Style {
    Style::new().fg(ink()).attrs(StyleFlags::BOLD)
}

/// Regular page text.
pub fn body() -> Style {
    Style::new().fg(ink())
}

/// De-emphasized text.
pub fn muted() -> Style {
    Style::new().fg(muted_ink())
}

/// Footer locale bar.
pub fn footer() -> Style {
    Style::new().bg(surface()).fg(muted_ink())
}

/// Base fill for the fallback view.
pub fn fallback_base() -> Style {
    Style::new().bg(PackedRgba::rgb(34, 24, 26)).fg(ink())
}

/// Fallback view title and border.
pub fn fallback_title() -> Style {
    Style::new().fg(danger()).attrs(StyleFlags::BOLD)
}

/// Reload hint in the fallback view.
pub fn fallback_hint() -> Style {
    Style::new().fg(muted_ink()).attrs(StyleFlags::ITALIC)
}

#![forbid(unsafe_code)]

//! Shell chrome: header navigation bar and footer locale bar.
//!
//! Both render from the injected locale store every frame; neither
//! holds state of its own.

use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;
use ftui_widgets::Widget;
use ftui_widgets::block::Alignment;
use ftui_widgets::paragraph::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::i18n::{Locale, Localizer};
use crate::routes::PageId;
use crate::theme;

/// Gap between navigation entries, in cells.
const NAV_GAP: u16 = 2;

/// Render the navigation menu with exactly one active entry.
///
/// Labels are localized and measured with their display width (CJK
/// labels occupy two cells per character). Entries that no longer fit
/// are dropped from the right.
pub fn render_nav_bar(store: &Localizer, active: PageId, frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }

    // Paint the bar background across the full row.
    Paragraph::new(" ".repeat(area.width as usize))
        .style(theme::nav_bar())
        .render(Rect::new(area.x, area.y, area.width, 1), frame);

    let mut x = area.x + 1;
    let right = area.x + area.width;
    for &page in PageId::ALL {
        let label = store.text(page.label_key());
        let width = label.width() as u16;
        if width == 0 || x + width > right {
            break;
        }
        let style = if page == active {
            theme::nav_active()
        } else {
            theme::nav_entry()
        };
        Paragraph::new(label)
            .style(style)
            .render(Rect::new(x, area.y, width, 1), frame);
        x += width + NAV_GAP;
    }
}

/// Render the footer locale bar: caption, the three languages with the
/// active one bracketed, and the selector key hint.
pub fn render_footer(store: &Localizer, frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }

    let entries: Vec<String> = Locale::ALL
        .iter()
        .map(|&locale| {
            if locale == store.locale() {
                format!("[{}]", locale.native_name())
            } else {
                locale.native_name().to_string()
            }
        })
        .collect();

    let line = format!(
        "{}: {}   {}",
        store.text("common.language"),
        entries.join("  "),
        store.text("common.localeHint"),
    );

    Paragraph::new(line)
        .style(theme::footer())
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, area.y, area.width, 1), frame);
}

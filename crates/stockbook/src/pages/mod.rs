#![forbid(unsafe_code)]

//! Business page placeholders.
//!
//! Each section of the application is one module here. The real page
//! content belongs to the business modules; the shell only requires
//! that a page be a self-contained renderable unit whose render-time
//! panics the boundary can catch.

use ftui_core::event::Event;
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_text::WrapMode;
use ftui_widgets::Widget;
use ftui_widgets::paragraph::Paragraph;

use crate::i18n::Localizer;
use crate::routes::PageId;
use crate::theme;

pub mod analysis;
pub mod inbound;
pub mod outbound;
pub mod overview;
pub mod partners;
pub mod payable;
pub mod product_prices;
pub mod products;
pub mod receivable;
pub mod report;
pub mod stock;

/// A routed business page.
///
/// Pages take no required input from the shell; the locale store is
/// passed at render time only.
pub trait Page {
    /// Forward an input event to the page. Placeholders ignore input.
    fn update(&mut self, _event: &Event) {}

    /// Render the page into the given area.
    fn view(&self, store: &Localizer, frame: &mut Frame, area: Rect);
}

/// Shared placeholder body: localized title, section summary, and the
/// under-construction note.
pub(crate) fn render_placeholder(
    store: &Localizer,
    page: PageId,
    frame: &mut Frame,
    area: Rect,
) {
    if area.is_empty() {
        return;
    }

    let rows = Flex::vertical()
        .constraints([
            Constraint::Fixed(1),
            Constraint::Fixed(1),
            Constraint::Fixed(1),
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(store.text(page.label_key()))
        .style(theme::page_title())
        .render(rows[0], frame);

    Paragraph::new(store.text(page.summary_key()))
        .style(theme::muted())
        .render(rows[1], frame);

    if !rows[3].is_empty() {
        Paragraph::new(store.text("page.placeholder"))
            .style(theme::body())
            .wrap(WrapMode::Word)
            .render(rows[3], frame);
    }
}

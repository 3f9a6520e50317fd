#![forbid(unsafe_code)]

//! Overview page: the default landing section.
//!
//! Besides the placeholder body it lists the other sections with their
//! summaries, as a directory of the application.

use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_widgets::Widget;
use ftui_widgets::paragraph::Paragraph;

use crate::i18n::Localizer;
use crate::routes::PageId;
use crate::theme;

use super::Page;

#[derive(Debug, Default)]
pub struct Overview;

impl Page for Overview {
    fn view(&self, store: &Localizer, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }

        let rows = Flex::vertical()
            .constraints([Constraint::Fixed(1), Constraint::Fixed(1), Constraint::Min(0)])
            .split(area);

        Paragraph::new(store.text("app.title"))
            .style(theme::page_title())
            .render(rows[0], frame);

        Paragraph::new(store.text(PageId::Overview.summary_key()))
            .style(theme::muted())
            .render(rows[1], frame);

        let directory = rows[2];
        if directory.is_empty() {
            return;
        }
        for (i, &page) in PageId::ALL
            .iter()
            .filter(|&&page| page != PageId::Overview)
            .enumerate()
        {
            let y = directory.y + i as u16;
            if y >= directory.y + directory.height {
                break;
            }
            let line = format!(
                "{}  {}",
                store.text(page.label_key()),
                store.text(page.summary_key())
            );
            Paragraph::new(line)
                .style(theme::body())
                .render(Rect::new(directory.x, y, directory.width, 1), frame);
        }
    }
}

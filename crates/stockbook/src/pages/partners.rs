#![forbid(unsafe_code)]

//! Supplier and customer records.

use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;

use crate::i18n::Localizer;
use crate::routes::PageId;

use super::Page;

#[derive(Debug, Default)]
pub struct Partners;

impl Page for Partners {
    fn view(&self, store: &Localizer, frame: &mut Frame, area: Rect) {
        super::render_placeholder(store, PageId::Partners, frame, area);
    }
}

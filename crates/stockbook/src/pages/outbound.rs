#![forbid(unsafe_code)]

//! Sales outbound stock movements.

use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;

use crate::i18n::Localizer;
use crate::routes::PageId;

use super::Page;

#[derive(Debug, Default)]
pub struct Outbound;

impl Page for Outbound {
    fn view(&self, store: &Localizer, frame: &mut Frame, area: Rect) {
        super::render_placeholder(store, PageId::Outbound, frame, area);
    }
}

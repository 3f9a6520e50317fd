#![forbid(unsafe_code)]

//! Supplier payables ledger.

use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;

use crate::i18n::Localizer;
use crate::routes::PageId;

use super::Page;

#[derive(Debug, Default)]
pub struct Payable;

impl Page for Payable {
    fn view(&self, store: &Localizer, frame: &mut Frame, area: Rect) {
        super::render_placeholder(store, PageId::Payable, frame, area);
    }
}

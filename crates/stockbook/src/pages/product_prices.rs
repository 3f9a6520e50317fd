#![forbid(unsafe_code)]

//! Purchase and sale price maintenance.

use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;

use crate::i18n::Localizer;
use crate::routes::PageId;

use super::Page;

#[derive(Debug, Default)]
pub struct ProductPrices;

impl Page for ProductPrices {
    fn view(&self, store: &Localizer, frame: &mut Frame, area: Rect) {
        super::render_placeholder(store, PageId::ProductPrices, frame, area);
    }
}

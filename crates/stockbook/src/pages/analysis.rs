#![forbid(unsafe_code)]

//! Business analysis.

use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;

use crate::i18n::Localizer;
use crate::routes::PageId;

use super::Page;

#[derive(Debug, Default)]
pub struct Analysis;

impl Page for Analysis {
    fn view(&self, store: &Localizer, frame: &mut Frame, area: Rect) {
        super::render_placeholder(store, PageId::Analysis, frame, area);
    }
}

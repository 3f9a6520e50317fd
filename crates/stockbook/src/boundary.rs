#![forbid(unsafe_code)]

//! Error boundary for the routed content area.
//!
//! The boundary is a wrapper that renders either its content or a
//! static fallback, driven by an explicit two-state status value. A
//! panic raised while the content renders moves the status from
//! `Normal` to `Failed`; `Failed` is terminal for the boundary's
//! lifetime and only a full shell reload (which rebuilds the boundary)
//! leaves it. Exactly one diagnostic is logged per fault, at the
//! transition.
//!
//! Status lives in a `RefCell` because rendering happens through
//! `&self` in the single-threaded UI loop; the fault must be recorded
//! the moment it is caught so later frames skip the broken content
//! entirely instead of re-running it.

use std::any::Any;
use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};

use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_text::WrapMode;
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;
use tracing::error;

use crate::i18n::Localizer;
use crate::theme;

/// Boundary state machine: render content, or render the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoundaryStatus {
    /// Content renders normally.
    #[default]
    Normal,
    /// A descendant render panicked; only the fallback renders now.
    Failed {
        /// Captured panic message.
        message: String,
    },
}

/// Wraps the entire routed content region.
#[derive(Debug, Default)]
pub struct PageBoundary {
    status: RefCell<BoundaryStatus>,
}

impl PageBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the boundary has tripped.
    pub fn has_failed(&self) -> bool {
        matches!(&*self.status.borrow(), BoundaryStatus::Failed { .. })
    }

    /// Captured fault message, if any.
    pub fn fault_message(&self) -> Option<String> {
        match &*self.status.borrow() {
            BoundaryStatus::Failed { message } => Some(message.clone()),
            BoundaryStatus::Normal => None,
        }
    }

    /// Render `content` into `area`, or the fallback if the boundary
    /// has tripped. A panic inside `content` is caught here and never
    /// reaches the runtime.
    pub fn render<F>(
        &self,
        store: &Localizer,
        page_key: &'static str,
        frame: &mut Frame,
        area: Rect,
        content: F,
    ) where
        F: FnOnce(&mut Frame),
    {
        if self.has_failed() {
            self.render_fallback(store, frame, area);
            return;
        }

        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| content(frame))) {
            let message = panic_message(payload.as_ref());
            error!(page = page_key, %message, "page render fault captured");
            *self.status.borrow_mut() = BoundaryStatus::Failed { message };
            self.render_fallback(store, frame, area);
        }
    }

    fn render_fallback(&self, store: &Localizer, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }

        // The content may have partially rendered before panicking;
        // repaint the whole region first.
        let blank = " ".repeat(area.width as usize);
        for y in area.y..area.y + area.height {
            Paragraph::new(blank.as_str())
                .style(theme::fallback_base())
                .render(Rect::new(area.x, y, area.width, 1), frame);
        }

        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::fallback_title())
            .title(store.text("error.title"))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.is_empty() {
            return;
        }

        let rows = Flex::vertical()
            .constraints([Constraint::Min(2), Constraint::Fixed(1), Constraint::Fixed(1)])
            .split(inner);

        Paragraph::new(store.text("error.body"))
            .style(theme::body())
            .wrap(WrapMode::Word)
            .render(rows[0], frame);

        if let Some(message) = self.fault_message() {
            Paragraph::new(store.format("error.detail", &[("message", &message)]))
                .style(theme::muted())
                .render(rows[1], frame);
        }

        Paragraph::new(store.text("error.reload"))
            .style(theme::fallback_hint())
            .alignment(Alignment::Center)
            .render(rows[2], frame);
    }
}

/// Human-readable text from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

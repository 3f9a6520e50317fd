#![forbid(unsafe_code)]

//! Main application model, message routing, and shell chrome.
//!
//! [`AppModel`] implements the Elm architecture via [`Model`]: every
//! state change goes through `update()`, and `view()` composes the
//! header menu, the routed content area behind its error boundary, and
//! the footer locale bar. The shell starts no subscriptions of its
//! own; all transitions are driven by terminal events.

use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::{Cmd, Model};
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use tracing::{info, warn};

use crate::boundary::PageBoundary;
use crate::chrome;
use crate::i18n::{Locale, Localizer};
use crate::pages::{self, Page};
use crate::routes::{self, PageId};
use crate::theme;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Holds the state of every business page.
#[derive(Default)]
pub struct Pages {
    overview: pages::overview::Overview,
    inbound: pages::inbound::Inbound,
    outbound: pages::outbound::Outbound,
    stock: pages::stock::Stock,
    partners: pages::partners::Partners,
    products: pages::products::Products,
    product_prices: pages::product_prices::ProductPrices,
    receivable: pages::receivable::Receivable,
    payable: pages::payable::Payable,
    analysis: pages::analysis::Analysis,
    report: pages::report::Report,
}

impl Pages {
    /// Forward an event to the page identified by `id`.
    pub fn update(&mut self, id: PageId, event: &Event) {
        match id {
            PageId::Overview => self.overview.update(event),
            PageId::Inbound => self.inbound.update(event),
            PageId::Outbound => self.outbound.update(event),
            PageId::Stock => self.stock.update(event),
            PageId::Partners => self.partners.update(event),
            PageId::Products => self.products.update(event),
            PageId::ProductPrices => self.product_prices.update(event),
            PageId::Receivable => self.receivable.update(event),
            PageId::Payable => self.payable.update(event),
            PageId::Analysis => self.analysis.update(event),
            PageId::Report => self.report.update(event),
        }
    }

    /// Render the page identified by `id` into the given area.
    ///
    /// Panic isolation is the boundary's job, not this dispatcher's.
    pub fn view(&self, store: &Localizer, id: PageId, frame: &mut Frame, area: Rect) {
        match id {
            PageId::Overview => self.overview.view(store, frame, area),
            PageId::Inbound => self.inbound.view(store, frame, area),
            PageId::Outbound => self.outbound.view(store, frame, area),
            PageId::Stock => self.stock.view(store, frame, area),
            PageId::Partners => self.partners.view(store, frame, area),
            PageId::Products => self.products.view(store, frame, area),
            PageId::ProductPrices => self.product_prices.view(store, frame, area),
            PageId::Receivable => self.receivable.view(store, frame, area),
            PageId::Payable => self.payable.view(store, frame, area),
            PageId::Analysis => self.analysis.view(store, frame, area),
            PageId::Report => self.report.view(store, frame, area),
        }
    }
}

// ---------------------------------------------------------------------------
// AppMsg
// ---------------------------------------------------------------------------

/// Top-level application message.
#[derive(Debug)]
pub enum AppMsg {
    /// Resolve a path through the route table and mount the result.
    Navigate(String),
    /// Switch directly to a page.
    SwitchPage(PageId),
    /// Advance to the next menu entry.
    NextPage,
    /// Go back to the previous menu entry.
    PrevPage,
    /// Cycle the display language.
    CycleLocale,
    /// Select a specific display language.
    SetLocale(Locale),
    /// A raw terminal event forwarded to the current page.
    PageEvent(Event),
    /// Discard and rebuild the whole shell.
    Reload,
    /// Terminal resize.
    Resize {
        /// New terminal width.
        width: u16,
        /// New terminal height.
        height: u16,
    },
    /// Quit the application.
    Quit,
}

impl From<Event> for AppMsg {
    fn from(event: Event) -> Self {
        // Global key bindings are checked first.
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = &event
        {
            match (*code, *modifiers) {
                (KeyCode::Char('q'), Modifiers::NONE) => return Self::Quit,
                (KeyCode::Char('c'), Modifiers::CTRL) => return Self::Quit,
                (KeyCode::Tab, Modifiers::NONE) => return Self::NextPage,
                (KeyCode::BackTab, _) => return Self::PrevPage,
                (KeyCode::Char('l'), Modifiers::NONE) => return Self::CycleLocale,
                (KeyCode::Char(ch @ '0'..='9'), Modifiers::NONE) => {
                    if let Some(page) = PageId::from_number_key(ch) {
                        return Self::SwitchPage(page);
                    }
                }
                _ => {}
            }
        }

        if let Event::Resize { width, height } = event {
            return Self::Resize { width, height };
        }

        // Everything else goes to the current page ('r' included; the
        // reload path checks the boundary state in update()).
        Self::PageEvent(event)
    }
}

// ---------------------------------------------------------------------------
// AppModel
// ---------------------------------------------------------------------------

/// Top-level shell state.
pub struct AppModel {
    /// Injected locale store (built once in `main`).
    pub store: Localizer,
    /// Currently mounted page.
    pub current: PageId,
    /// Per-page state storage.
    pub pages: Pages,
    /// Error boundary around the routed content area.
    pub boundary: PageBoundary,
    /// Page forced to panic during render (deterministic test knob).
    pub inject_fault: Option<PageId>,
    /// Current terminal width.
    pub terminal_width: u16,
    /// Current terminal height.
    pub terminal_height: u16,
}

impl AppModel {
    /// Create the shell around an injected locale store.
    pub fn new(store: Localizer) -> Self {
        Self {
            store,
            current: routes::DEFAULT_PAGE,
            pages: Pages::default(),
            boundary: PageBoundary::new(),
            inject_fault: None,
            terminal_width: 0,
            terminal_height: 0,
        }
    }

    /// Full shell reload: discard and rebuild pages and boundary.
    ///
    /// The locale store survives (it persists itself if configured to),
    /// and the current route is re-mounted, as a browser reload would.
    fn reload(&mut self) {
        info!(page = self.current.menu_key(), "shell reload");
        let mut fresh = Self::new(self.store.clone());
        fresh.current = self.current;
        fresh.inject_fault = self.inject_fault;
        fresh.terminal_width = self.terminal_width;
        fresh.terminal_height = self.terminal_height;
        *self = fresh;
    }
}

impl Model for AppModel {
    type Message = AppMsg;

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
        match msg {
            AppMsg::Quit => Cmd::Quit,

            AppMsg::Navigate(path) => {
                let resolved = routes::resolve(&path);
                if resolved.redirected {
                    // The bare root is an enumerated redirect, not a
                    // routing mistake.
                    if path == "/" {
                        info!(to = resolved.page.path(), "root route, mounting default section");
                    } else {
                        warn!(
                            requested = %path,
                            to = resolved.page.path(),
                            "unmapped route, redirecting"
                        );
                    }
                }
                self.current = resolved.page;
                Cmd::None
            }

            AppMsg::SwitchPage(page) => {
                self.current = page;
                Cmd::None
            }

            AppMsg::NextPage => {
                self.current = self.current.next();
                Cmd::None
            }

            AppMsg::PrevPage => {
                self.current = self.current.prev();
                Cmd::None
            }

            AppMsg::CycleLocale => {
                self.store.set_locale(self.store.locale().next());
                Cmd::None
            }

            AppMsg::SetLocale(locale) => {
                self.store.set_locale(locale);
                Cmd::None
            }

            AppMsg::Reload => {
                if self.boundary.has_failed() {
                    self.reload();
                }
                Cmd::None
            }

            AppMsg::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                Cmd::None
            }

            AppMsg::PageEvent(event) => {
                // While the boundary shows the fallback, 'r' is the one
                // action it offers.
                if self.boundary.has_failed()
                    && let Event::Key(KeyEvent {
                        code: KeyCode::Char('r' | 'R'),
                        kind: KeyEventKind::Press,
                        ..
                    }) = &event
                {
                    self.reload();
                    return Cmd::None;
                }
                self.pages.update(self.current, &event);
                Cmd::None
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = Rect::from_size(frame.buffer.width(), frame.buffer.height());

        // Header menu (1 row) + content + footer locale bar (1 row).
        let chunks = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Min(1),
                Constraint::Fixed(1),
            ])
            .split(area);

        chrome::render_nav_bar(&self.store, self.current, frame, chunks[0]);

        let content_block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.store.text(self.current.label_key()))
            .title_alignment(Alignment::Center)
            .style(theme::content_border());
        let inner = content_block.inner(chunks[1]);
        content_block.render(chunks[1], frame);

        let faulty = self.inject_fault == Some(self.current);
        self.boundary.render(
            &self.store,
            self.current.menu_key(),
            frame,
            inner,
            |frame| {
                if faulty {
                    panic!("injected render fault");
                }
                self.pages.view(&self.store, self.current, frame, inner);
            },
        );

        chrome::render_footer(&self.store, frame, chunks[2]);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ftui_render::grapheme_pool::GraphemePool;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Level, Metadata, span};

    fn model() -> AppModel {
        AppModel::new(Localizer::new())
    }

    struct LevelCounter {
        level: Level,
        hits: Arc<AtomicUsize>,
    }

    impl tracing::Subscriber for LevelCounter {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }
        fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}
        fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}
        fn event(&self, event: &tracing::Event<'_>) {
            if *event.metadata().level() == self.level {
                self.hits.fetch_add(1, Ordering::Relaxed);
            }
        }
        fn enter(&self, _span: &span::Id) {}
        fn exit(&self, _span: &span::Id) {}
    }

    fn count_events(level: Level, f: impl FnOnce()) -> usize {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = LevelCounter {
            level,
            hits: Arc::clone(&hits),
        };
        tracing::subscriber::with_default(counter, f);
        hits.load(Ordering::Relaxed)
    }

    fn press(ch: char) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        })
    }

    #[test]
    fn starts_on_overview() {
        assert_eq!(model().current, PageId::Overview);
    }

    #[test]
    fn switch_page_changes_current() {
        let mut app = model();
        app.update(AppMsg::SwitchPage(PageId::Partners));
        assert_eq!(app.current, PageId::Partners);
    }

    #[test]
    fn next_prev_wrap_through_menu() {
        let mut app = model();
        for i in 1..PageId::ALL.len() {
            app.update(AppMsg::NextPage);
            assert_eq!(app.current, PageId::ALL[i]);
        }
        app.update(AppMsg::NextPage);
        assert_eq!(app.current, PageId::Overview);

        app.update(AppMsg::PrevPage);
        assert_eq!(app.current, PageId::Report);
    }

    #[test]
    fn navigate_mapped_path() {
        let mut app = model();
        app.update(AppMsg::Navigate("/partners".into()));
        assert_eq!(app.current, PageId::Partners);
    }

    #[test]
    fn navigate_unknown_path_redirects() {
        let mut app = model();
        app.update(AppMsg::SwitchPage(PageId::Stock));
        app.update(AppMsg::Navigate("/unknown-path".into()));
        assert_eq!(app.current, PageId::Overview);
    }

    #[test]
    fn navigate_root_redirects() {
        let mut app = model();
        app.update(AppMsg::Navigate("/".into()));
        assert_eq!(app.current, PageId::Overview);
    }

    /// The bare root is an expected redirect and must not be logged as
    /// a routing problem; unknown paths are.
    #[test]
    fn root_redirect_logs_no_warning() {
        let mut app = model();

        let warns = count_events(Level::WARN, || {
            app.update(AppMsg::Navigate("/".into()));
        });
        assert_eq!(warns, 0);
        assert_eq!(app.current, PageId::Overview);

        let warns = count_events(Level::WARN, || {
            app.update(AppMsg::Navigate("/no-such-section".into()));
        });
        assert_eq!(warns, 1);
    }

    #[test]
    fn locale_change_leaves_route_and_boundary_alone() {
        let mut app = model();
        app.update(AppMsg::SwitchPage(PageId::Payable));
        for &locale in Locale::ALL {
            app.update(AppMsg::SetLocale(locale));
            assert_eq!(app.store.locale(), locale);
            assert_eq!(app.current, PageId::Payable);
            assert!(!app.boundary.has_failed());
        }
    }

    #[test]
    fn cycle_locale_wraps() {
        let mut app = model();
        assert_eq!(app.store.locale(), Locale::Zh);
        app.update(AppMsg::CycleLocale);
        assert_eq!(app.store.locale(), Locale::En);
        app.update(AppMsg::CycleLocale);
        assert_eq!(app.store.locale(), Locale::Ko);
        app.update(AppMsg::CycleLocale);
        assert_eq!(app.store.locale(), Locale::Zh);
    }

    #[test]
    fn reload_is_a_no_op_while_healthy() {
        let mut app = model();
        app.update(AppMsg::SwitchPage(PageId::Report));
        app.update(AppMsg::SetLocale(Locale::En));
        app.update(AppMsg::Reload);
        assert_eq!(app.current, PageId::Report);
        assert_eq!(app.store.locale(), Locale::En);
        assert!(!app.boundary.has_failed());
    }

    #[test]
    fn resize_updates_dimensions() {
        let mut app = model();
        app.update(AppMsg::Resize {
            width: 132,
            height: 43,
        });
        assert_eq!(app.terminal_width, 132);
        assert_eq!(app.terminal_height, 43);
    }

    #[test]
    fn quit_returns_quit_cmd() {
        let mut app = model();
        assert!(matches!(app.update(AppMsg::Quit), Cmd::Quit));
    }

    #[test]
    fn event_conversion_global_keys() {
        assert!(matches!(AppMsg::from(press('q')), AppMsg::Quit));
        assert!(matches!(
            AppMsg::from(Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: Modifiers::CTRL,
                kind: KeyEventKind::Press,
            })),
            AppMsg::Quit
        ));
        assert!(matches!(
            AppMsg::from(Event::Key(KeyEvent {
                code: KeyCode::Tab,
                modifiers: Modifiers::NONE,
                kind: KeyEventKind::Press,
            })),
            AppMsg::NextPage
        ));
        assert!(matches!(
            AppMsg::from(Event::Key(KeyEvent {
                code: KeyCode::BackTab,
                modifiers: Modifiers::SHIFT,
                kind: KeyEventKind::Press,
            })),
            AppMsg::PrevPage
        ));
        assert!(matches!(AppMsg::from(press('l')), AppMsg::CycleLocale));
        assert!(matches!(
            AppMsg::from(press('5')),
            AppMsg::SwitchPage(PageId::Partners)
        ));
        // 'r' is not global; it belongs to the current page unless the
        // boundary has tripped.
        assert!(matches!(AppMsg::from(press('r')), AppMsg::PageEvent(_)));
    }

    #[test]
    fn event_conversion_resize() {
        assert!(matches!(
            AppMsg::from(Event::Resize {
                width: 80,
                height: 24
            }),
            AppMsg::Resize {
                width: 80,
                height: 24
            }
        ));
    }

    // -----------------------------------------------------------------------
    // Rendered integration tests
    // -----------------------------------------------------------------------

    /// Every page renders through the full shell without tripping the
    /// boundary.
    #[test]
    fn integration_all_pages_render() {
        let mut app = model();
        for &page in PageId::ALL {
            app.update(AppMsg::SwitchPage(page));
            let mut pool = GraphemePool::new();
            let mut frame = Frame::new(120, 40, &mut pool);
            app.view(&mut frame);
            assert!(!app.boundary.has_failed(), "{:?} tripped", page);
        }
    }

    /// Tiny terminals degrade without panicking.
    #[test]
    fn integration_small_terminal() {
        let mut app = model();
        for &page in PageId::ALL {
            app.update(AppMsg::SwitchPage(page));
            let mut pool = GraphemePool::new();
            let mut frame = Frame::new(24, 5, &mut pool);
            app.view(&mut frame);
        }
    }

    /// An injected fault trips the boundary; reload restores it until
    /// the still-broken page renders again.
    #[test]
    fn integration_fault_and_reload() {
        let mut app = model();
        app.inject_fault = Some(PageId::Stock);
        app.update(AppMsg::SetLocale(Locale::En));
        app.update(AppMsg::Navigate("/stock".into()));

        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(100, 30, &mut pool);
        app.view(&mut frame);
        assert!(app.boundary.has_failed());
        assert_eq!(
            app.boundary.fault_message().as_deref(),
            Some("injected render fault")
        );

        // Remove the injection, then reload via the fallback's key.
        app.inject_fault = None;
        app.update(AppMsg::PageEvent(press('r')));
        assert!(!app.boundary.has_failed());
        assert_eq!(app.current, PageId::Stock);
        assert_eq!(app.store.locale(), Locale::En);

        let mut frame = Frame::new(100, 30, &mut pool);
        app.view(&mut frame);
        assert!(!app.boundary.has_failed());
    }

    /// With the injection left in place a reload fails again on the
    /// next render, like a browser reloading a persistently broken
    /// page.
    #[test]
    fn integration_persistent_fault_refails_after_reload() {
        let mut app = model();
        app.inject_fault = Some(PageId::Analysis);
        app.update(AppMsg::Navigate("/analysis".into()));

        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(100, 30, &mut pool);
        app.view(&mut frame);
        assert!(app.boundary.has_failed());

        app.update(AppMsg::PageEvent(press('r')));
        assert!(!app.boundary.has_failed());

        let mut frame = Frame::new(100, 30, &mut pool);
        app.view(&mut frame);
        assert!(app.boundary.has_failed());
    }
}

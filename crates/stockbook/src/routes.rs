#![forbid(unsafe_code)]

//! Route table for the shell.
//!
//! Maps each top-level path string to exactly one business page and
//! derives the active menu key from the current path. Resolution is an
//! exact string match against a fixed table; the root path and any
//! unrecognized path fall back to [`PageId::Overview`] as a redirect.
//! There is no prefix matching and no case folding.

/// Identifies one business section of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    /// Landing page with key figures.
    Overview,
    /// Purchase inbound stock movements.
    Inbound,
    /// Sales outbound stock movements.
    Outbound,
    /// On-hand stock balances.
    Stock,
    /// Supplier and customer records.
    Partners,
    /// Product catalog.
    Products,
    /// Purchase and sale price maintenance.
    ProductPrices,
    /// Customer receivables ledger.
    Receivable,
    /// Supplier payables ledger.
    Payable,
    /// Business analysis.
    Analysis,
    /// Aggregated reports.
    Report,
}

/// The section every unmapped path lands on.
pub const DEFAULT_PAGE: PageId = PageId::Overview;

impl PageId {
    /// All pages in menu display order.
    pub const ALL: &[PageId] = &[
        Self::Overview,
        Self::Inbound,
        Self::Outbound,
        Self::Stock,
        Self::Partners,
        Self::Products,
        Self::ProductPrices,
        Self::Receivable,
        Self::Payable,
        Self::Analysis,
        Self::Report,
    ];

    /// Canonical path for this page.
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/overview",
            Self::Inbound => "/inbound",
            Self::Outbound => "/outbound",
            Self::Stock => "/stock",
            Self::Partners => "/partners",
            Self::Products => "/products",
            Self::ProductPrices => "/product-prices",
            Self::Receivable => "/receivable",
            Self::Payable => "/payable",
            Self::Analysis => "/analysis",
            Self::Report => "/report",
        }
    }

    /// Key used to mark the active navigation entry.
    pub fn menu_key(self) -> &'static str {
        // The menu key is the path without its leading slash.
        &self.path()[1..]
    }

    /// Translation key for the navigation label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Overview => "nav.overview",
            Self::Inbound => "nav.inbound",
            Self::Outbound => "nav.outbound",
            Self::Stock => "nav.stock",
            Self::Partners => "nav.partners",
            Self::Products => "nav.products",
            Self::ProductPrices => "nav.productPrices",
            Self::Receivable => "nav.receivable",
            Self::Payable => "nav.payable",
            Self::Analysis => "nav.analysis",
            Self::Report => "nav.report",
        }
    }

    /// Translation key for the one-line section summary.
    pub fn summary_key(self) -> &'static str {
        match self {
            Self::Overview => "page.overview.summary",
            Self::Inbound => "page.inbound.summary",
            Self::Outbound => "page.outbound.summary",
            Self::Stock => "page.stock.summary",
            Self::Partners => "page.partners.summary",
            Self::Products => "page.products.summary",
            Self::ProductPrices => "page.productPrices.summary",
            Self::Receivable => "page.receivable.summary",
            Self::Payable => "page.payable.summary",
            Self::Analysis => "page.analysis.summary",
            Self::Report => "page.report.summary",
        }
    }

    /// Exact-match lookup of a path in the route table.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|page| page.path() == path)
    }

    /// 0-based position in the menu order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&page| page == self).unwrap_or(0)
    }

    /// Next page in menu order (wraps around).
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page in menu order (wraps around).
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Map a number key to a page: '1'..='9' -> first 9, '0' -> 10th.
    pub fn from_number_key(ch: char) -> Option<Self> {
        let idx = match ch {
            '1'..='9' => (ch as usize) - ('1' as usize),
            '0' => 9,
            _ => return None,
        };
        Self::ALL.get(idx).copied()
    }
}

/// Outcome of resolving a path through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// The page that will be mounted.
    pub page: PageId,
    /// Whether the path was unmapped and redirected to the default.
    pub redirected: bool,
}

/// Resolve a path to exactly one page.
///
/// Mapped paths resolve directly. The root path and every unmapped path
/// resolve to [`DEFAULT_PAGE`] and are reported as redirects.
pub fn resolve(path: &str) -> Resolved {
    match PageId::from_path(path) {
        Some(page) => Resolved {
            page,
            redirected: false,
        },
        None => Resolved {
            page: DEFAULT_PAGE,
            redirected: true,
        },
    }
}

/// Active menu key for a path. Pure function, recomputed per render.
pub fn active_menu_key(path: &str) -> &'static str {
    resolve(path).page.menu_key()
}

#![forbid(unsafe_code)]

//! Locale store for the shell.
//!
//! The store is built once in `main` and injected into the composition
//! root; the shell consumes exactly three capabilities from it: the
//! current locale, a synchronous locale change, and translation lookup
//! by key. Strings live in an [`ftui_i18n::StringCatalog`] with a
//! fallback chain ending in `zh`, the application's authored language.

use std::path::PathBuf;

use ftui_i18n::{LocaleStrings, StringCatalog};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Display language. Closed set; the selector only emits these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// Chinese (default).
    Zh,
    /// English.
    En,
    /// Korean.
    Ko,
}

impl Locale {
    /// All locales in selector display order.
    pub const ALL: &[Locale] = &[Self::Zh, Self::En, Self::Ko];

    /// BCP-47-style tag used as the catalog locale id.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    /// Parse a tag; anything outside the closed set is rejected.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "zh" => Some(Self::Zh),
            "en" => Some(Self::En),
            "ko" => Some(Self::Ko),
            _ => None,
        }
    }

    /// Language name in its own language, for the footer selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Zh => "中文",
            Self::En => "English",
            Self::Ko => "한국어",
        }
    }

    /// Next locale in selector order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Saved locale preference, written when a preference file is
/// configured. The store persists itself; the shell never does.
#[derive(Debug, Serialize, Deserialize)]
struct LocalePreference {
    locale: String,
}

/// Translation store handed to the composition root.
#[derive(Debug, Clone)]
pub struct Localizer {
    catalog: StringCatalog,
    current: Locale,
    prefs_file: Option<PathBuf>,
}

impl Localizer {
    /// Build the store with the built-in catalog and the default locale.
    pub fn new() -> Self {
        Self {
            catalog: build_catalog(),
            current: Locale::Zh,
            prefs_file: None,
        }
    }

    /// Build the store with a preference file.
    ///
    /// A readable saved preference overrides the default locale;
    /// a missing or malformed file is ignored with a warning.
    pub fn with_prefs_file(path: PathBuf) -> Self {
        let mut store = Self::new();
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<LocalePreference>(&raw) {
                Ok(pref) => match Locale::from_tag(&pref.locale) {
                    Some(locale) => store.current = locale,
                    None => warn!(tag = %pref.locale, "saved locale outside the supported set"),
                },
                Err(err) => warn!(%err, path = %path.display(), "unreadable locale preference"),
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => warn!(%err, path = %path.display(), "failed to read locale preference"),
        }
        store.prefs_file = Some(path);
        store
    }

    /// Currently selected locale.
    pub fn locale(&self) -> Locale {
        self.current
    }

    /// Switch the display language. Takes effect on the next render.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale == self.current {
            return;
        }
        self.current = locale;
        info!(locale = locale.as_tag(), "locale changed");
        self.save_preference();
    }

    /// Look up a translation for the current locale.
    ///
    /// A key missing from every locale renders as the key itself, so a
    /// catalog gap is visible instead of blanking the UI.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.get(self.current.as_tag(), key).unwrap_or(key)
    }

    /// Look up a translation and interpolate `{name}` arguments.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.catalog
            .format(self.current.as_tag(), key, args)
            .unwrap_or_else(|| key.to_string())
    }

    /// Catalog access for coverage checks.
    #[cfg(test)]
    pub(crate) fn catalog(&self) -> &StringCatalog {
        &self.catalog
    }

    fn save_preference(&self) {
        let Some(path) = &self.prefs_file else {
            return;
        };
        let pref = LocalePreference {
            locale: self.current.as_tag().to_string(),
        };
        let result = serde_json::to_string_pretty(&pref)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(path, json));
        if let Err(err) = result {
            warn!(%err, path = %path.display(), "failed to save locale preference");
        }
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full three-locale catalog.
fn build_catalog() -> StringCatalog {
    let mut catalog = StringCatalog::new();

    let mut zh = LocaleStrings::new();
    zh.insert("app.title", "进销存管理");
    zh.insert("nav.overview", "总览");
    zh.insert("nav.inbound", "入库");
    zh.insert("nav.outbound", "出库");
    zh.insert("nav.stock", "库存");
    zh.insert("nav.partners", "往来单位");
    zh.insert("nav.products", "产品");
    zh.insert("nav.productPrices", "产品价格");
    zh.insert("nav.receivable", "应收");
    zh.insert("nav.payable", "应付");
    zh.insert("nav.analysis", "分析");
    zh.insert("nav.report", "报表");
    zh.insert("common.language", "语言");
    zh.insert("common.chinese", "中文");
    zh.insert("common.english", "英文");
    zh.insert("common.korean", "韩文");
    zh.insert("common.localeHint", "按 l 切换语言");
    zh.insert("error.title", "页面加载出错");
    zh.insert(
        "error.body",
        "页面组件渲染时发生错误，请重新加载重试。如果问题持续，请检查后端服务是否正常运行。",
    );
    zh.insert("error.detail", "错误信息: {message}");
    zh.insert("error.reload", "按 r 重新加载");
    zh.insert("page.placeholder", "页面内容由业务模块提供，当前为占位界面。");
    zh.insert("page.overview.summary", "关键指标与最近单据一览");
    zh.insert("page.inbound.summary", "采购入库单登记与查询");
    zh.insert("page.outbound.summary", "销售出库单登记与查询");
    zh.insert("page.stock.summary", "各仓库存数量与结存");
    zh.insert("page.partners.summary", "供应商与客户资料");
    zh.insert("page.products.summary", "产品档案与规格");
    zh.insert("page.productPrices.summary", "产品进销价格维护");
    zh.insert("page.receivable.summary", "客户应收账款");
    zh.insert("page.payable.summary", "供应商应付账款");
    zh.insert("page.analysis.summary", "经营数据分析");
    zh.insert("page.report.summary", "进销存汇总报表");
    catalog.add_locale("zh", zh);

    let mut en = LocaleStrings::new();
    en.insert("app.title", "Stockbook");
    en.insert("nav.overview", "Overview");
    en.insert("nav.inbound", "Inbound");
    en.insert("nav.outbound", "Outbound");
    en.insert("nav.stock", "Stock");
    en.insert("nav.partners", "Partners");
    en.insert("nav.products", "Products");
    en.insert("nav.productPrices", "Product Prices");
    en.insert("nav.receivable", "Receivable");
    en.insert("nav.payable", "Payable");
    en.insert("nav.analysis", "Analysis");
    en.insert("nav.report", "Reports");
    en.insert("common.language", "Language");
    en.insert("common.chinese", "Chinese");
    en.insert("common.english", "English");
    en.insert("common.korean", "Korean");
    en.insert("common.localeHint", "press l to switch language");
    en.insert("error.title", "Page failed to load");
    en.insert(
        "error.body",
        "The page component failed while rendering. Reload and try again. \
         If the problem persists, check that the backend service is running.",
    );
    en.insert("error.detail", "Fault: {message}");
    en.insert("error.reload", "press r to reload");
    en.insert(
        "page.placeholder",
        "Page content is provided by the business module; this is a placeholder view.",
    );
    en.insert(
        "page.overview.summary",
        "Key figures and recent documents at a glance",
    );
    en.insert(
        "page.inbound.summary",
        "Register and browse purchase inbound orders",
    );
    en.insert(
        "page.outbound.summary",
        "Register and browse sales outbound orders",
    );
    en.insert(
        "page.stock.summary",
        "On-hand quantities and balances per warehouse",
    );
    en.insert("page.partners.summary", "Supplier and customer records");
    en.insert("page.products.summary", "Product catalog and specifications");
    en.insert(
        "page.productPrices.summary",
        "Maintain purchase and sale prices",
    );
    en.insert("page.receivable.summary", "Outstanding customer receivables");
    en.insert("page.payable.summary", "Outstanding supplier payables");
    en.insert("page.analysis.summary", "Business performance analysis");
    en.insert(
        "page.report.summary",
        "Aggregated inventory and trading reports",
    );
    catalog.add_locale("en", en);

    let mut ko = LocaleStrings::new();
    ko.insert("app.title", "재고 관리");
    ko.insert("nav.overview", "개요");
    ko.insert("nav.inbound", "입고");
    ko.insert("nav.outbound", "출고");
    ko.insert("nav.stock", "재고");
    ko.insert("nav.partners", "거래처");
    ko.insert("nav.products", "제품");
    ko.insert("nav.productPrices", "제품 가격");
    ko.insert("nav.receivable", "미수금");
    ko.insert("nav.payable", "미지급금");
    ko.insert("nav.analysis", "분석");
    ko.insert("nav.report", "보고서");
    ko.insert("common.language", "언어");
    ko.insert("common.chinese", "중국어");
    ko.insert("common.english", "영어");
    ko.insert("common.korean", "한국어");
    ko.insert("common.localeHint", "l 키로 언어 전환");
    ko.insert("error.title", "페이지 로드 오류");
    ko.insert(
        "error.body",
        "페이지 구성 요소를 렌더링하는 중 오류가 발생했습니다. 다시 로드해 주세요. \
         문제가 계속되면 백엔드 서비스 상태를 확인하세요.",
    );
    ko.insert("error.detail", "오류: {message}");
    ko.insert("error.reload", "r 키를 눌러 다시 로드");
    ko.insert(
        "page.placeholder",
        "페이지 내용은 업무 모듈에서 제공됩니다. 현재는 자리 표시 화면입니다.",
    );
    ko.insert("page.overview.summary", "주요 지표와 최근 전표 요약");
    ko.insert("page.inbound.summary", "구매 입고 전표 등록 및 조회");
    ko.insert("page.outbound.summary", "판매 출고 전표 등록 및 조회");
    ko.insert("page.stock.summary", "창고별 재고 수량과 잔량");
    ko.insert("page.partners.summary", "공급업체 및 고객 정보");
    ko.insert("page.products.summary", "제품 목록과 규격");
    ko.insert("page.productPrices.summary", "제품 구매/판매 가격 관리");
    ko.insert("page.receivable.summary", "고객 미수금 현황");
    ko.insert("page.payable.summary", "공급업체 미지급금 현황");
    ko.insert("page.analysis.summary", "경영 데이터 분석");
    ko.insert("page.report.summary", "재고 및 거래 종합 보고서");
    catalog.add_locale("ko", ko);

    catalog.set_fallback_chain(vec!["zh".into()]);
    catalog
}

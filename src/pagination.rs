//! Sort-then-paginate pipeline shared by the list endpoints.
//!
//! A list request names a sort key, a page and a page size. The key is looked
//! up in a per-resource allow-list and silently falls back to the resource
//! default when it is unknown; page arithmetic is clamped so the resulting
//! offset/limit pair is always well defined.

use serde::Deserialize;

/// Sort key used when the request does not name one.
pub const DEFAULT_SORT_BY: &str = "LastName";
/// Page size used when the request does not name one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Upper bound applied to page sizes unless configured otherwise.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Named ascending orderings a resource can be listed by.
///
/// `ALLOWED` pairs the lower-case wire name with the key. Anything that does
/// not match, including the empty string, resolves to `Self::default()`.
pub trait SortKey: Copy + Default + std::fmt::Debug + PartialEq + 'static {
    const ALLOWED: &'static [(&'static str, Self)];

    /// Case-insensitive lookup with fallback to the default key.
    fn parse(raw: &str) -> Self {
        Self::ALLOWED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(raw))
            .map(|(_, key)| *key)
            .unwrap_or_default()
    }
}

/// Page size bounds applied to incoming list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Normalized skip/take window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    /// Clamps `page` to at least 1 and `per_page` into `1..=max_page_size`.
    pub fn new(page: i64, per_page: i64, limits: PageLimits) -> Self {
        let max = limits.max_page_size.max(1);
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, max),
        }
    }

    /// Rows skipped before the page starts.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Rows returned at most.
    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

/// Raw list parameters as they arrive in the query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub sort_by: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Fully resolved list request for a resource sorted by `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery<K: SortKey> {
    pub sort: K,
    pub pagination: Pagination,
}

impl<K: SortKey> ListQuery<K> {
    pub fn new(sort: K, pagination: Pagination) -> Self {
        Self { sort, pagination }
    }

    /// Resolves wire parameters, applying defaults, fallback and clamping.
    pub fn from_params(params: &ListParams, limits: PageLimits) -> Self {
        let sort = K::parse(params.sort_by.as_deref().unwrap_or(DEFAULT_SORT_BY));
        let pagination = Pagination::new(
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(limits.default_page_size),
            limits,
        );
        Self { sort, pagination }
    }
}

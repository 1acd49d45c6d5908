//! Search parameters and paginated search results

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 15;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("invalid sort direction: {other}")),
        }
    }
}

/// A filter term that can be blank. Blank terms disable filtering.
pub trait FilterTerm {
    fn is_blank(&self) -> bool;
}

impl FilterTerm for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl FilterTerm for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Loosely-typed search input, as it arrives from a transport layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParamsInput<F = String> {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<F>,
}

/// Normalized search parameters.
///
/// `page` and `per_page` are always at least 1; `sort_dir` is only set when
/// `sort` is.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams<F = String> {
    page: usize,
    per_page: usize,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<F: FilterTerm> SearchParams<F> {
    pub fn new(input: SearchParamsInput<F>) -> Self {
        let sort = input.sort.filter(|sort| !sort.is_empty());
        let sort_dir = sort.as_ref().map(|_| {
            input
                .sort_dir
                .as_deref()
                .and_then(|dir| dir.parse().ok())
                .unwrap_or(SortDirection::Asc)
        });

        Self {
            page: positive_or(input.page, DEFAULT_PAGE),
            per_page: positive_or(input.per_page, DEFAULT_PER_PAGE),
            sort,
            sort_dir,
            filter: input.filter.filter(|filter| !filter.is_blank()),
        }
    }
}

impl<F> SearchParams<F> {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }
}

impl<F: FilterTerm> Default for SearchParams<F> {
    fn default() -> Self {
        Self::new(SearchParamsInput {
            page: None,
            per_page: None,
            sort: None,
            sort_dir: None,
            filter: None,
        })
    }
}

/// Read a paging value sent as text. Integers and integral decimals such
/// as `"2.0"` parse; anything else yields `None` so the default applies.
pub fn parse_page_number(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .filter(|v| *v >= i64::MIN as f64 && *v <= i64::MAX as f64)
        .map(|v| v as i64)
}

fn positive_or(value: Option<i64>, default: usize) -> usize {
    value
        .filter(|v| *v > 0)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// One page of a search, plus the numbers a pager needs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<E> {
    pub items: Vec<E>,
    pub total: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub last_page: usize,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: usize, current_page: usize, per_page: usize) -> Self {
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: last_page(total, per_page),
        }
    }

    /// Convert the items while keeping the pagination numbers
    pub fn map<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

/// `ceil(total / per_page)`, never below 1 so an empty result still has a
/// page to stand on
pub fn last_page(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

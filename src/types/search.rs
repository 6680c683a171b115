//! Search request/response envelopes.
//!
//! All search endpoints take the same envelope: a `filter` whose set fields
//! must all match, a list of `sort` keys, and `page`/`size` for paging. The
//! client passes paging through; it never walks pages on its own.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Items per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest<F> {
    pub filter: F,
    #[serde(default)]
    pub sort: Vec<SortField>,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
}

impl<F> SearchRequest<F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            sort: Vec::new(),
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.push(SortField {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

impl<F: Default> Default for SearchRequest<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Rounding units for relative date filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRounding {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl DateRounding {
    pub fn unit(&self) -> &'static str {
        match self {
            DateRounding::Year => "y",
            DateRounding::Month => "M",
            DateRounding::Week => "w",
            DateRounding::Day => "d",
            DateRounding::Hour => "h",
            DateRounding::Minute => "m",
            DateRounding::Second => "s",
        }
    }
}

impl fmt::Display for DateRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit())
    }
}

/// Date filter value matching anything within the same `rounding` unit as
/// `timestamp`, e.g. `2023-09-20T11:31:20.206801604Z||/d`.
///
/// `timestamp` must already be in a `java.time.ZonedDateTime` compatible format.
pub fn date_within(timestamp: &str, rounding: DateRounding) -> String {
    format!("{}||/{}", timestamp, rounding.unit())
}

//! Shared request parameters: date windows and pagination.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::Error;

/// Default number of records returned by list queries.
pub const DEFAULT_LIMIT: i64 = 500;

/// First day of index coverage; used when a request omits `start_date`.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).expect("hardcoded date is valid")
}

/// Optional date bounds as they arrive on a summary request.
#[derive(Deserialize, Clone, Copy, Debug, Default)]
pub struct DateParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateParams {
    /// Applies the default window: coverage start through today.
    pub fn resolve(&self) -> DateRange {
        DateRange::resolve(self.start_date, self.end_date)
    }
}

/// Date bounds plus pagination, as they arrive on a record-list request.
#[derive(Deserialize, Clone, Copy, Debug, Default)]
pub struct RecordParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl RecordParams {
    pub fn resolve_range(&self) -> DateRange {
        DateRange::resolve(self.start_date, self.end_date)
    }

    pub fn resolve_page(&self) -> Result<Page, Error> {
        Page::resolve(self.offset, self.limit)
    }
}

/// The effective inclusive date window of a query, after defaults.
///
/// Result payloads echo these bounds back so callers can tell which window
/// a defaulted query actually covered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Fills missing bounds: `start` falls back to the coverage start,
    /// `end` to today. An inverted window is passed through as-is and
    /// simply matches nothing.
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        DateRange {
            start: start.unwrap_or_else(default_start_date),
            end: end.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

/// A validated pagination window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Page {
        Page {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    /// Applies defaults (`offset` 0, `limit` 500) and rejects negative
    /// values. A zero `limit` is allowed; it returns totals without records.
    pub fn resolve(offset: Option<i64>, limit: Option<i64>) -> Result<Page, Error> {
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if offset < 0 {
            return Err(Error::InvalidInput(format!(
                "offset must be >= 0, got {}",
                offset
            )));
        }
        if limit < 0 {
            return Err(Error::InvalidInput(format!(
                "limit must be >= 0, got {}",
                limit
            )));
        }
        Ok(Page { offset, limit })
    }
}

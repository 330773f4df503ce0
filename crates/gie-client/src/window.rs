//! Time and result-window filters.

use chrono::{DateTime, NaiveDate};
use gie_catalog::QueryParams;

use crate::error::{GieError, Result};

/// Date format used by both APIs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional date range, as-of date and page size of a query.
///
/// Maps to the `from`, `to`, `date` and `size` query parameters. Unset fields
/// (and a size of zero) are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryWindow {
    /// First gas day to include.
    pub start: Option<NaiveDate>,
    /// Last gas day to include.
    pub end: Option<NaiveDate>,
    /// Single gas day to report.
    pub date: Option<NaiveDate>,
    /// Page size.
    pub size: Option<u32>,
}

impl QueryWindow {
    /// Creates an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a window covering `start..=end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    /// Creates a window for a single gas day.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Sets the first gas day (`from`).
    #[must_use]
    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the last gas day (`to`).
    #[must_use]
    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the as-of gas day (`date`).
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Returns the window without its as-of date.
    #[must_use]
    pub fn without_date(self) -> Self {
        Self { date: None, ..self }
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.to_params().is_empty()
    }

    /// Rejects a start later than the end.
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start, self.end)
            && start > end
        {
            return Err(GieError::InvalidArgument(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(())
    }

    /// Query parameters for the set fields.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt("from", self.start.map(format_date));
        params.insert_opt("to", self.end.map(format_date));
        params.insert_opt("date", self.date.map(format_date));
        params.insert_opt(
            "size",
            self.size.filter(|size| *size > 0).map(|size| size.to_string()),
        );
        params
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a gas day from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep their own calendar date; no timezone conversion is done.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(input).map(|dt| dt.date_naive()))
        .map_err(|_| {
            GieError::InvalidArgument(format!(
                "'{input}' is not a date (expected YYYY-MM-DD)"
            ))
        })
}

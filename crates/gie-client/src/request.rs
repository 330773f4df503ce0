//! Request assembly: endpoint joining and parameter merging.

use gie_catalog::{ApiFamily, QueryParams};
use url::Url;

use crate::error::{GieError, Result};
use crate::window::QueryWindow;

/// Endpoint serving the EIC listing of all companies and facilities.
pub const EIC_LISTING_ENDPOINT: &str = "about?show=listing";

/// Endpoint serving news items.
pub const NEWS_ENDPOINT: &str = "news";

/// Endpoint serving unavailability (outage) reports.
pub const UNAVAILABILITY_ENDPOINT: &str = "unavailability";

/// One logical query: family, optional endpoint suffix and parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// API family; selects the root URL.
    pub family: ApiFamily,
    /// Path relative to the root (may carry its own query string).
    pub endpoint: Option<String>,
    /// Entity scope from a resolved catalog entry.
    pub scope: Option<QueryParams>,
    /// Date range, as-of date and page size.
    pub window: QueryWindow,
    /// News item selector, sent as `url`.
    pub news_item: Option<String>,
}

impl FetchRequest {
    /// Creates a request for the family root with no parameters.
    pub fn new(family: ApiFamily) -> Self {
        Self {
            family,
            endpoint: None,
            scope: None,
            window: QueryWindow::default(),
            news_item: None,
        }
    }

    /// Sets the path suffix joined onto the API root.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the entity scope parameters.
    #[must_use]
    pub fn with_scope(mut self, scope: Option<QueryParams>) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the date range and page size.
    #[must_use]
    pub fn with_window(mut self, window: QueryWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets the news item to fetch.
    #[must_use]
    pub fn with_news_item(mut self, news_item: Option<impl Into<String>>) -> Self {
        self.news_item = news_item.map(Into::into);
        self
    }

    /// Merged query parameters.
    ///
    /// Window and news parameters form the base, the entity scope is laid on
    /// top, and empty values are dropped because the API rejects them.
    pub fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt("url", self.news_item.clone());
        params.overlay(&self.window.to_params());
        if let Some(scope) = &self.scope {
            params.overlay(scope);
        }
        params.drop_empty();
        params
    }

    /// Joins the endpoint onto `root`.
    ///
    /// Only relative suffixes are accepted. Absolute URLs, rooted paths and
    /// `..` segments would escape the API root under URL-join rules and are
    /// rejected instead.
    pub fn url(&self, root: &Url) -> Result<Url> {
        let Some(endpoint) = self.endpoint.as_deref().filter(|e| !e.trim().is_empty()) else {
            return Ok(root.clone());
        };
        if endpoint.starts_with('/') || endpoint.starts_with('\\') {
            return Err(invalid_endpoint(endpoint, "must be relative to the API root"));
        }
        if has_parent_segment(endpoint) {
            return Err(invalid_endpoint(endpoint, "must not leave the API root"));
        }
        if Url::parse(endpoint).is_ok() {
            return Err(invalid_endpoint(
                endpoint,
                "absolute URLs would override the API root",
            ));
        }
        root.join(endpoint)
            .map_err(|e| invalid_endpoint(endpoint, &e.to_string()))
    }

    /// Full URL including the merged query string.
    pub fn full_url(&self, root: &Url) -> Result<Url> {
        let mut url = self.url(root)?;
        let params = self.params();
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// Whether the path part contains a `..` segment, percent-encoded or not.
fn has_parent_segment(endpoint: &str) -> bool {
    let path = endpoint.split(['?', '#']).next().unwrap_or_default();
    path.split(['/', '\\'])
        .map(|segment| segment.to_ascii_lowercase().replace("%2e", "."))
        .any(|segment| segment == "..")
}

fn invalid_endpoint(endpoint: &str, reason: &str) -> GieError {
    GieError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: reason.to_string(),
    }
}

//! Raw AGSI/ALSI client returning parsed JSON.

use gie_catalog::{ApiFamily, CatalogEntry, Company, Country, Facility, Identifier};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;

use crate::config::{API_KEY_HEADER, ClientSettings};
use crate::error::{GieError, Result};
use crate::request::{EIC_LISTING_ENDPOINT, FetchRequest, NEWS_ENDPOINT, UNAVAILABILITY_ENDPOINT};
use crate::window::QueryWindow;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("gie-client/", env!("CARGO_PKG_VERSION"));

/// Body marker of a rejected key on the ALSI API, which answers 200 OK.
const ACCESS_DENIED_MARKER: &str = "access denied";

/// AGSI/ALSI client that queries the API and returns the JSON payload.
///
/// Each query method resolves its identifiers, builds the parameters and
/// performs exactly one GET. The underlying `reqwest::Client` is pooled and
/// safe to share; clone the client to use it from several tasks.
#[derive(Debug, Clone)]
pub struct GieRawClient {
    http: reqwest::Client,
    settings: ClientSettings,
    /// Whether the key must be added per request (caller-supplied session).
    attach_key: bool,
}

impl GieRawClient {
    /// Creates a client for the production APIs.
    ///
    /// # Errors
    ///
    /// Returns [`GieError::MissingApiKey`] for an empty key; nothing is sent.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_settings(ClientSettings::new(api_key))
    }

    /// Creates a client with its own session carrying the key header.
    pub fn with_settings(settings: ClientSettings) -> Result<Self> {
        settings.validate()?;

        let mut key = HeaderValue::from_str(settings.api_key.trim())
            .map_err(|e| GieError::Config(format!("API key is not a valid header value: {e}")))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GieError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            settings,
            attach_key: false,
        })
    }

    /// Creates a client on top of a caller-supplied session.
    ///
    /// The key header is added to every request since the session was built
    /// without it.
    pub fn with_http_client(settings: ClientSettings, http: reqwest::Client) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            http,
            settings,
            attach_key: true,
        })
    }

    /// Returns the client settings.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Returns the EIC listing of every company and facility.
    pub async fn query_eic_listing(&self, family: ApiFamily) -> Result<Value> {
        tracing::info!("Query {family} EIC listing started");
        self.fetch(&FetchRequest::new(family).with_endpoint(EIC_LISTING_ENDPOINT))
            .await
    }

    /// Returns all news items, or a single one when `news_item` is given.
    pub async fn query_news_listing(
        &self,
        family: ApiFamily,
        news_item: Option<&str>,
    ) -> Result<Value> {
        tracing::info!("Query {family} news listing started");
        self.fetch(
            &FetchRequest::new(family)
                .with_endpoint(NEWS_ENDPOINT)
                .with_news_item(news_item),
        )
        .await
    }

    /// Returns storage data for one country, or aggregated over all of them.
    pub async fn query_country_storage(
        &self,
        family: ApiFamily,
        country: Option<Identifier<'_, Country>>,
        window: QueryWindow,
    ) -> Result<Value> {
        let scope = country
            .map(|country| family.countries().resolve(country))
            .transpose()?
            .map(CatalogEntry::query_params);

        tracing::info!("Query {family} country storage started");
        self.fetch(
            &FetchRequest::new(family)
                .with_scope(scope)
                .with_window(window),
        )
        .await
    }

    /// Returns unavailability reports, optionally for one country.
    ///
    /// The endpoint has no as-of date; `window.date` is ignored.
    pub async fn query_unavailability(
        &self,
        family: ApiFamily,
        country: Option<Identifier<'_, Country>>,
        window: QueryWindow,
    ) -> Result<Value> {
        let scope = country
            .map(|country| family.countries().resolve(country))
            .transpose()?
            .map(CatalogEntry::query_params);

        tracing::info!("Query {family} unavailability started");
        self.fetch(
            &FetchRequest::new(family)
                .with_endpoint(UNAVAILABILITY_ENDPOINT)
                .with_scope(scope)
                .with_window(window.without_date()),
        )
        .await
    }

    /// Returns storage data for one company.
    pub async fn query_company<'a>(
        &self,
        family: ApiFamily,
        company: impl Into<Identifier<'a, Company>>,
        window: QueryWindow,
    ) -> Result<Value> {
        let company = family.companies().resolve(company)?;

        tracing::info!("Query {family} company {} started", company.key);
        self.fetch(
            &FetchRequest::new(family)
                .with_scope(Some(company.query_params()))
                .with_window(window),
        )
        .await
    }

    /// Returns storage data for one facility.
    pub async fn query_facility_storage<'a>(
        &self,
        family: ApiFamily,
        facility: impl Into<Identifier<'a, Facility>>,
        window: QueryWindow,
    ) -> Result<Value> {
        let facility = family.facilities().resolve(facility)?;

        tracing::info!("Query {family} facility {} started", facility.key);
        self.fetch(
            &FetchRequest::new(family)
                .with_scope(Some(facility.query_params()))
                .with_window(window),
        )
        .await
    }

    /// Sends one GET for `request` and parses the JSON body.
    ///
    /// # Errors
    ///
    /// - [`GieError::InvalidArgument`] / [`GieError::InvalidEndpoint`] before
    ///   anything is sent.
    /// - [`GieError::Network`] / [`GieError::Status`] for transport failures
    ///   and non-success statuses.
    /// - [`GieError::AccessDenied`] when an ALSI body reports a rejected key.
    /// - [`GieError::JsonParse`] when the body is not JSON.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Value> {
        request.window.validate()?;
        let url = request.full_url(self.settings.root(request.family))?;

        tracing::debug!(family = %request.family, url = %url, "sending request");

        let mut builder = self.http.get(url.clone());
        if self.attach_key {
            builder = builder.header(API_KEY_HEADER, self.settings.api_key.trim());
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "request failed");
            return Err(GieError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        if request.family == ApiFamily::Alsi
            && body.to_ascii_lowercase().contains(ACCESS_DENIED_MARKER)
        {
            tracing::warn!("{} rejected the API key", request.family);
            return Err(GieError::AccessDenied);
        }

        tracing::info!("Fetched {} bytes from {}", body.len(), url.path());
        Ok(serde_json::from_str(&body)?)
    }

    /// Closes the session.
    ///
    /// Idle pooled connections are released once the last clone of this
    /// client is closed or dropped.
    pub fn close(self) {
        tracing::debug!("closing GIE client session");
        drop(self.http);
    }
}

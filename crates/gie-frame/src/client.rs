//! Tabular client returning DataFrames.

use gie_catalog::{ApiFamily, Company, Country, Facility, Identifier};
use gie_client::{ClientSettings, GieRawClient, QueryWindow};
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::format::{FLOAT_COLUMNS, json_to_frame};

/// AGSI/ALSI client that queries the API and returns DataFrames.
///
/// Wraps a [`GieRawClient`]; every query performs the same single request
/// and tabulates the payload with [`json_to_frame`].
#[derive(Debug, Clone)]
pub struct GieFrameClient {
    raw: GieRawClient,
}

impl GieFrameClient {
    /// Creates a client for the production APIs.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::from_raw(GieRawClient::new(api_key)?))
    }

    /// Creates a client from settings.
    pub fn with_settings(settings: ClientSettings) -> Result<Self> {
        Ok(Self::from_raw(GieRawClient::with_settings(settings)?))
    }

    /// Wraps an existing raw client.
    pub fn from_raw(raw: GieRawClient) -> Self {
        Self { raw }
    }

    /// Returns the wrapped raw client.
    pub fn raw(&self) -> &GieRawClient {
        &self.raw
    }

    /// Unwraps into the raw client.
    pub fn into_raw(self) -> GieRawClient {
        self.raw
    }

    /// EIC listing of operators and facilities as a frame.
    pub async fn query_eic_listing(&self, family: ApiFamily) -> Result<DataFrame> {
        let payload = self.raw.query_eic_listing(family).await?;
        json_to_frame(&payload, &[])
    }

    /// Transparency news, or one item when `news_item` is given, as a frame.
    pub async fn query_news_listing(
        &self,
        family: ApiFamily,
        news_item: Option<&str>,
    ) -> Result<DataFrame> {
        let payload = self.raw.query_news_listing(family, news_item).await?;
        json_to_frame(&payload, &[])
    }

    /// Storage figures for a country, or for all countries, as a frame.
    pub async fn query_country_storage(
        &self,
        family: ApiFamily,
        country: Option<Identifier<'_, Country>>,
        window: QueryWindow,
    ) -> Result<DataFrame> {
        let payload = self
            .raw
            .query_country_storage(family, country, window)
            .await?;
        json_to_frame(&payload, FLOAT_COLUMNS)
    }

    /// Planned and unplanned unavailabilities as a frame.
    pub async fn query_unavailability(
        &self,
        family: ApiFamily,
        country: Option<Identifier<'_, Country>>,
        window: QueryWindow,
    ) -> Result<DataFrame> {
        let payload = self
            .raw
            .query_unavailability(family, country, window)
            .await?;
        json_to_frame(&payload, FLOAT_COLUMNS)
    }

    /// Storage figures for one company as a frame.
    pub async fn query_company<'a>(
        &self,
        family: ApiFamily,
        company: impl Into<Identifier<'a, Company>>,
        window: QueryWindow,
    ) -> Result<DataFrame> {
        let payload = self.raw.query_company(family, company, window).await?;
        json_to_frame(&payload, FLOAT_COLUMNS)
    }

    /// Storage figures for one facility as a frame.
    pub async fn query_facility_storage<'a>(
        &self,
        family: ApiFamily,
        facility: impl Into<Identifier<'a, Facility>>,
        window: QueryWindow,
    ) -> Result<DataFrame> {
        let payload = self
            .raw
            .query_facility_storage(family, facility, window)
            .await?;
        json_to_frame(&payload, FLOAT_COLUMNS)
    }

    /// Closes the session.
    pub fn close(self) {
        self.raw.close();
    }
}

//! Async raw client for the GIE transparency platform.
//!
//! Queries the AGSI (gas storage) and ALSI (LNG terminal) REST APIs and
//! returns the parsed JSON payload unchanged.
//!
//! # Overview
//!
//! Every query operation:
//!
//! - resolves country, company and facility identifiers through the static
//!   catalogs of [`gie_catalog`]
//! - merges window parameters (`from`, `to`, `date`, `size`) with the entity
//!   scope, dropping empty values
//! - performs exactly one authenticated GET against the family root
//!
//! Invalid identifiers, reversed date ranges and a missing API key are
//! reported before any request is made.
//!
//! # Example
//!
//! ```no_run
//! use gie_catalog::ApiFamily;
//! use gie_client::{GieRawClient, QueryWindow, parse_date};
//!
//! async fn belgian_storage() -> gie_client::Result<()> {
//!     let client = GieRawClient::new("my-api-key")?;
//!     let window = QueryWindow::between(parse_date("2024-01-01")?, parse_date("2024-01-31")?);
//!
//!     let payload = client
//!         .query_country_storage(ApiFamily::Agsi, Some("BE".into()), window)
//!         .await?;
//!     println!("{}", payload["data"]);
//!
//!     client.close();
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod window;

// === Public API ===
pub use client::GieRawClient;
pub use config::{API_KEY_HEADER, ClientSettings};
pub use error::{GieError, Result};
pub use request::{EIC_LISTING_ENDPOINT, FetchRequest, NEWS_ENDPOINT, UNAVAILABILITY_ENDPOINT};
pub use window::{DATE_FORMAT, QueryWindow, parse_date};

// Re-exported so callers need a single dependency for the common case.
pub use gie_catalog::{ApiFamily, Identifier};

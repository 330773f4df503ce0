//! Polars DataFrame layer for the GIE AGSI/ALSI client.
//!
//! [`GieFrameClient`] exposes the queries of
//! [`GieRawClient`](gie_client::GieRawClient) and returns each payload as a
//! [`DataFrame`](polars::prelude::DataFrame). Storage figures that the APIs
//! report as numeric strings are cast to `Float64`.
//!
//! # Example
//!
//! ```no_run
//! use gie_client::{ApiFamily, QueryWindow};
//! use gie_frame::GieFrameClient;
//!
//! async fn dunkerque() -> gie_frame::Result<()> {
//!     let client = GieFrameClient::new("my-api-key")?;
//!     let df = client
//!         .query_facility_storage(ApiFamily::Alsi, "dunkerque", QueryWindow::new())
//!         .await?;
//!     println!("{df}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod format;

pub use client::GieFrameClient;
pub use error::{FrameError, Result};
pub use format::{FLOAT_COLUMNS, GAS_DAY_COLUMN, json_to_frame};

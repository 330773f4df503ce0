//! Static catalogs for the GIE transparency platform.
//!
//! The AGSI (gas storage) and ALSI (LNG terminal) APIs scope every data
//! query by country, company and facility codes. This crate holds the known
//! codes as immutable literal tables and resolves user-supplied identifiers
//! against them.
//!
//! # Features
//!
//! - **Catalogs**: one [`Catalog`] per API family and entity kind
//! - **Resolution**: symbolic key first, then code value, see [`Catalog::resolve`]
//! - **Query scoping**: [`CatalogEntry::query_params`] yields the query-string
//!   pairs the API expects for an entry
//!
//! # Example
//!
//! ```
//! use gie_catalog::{ApiFamily, CatalogEntry};
//!
//! let facility = ApiFamily::Alsi.facilities().resolve("dunkerque")?;
//! let params = facility.query_params();
//! assert_eq!(params.get("country"), Some("FR"));
//! assert_eq!(params.len(), 3);
//! # Ok::<(), gie_catalog::LookupError>(())
//! ```

// Table literals: `"key" => "code", ...owner fields;`
macro_rules! countries {
    ($($key:literal => $code:literal, $name:literal;)*) => {
        &[$($crate::Country { key: $key, code: $code, name: $name }),*]
    };
}

macro_rules! companies {
    ($($key:literal => $code:literal, $country:literal;)*) => {
        &[$($crate::Company { key: $key, code: $code, country: $country }),*]
    };
}

macro_rules! facilities {
    ($($key:literal => $code:literal, $country:literal, $company:literal;)*) => {
        &[$($crate::Facility {
            key: $key,
            code: $code,
            country: $country,
            company: $company,
        }),*]
    };
}

pub mod agsi;
pub mod alsi;
mod catalog;
mod entry;
mod error;
mod family;
mod params;

// === Error Types ===
pub use error::{LookupError, Result};

// === Catalog Types ===
pub use catalog::{Catalog, Identifier};
pub use entry::{CatalogEntry, Company, Country, Facility};
pub use family::ApiFamily;
pub use params::QueryParams;

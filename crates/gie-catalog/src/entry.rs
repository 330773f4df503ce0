//! Catalog entry records.
//!
//! Every entry is declared under a symbolic key (e.g. `dunkerque_lng`) and
//! carries the code the API expects plus the codes of its owners. Owner codes
//! are bare strings: a company's country is not checked against the country
//! catalog.

use std::fmt;

use serde::Serialize;

use crate::params::QueryParams;

/// Common interface of country, company and facility entries.
pub trait CatalogEntry: fmt::Debug + 'static {
    /// Entity kind, used in catalog names and messages.
    const KIND: &'static str;

    /// Symbolic key the entry is declared under.
    fn key(&self) -> &str;

    /// Code value sent to the API.
    fn code(&self) -> &str;

    /// Human readable label.
    fn label(&self) -> &str;

    /// Query-string pairs that scope a request to this entry.
    fn query_params(&self) -> QueryParams;
}

/// A country (or post-event country variant such as `GB*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    /// Symbolic key.
    pub key: &'static str,
    /// Country code, e.g. `BE` or `GB*`.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
}

/// A storage or terminal operating company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Company {
    /// Symbolic key.
    pub key: &'static str,
    /// EIC code of the company.
    pub code: &'static str,
    /// Code of the owning country.
    pub country: &'static str,
}

/// A storage facility or LNG terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Facility {
    /// Symbolic key.
    pub key: &'static str,
    /// EIC code of the facility.
    pub code: &'static str,
    /// Code of the owning country.
    pub country: &'static str,
    /// EIC code of the operating company.
    pub company: &'static str,
}

impl CatalogEntry for Country {
    const KIND: &'static str = "country";

    fn key(&self) -> &str {
        self.key
    }

    fn code(&self) -> &str {
        self.code
    }

    fn label(&self) -> &str {
        self.name
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new().with("country", self.code)
    }
}

impl CatalogEntry for Company {
    const KIND: &'static str = "company";

    fn key(&self) -> &str {
        self.key
    }

    fn code(&self) -> &str {
        self.code
    }

    fn label(&self) -> &str {
        self.key
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("country", self.country)
            .with("company", self.code)
    }
}

impl CatalogEntry for Facility {
    const KIND: &'static str = "facility";

    fn key(&self) -> &str {
        self.key
    }

    fn code(&self) -> &str {
        self.code
    }

    fn label(&self) -> &str {
        self.key
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("country", self.country)
            .with("company", self.company)
            .with("facility", self.code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_params() {
        let country = Country {
            key: "BE",
            code: "BE",
            name: "Belgium",
        };
        let params = country.query_params();
        assert_eq!(params.keys(), vec!["country"]);
        assert_eq!(params.get("country"), Some("BE"));
    }

    #[test]
    fn test_company_params() {
        let company = Company {
            key: "fluxys_lng",
            code: "21X000000001006T",
            country: "BE",
        };
        let params = company.query_params();
        assert_eq!(params.keys(), vec!["country", "company"]);
        assert_eq!(params.get("company"), Some("21X000000001006T"));
    }

    #[test]
    fn test_facility_params() {
        let facility = Facility {
            key: "zeebrugge",
            code: "21W0000000001245",
            country: "BE",
            company: "21X000000001006T",
        };
        let params = facility.query_params();
        assert_eq!(params.keys(), vec!["country", "company", "facility"]);
        assert_eq!(params.get("facility"), Some("21W0000000001245"));
        assert_eq!(facility.to_string(), "21W0000000001245");
    }
}

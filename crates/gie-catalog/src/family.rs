//! API family selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entry::{Company, Country, Facility};
use crate::{agsi, alsi};

/// The two GIE transparency APIs.
///
/// The family determines both the root URL a request is sent to and which
/// catalogs are valid for identifier resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFamily {
    /// Aggregated Gas Storage Inventory.
    Agsi,
    /// Aggregated LNG Storage Inventory.
    Alsi,
}

impl ApiFamily {
    /// All families, in declaration order.
    pub const ALL: [ApiFamily; 2] = [ApiFamily::Agsi, ApiFamily::Alsi];

    /// Returns the short uppercase name ("AGSI" / "ALSI").
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Agsi => "AGSI",
            Self::Alsi => "ALSI",
        }
    }

    /// Returns the production root URL, always ending in a slash.
    pub const fn root_url(&self) -> &'static str {
        match self {
            Self::Agsi => "https://agsi.gie.eu/api/",
            Self::Alsi => "https://alsi.gie.eu/api/",
        }
    }

    /// Returns the country catalog for this family.
    pub fn countries(&self) -> &'static Catalog<Country> {
        match self {
            Self::Agsi => &agsi::COUNTRIES,
            Self::Alsi => &alsi::COUNTRIES,
        }
    }

    /// Returns the company catalog for this family.
    pub fn companies(&self) -> &'static Catalog<Company> {
        match self {
            Self::Agsi => &agsi::COMPANIES,
            Self::Alsi => &alsi::COMPANIES,
        }
    }

    /// Returns the facility catalog for this family.
    pub fn facilities(&self) -> &'static Catalog<Facility> {
        match self {
            Self::Agsi => &agsi::FACILITIES,
            Self::Alsi => &alsi::FACILITIES,
        }
    }
}

impl fmt::Display for ApiFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agsi" => Ok(Self::Agsi),
            "alsi" => Ok(Self::Alsi),
            other => Err(format!("unknown API family '{other}' (expected agsi or alsi)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_urls_end_with_slash() {
        for family in ApiFamily::ALL {
            assert!(family.root_url().ends_with("/api/"));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("agsi".parse::<ApiFamily>(), Ok(ApiFamily::Agsi));
        assert_eq!(" ALSI ".parse::<ApiFamily>(), Ok(ApiFamily::Alsi));
        assert!("agsx".parse::<ApiFamily>().is_err());
    }

    #[test]
    fn test_catalogs_belong_to_family() {
        for family in ApiFamily::ALL {
            assert_eq!(family.countries().family(), family);
            assert_eq!(family.companies().family(), family);
            assert_eq!(family.facilities().family(), family);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ApiFamily::Alsi).unwrap();
        assert_eq!(json, "\"alsi\"");
    }
}

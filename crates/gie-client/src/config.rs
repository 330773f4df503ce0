//! Client settings.

use std::fmt;

use gie_catalog::ApiFamily;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{GieError, Result};

/// Request header carrying the API key.
pub const API_KEY_HEADER: &str = "x-key";

/// Settings for a [`GieRawClient`](crate::GieRawClient).
///
/// Roots default to the production endpoints; overriding them is mostly
/// useful for pointing the client at a mock server.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// API key sent in the `x-key` header.
    #[serde(default)]
    pub api_key: String,

    /// Root URL of the AGSI API.
    #[serde(default = "default_agsi_root")]
    pub agsi_root: Url,

    /// Root URL of the ALSI API.
    #[serde(default = "default_alsi_root")]
    pub alsi_root: Url,
}

fn default_agsi_root() -> Url {
    Url::parse(ApiFamily::Agsi.root_url()).expect("static AGSI root is a valid URL")
}

fn default_alsi_root() -> Url {
    Url::parse(ApiFamily::Alsi.root_url()).expect("static ALSI root is a valid URL")
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            agsi_root: default_agsi_root(),
            alsi_root: default_alsi_root(),
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &"[REDACTED]")
            .field("agsi_root", &self.agsi_root.as_str())
            .field("alsi_root", &self.alsi_root.as_str())
            .finish()
    }
}

impl ClientSettings {
    /// Creates settings for the production roots with the given key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Parses settings from a TOML document.
    ///
    /// Missing fields fall back to their defaults; the key may be left out and
    /// supplied later with [`with_api_key`](Self::with_api_key).
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let mut settings: Self = toml::from_str(input)?;
        settings.agsi_root = normalize_root(settings.agsi_root);
        settings.alsi_root = normalize_root(settings.alsi_root);
        Ok(settings)
    }

    /// Replaces the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Replaces the root URL of one family.
    ///
    /// A trailing slash is added when missing so relative endpoints are
    /// joined below the root instead of replacing its last segment.
    pub fn with_root(mut self, family: ApiFamily, root: &str) -> Result<Self> {
        let url = Url::parse(root)
            .map_err(|e| GieError::Config(format!("invalid {family} root '{root}': {e}")))?;
        let url = normalize_root(url);
        match family {
            ApiFamily::Agsi => self.agsi_root = url,
            ApiFamily::Alsi => self.alsi_root = url,
        }
        Ok(self)
    }

    /// Returns the root URL for a family.
    pub fn root(&self, family: ApiFamily) -> &Url {
        match family {
            ApiFamily::Agsi => &self.agsi_root,
            ApiFamily::Alsi => &self.alsi_root,
        }
    }

    /// Checks that the settings can be used to build a client.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(GieError::MissingApiKey);
        }
        for family in ApiFamily::ALL {
            let root = self.root(family);
            if root.cannot_be_a_base() {
                return Err(GieError::Config(format!(
                    "{family} root '{root}' cannot be used as a base URL"
                )));
            }
        }
        Ok(())
    }
}

fn normalize_root(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roots() {
        let settings = ClientSettings::default();
        assert_eq!(settings.agsi_root.as_str(), "https://agsi.gie.eu/api/");
        assert_eq!(settings.alsi_root.as_str(), "https://alsi.gie.eu/api/");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(
            ClientSettings::new("").validate(),
            Err(GieError::MissingApiKey)
        ));
        assert!(matches!(
            ClientSettings::new("   ").validate(),
            Err(GieError::MissingApiKey)
        ));
        assert!(ClientSettings::new("key").validate().is_ok());
    }

    #[test]
    fn test_with_root_adds_trailing_slash() {
        let settings = ClientSettings::new("key")
            .with_root(ApiFamily::Alsi, "http://127.0.0.1:9000/alsi")
            .unwrap();
        assert_eq!(
            settings.root(ApiFamily::Alsi).as_str(),
            "http://127.0.0.1:9000/alsi/"
        );
        assert_eq!(
            settings.root(ApiFamily::Agsi).as_str(),
            "https://agsi.gie.eu/api/"
        );
    }

    #[test]
    fn test_from_toml() {
        let settings = ClientSettings::from_toml_str(
            r#"
            api_key = "secret"
            alsi_root = "http://localhost:8080/lng"
            "#,
        )
        .unwrap();
        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.alsi_root.as_str(), "http://localhost:8080/lng/");
        assert_eq!(settings.agsi_root.as_str(), "https://agsi.gie.eu/api/");
    }

    #[test]
    fn test_from_toml_rejects_bad_url() {
        let err = ClientSettings::from_toml_str(r#"agsi_root = "not a url""#).unwrap_err();
        assert!(matches!(err, GieError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", ClientSettings::new("super-secret"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}

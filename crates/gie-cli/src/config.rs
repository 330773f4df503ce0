//! Settings resolution from the config file and command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gie_client::ClientSettings;

/// Loads client settings.
///
/// Starts from the TOML file when given, otherwise from the defaults, then
/// applies the API key from `--api-key` / `GIE_API_KEY` if present.
pub fn load_settings(config: Option<&Path>, api_key: Option<&str>) -> Result<ClientSettings> {
    let mut settings = match config {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            ClientSettings::from_toml_str(&contents)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => ClientSettings::default(),
    };

    if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
        settings = settings.with_api_key(key);
    }
    tracing::debug!(settings = ?settings, "client settings loaded");
    Ok(settings)
}

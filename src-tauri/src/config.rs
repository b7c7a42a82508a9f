//! Document Store Configuration
//!
//! Settings come from `orders-admin.toml` in the app config directory and
//! are then overridden by `SANITY_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::ORDER_TYPE;

pub const CONFIG_FILE_NAME: &str = "orders-admin.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Hosted project; empty means "not configured"
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Bearer token for authenticated reads and all writes
    pub token: Option<String>,
    /// Overrides the host derived from `project_id`
    pub api_host: Option<String>,
    /// Serve queries from the CDN host
    pub use_cdn: bool,
    pub document_type: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: "production".into(),
            api_version: "2021-10-21".into(),
            token: None,
            api_host: None,
            use_cdn: false,
            document_type: ORDER_TYPE.into(),
        }
    }
}

impl StoreSettings {
    fn explicit_host(&self) -> Option<String> {
        self.api_host
            .as_deref()
            .map(|h| h.trim().trim_end_matches('/'))
            .filter(|h| !h.is_empty())
            .map(str::to_string)
    }

    /// Whether a hosted store can be reached with these settings
    pub fn is_configured(&self) -> bool {
        !self.project_id.trim().is_empty() || self.explicit_host().is_some()
    }

    /// Host for mutations (and queries when the CDN is off)
    pub fn api_host(&self) -> String {
        self.explicit_host()
            .unwrap_or_else(|| format!("https://{}.api.sanity.io", self.project_id))
    }

    /// Host for queries
    pub fn query_host(&self) -> String {
        match self.explicit_host() {
            Some(host) => host,
            None if self.use_cdn => format!("https://{}.apicdn.sanity.io", self.project_id),
            None => self.api_host(),
        }
    }
}

/// Load settings from `config_dir` and the process environment
pub fn load_settings(config_dir: Option<&Path>) -> StoreSettings {
    load_settings_with(
        config_dir.map(|dir| dir.join(CONFIG_FILE_NAME)),
        |key| std::env::var(key).ok(),
    )
}

/// Load settings from an optional file, then apply overrides from `env`
pub fn load_settings_with(file: Option<PathBuf>, env: impl Fn(&str) -> Option<String>) -> StoreSettings {
    let mut settings = file
        .as_deref()
        .and_then(read_settings_file)
        .unwrap_or_default();

    if let Some(v) = env("SANITY_PROJECT_ID") {
        settings.project_id = v;
    }
    if let Some(v) = env("SANITY_DATASET") {
        settings.dataset = v;
    }
    if let Some(v) = env("SANITY_API_VERSION") {
        settings.api_version = v;
    }
    if let Some(v) = env("SANITY_TOKEN") {
        settings.token = Some(v);
    }
    if let Some(v) = env("SANITY_API_HOST") {
        settings.api_host = Some(v);
    }
    if let Some(v) = env("SANITY_USE_CDN") {
        settings.use_cdn = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
    }

    settings
}

fn read_settings_file(path: &Path) -> Option<StoreSettings> {
    let raw = fs::read_to_string(path).ok()?;
    match toml::from_str::<StoreSettings>(&raw) {
        Ok(settings) => Some(settings),
        Err(e) => {
            log::warn!("Ignoring invalid config {}: {}", path.display(), e);
            None
        }
    }
}

//! Settings loader.
//!
//! One optional YAML file; precedence per field is CLI flag over file value
//! over built-in default. A missing file is the default configuration, an
//! unreadable or unparsable file is ignored with a warning.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use lolcomp_catalog::{DDRAGON_BASE_URL, DEFAULT_LOCALE};
use lolcomp_types::COMPOSITIONS_STORAGE_KEY;

const DEFAULT_SETTINGS_FILE: &str = "lolcomp.yaml";
const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_STORAGE_PATH: &str = ".lolcomp";

/// Gateway/service configuration as read from disk. All fields optional;
/// resolution happens through the accessor methods.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewaySettings {
    /// Listen address for the HTTP server.
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSettings {
    /// Data Dragon CDN root.
    pub base_url: Option<String>,
    /// Catalog locale (e.g. `en_US`, `pt_BR`).
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSettings {
    /// Directory the file backend writes under.
    pub path: Option<String>,
    /// Key the composition collection is stored under.
    pub key: Option<String>,
}

impl Settings {
    /// Listen address; `flag` wins over the file value.
    pub fn bind(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.gateway.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
    }

    pub fn provider_base_url(&self) -> String {
        self.provider
            .base_url
            .clone()
            .unwrap_or_else(|| DDRAGON_BASE_URL.to_string())
    }

    pub fn provider_locale(&self) -> String {
        self.provider
            .locale
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }

    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(
            self.storage
                .path
                .clone()
                .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string()),
        )
    }

    pub fn storage_key(&self) -> String {
        self.storage
            .key
            .clone()
            .unwrap_or_else(|| COMPOSITIONS_STORAGE_KEY.to_string())
    }
}

/// Settings file path: `--config` flag, else `LOLCOMP_CONFIG`, else
/// `lolcomp.yaml` in the working directory.
pub fn settings_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    std::env::var("LOLCOMP_CONFIG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

/// Load settings from `path`, falling back to defaults on any problem.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; using defaults"
            );
            return Settings::default();
        }
    };
    match serde_yaml::from_str::<Settings>(&raw) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; using defaults"
            );
            Settings::default()
        }
    }
}

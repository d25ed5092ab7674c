//! Data Dragon CDN client.
//!
//! Resolves the latest data-version from `/api/versions.json`, then fetches
//! the locale-specific champion payloads published under that version.

use lolcomp_types::CatalogEnvelope;

use crate::error::CatalogError;
use crate::provider::CatalogProvider;

/// Official Data Dragon CDN root.
pub const DDRAGON_BASE_URL: &str = "https://ddragon.leagueoflegends.com";

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en_US";

/// HTTP client for the Data Dragon CDN.
pub struct DdragonClient {
    client: reqwest::Client,
    base_url: String,
    locale: String,
}

impl DdragonClient {
    /// Client against the official CDN with the default locale.
    pub fn new() -> Self {
        Self::with_base_url(DDRAGON_BASE_URL, DEFAULT_LOCALE)
    }

    /// Client against an explicit CDN root and locale (configuration and
    /// tests point this at mirrors).
    pub fn with_base_url(base_url: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            locale: locale.into(),
        }
    }

    fn versions_url(&self) -> String {
        format!("{}/api/versions.json", self.base_url)
    }

    fn catalog_url(&self, version: &str) -> String {
        format!(
            "{}/cdn/{}/data/{}/champion.json",
            self.base_url, version, self.locale
        )
    }

    fn champion_url(&self, version: &str, id: &str) -> String {
        format!(
            "{}/cdn/{}/data/{}/champion/{}.json",
            self.base_url, version, self.locale, id
        )
    }

    /// GET `url`, map non-success statuses, return the raw body.
    async fn get_text(&self, url: &str) -> Result<String, CatalogError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Latest published data-version (first element of versions.json).
    async fn latest_version(&self) -> Result<String, CatalogError> {
        let body = self.get_text(&self.versions_url()).await?;
        let versions: Vec<String> = serde_json::from_str(&body)?;
        versions
            .into_iter()
            .next()
            .ok_or(CatalogError::Upstream {
                status: 200,
                body: "empty versions list".to_string(),
            })
    }
}

impl Default for DdragonClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CatalogProvider for DdragonClient {
    fn provider_name(&self) -> &'static str {
        "ddragon"
    }

    async fn fetch_catalog(&self) -> Result<CatalogEnvelope, CatalogError> {
        let version = self.latest_version().await?;
        let body = self.get_text(&self.catalog_url(&version)).await?;
        let envelope: CatalogEnvelope = serde_json::from_str(&body)?;
        tracing::info!(
            version = %envelope.version,
            champions = envelope.data.len(),
            locale = %self.locale,
            "champion catalog loaded"
        );
        Ok(envelope)
    }

    async fn fetch_champion(&self, id: &str) -> Result<serde_json::Value, CatalogError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CatalogError::InvalidId);
        }
        let version = self.latest_version().await?;
        let body = match self.get_text(&self.champion_url(&version, id)).await {
            Ok(body) => body,
            Err(CatalogError::NotFound(_)) => {
                return Err(CatalogError::NotFound(id.to_string()));
            }
            Err(other) => return Err(other),
        };
        let envelope: serde_json::Value = serde_json::from_str(&body)?;
        // The CDN serves 200 with an empty envelope for some malformed ids;
        // treat a missing data section the same as an upstream 404.
        if envelope.get("data").map_or(true, |data| data.is_null()) {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_base_version_and_locale() {
        let client = DdragonClient::with_base_url("https://mirror.example/", "pt_BR");
        assert_eq!(
            client.versions_url(),
            "https://mirror.example/api/versions.json"
        );
        assert_eq!(
            client.catalog_url("13.11.1"),
            "https://mirror.example/cdn/13.11.1/data/pt_BR/champion.json"
        );
        assert_eq!(
            client.champion_url("13.11.1", "Aatrox"),
            "https://mirror.example/cdn/13.11.1/data/pt_BR/champion/Aatrox.json"
        );
    }

    #[tokio::test]
    async fn blank_id_is_rejected_before_any_request() {
        let client = DdragonClient::new();
        let result = client.fetch_champion("   ").await;
        assert!(matches!(result, Err(CatalogError::InvalidId)));
    }
}

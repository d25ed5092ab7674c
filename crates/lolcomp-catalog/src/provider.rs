//! Provider trait: the seam the gateway and tests inject a catalog source
//! through, instead of reaching for an ambient HTTP client.

use async_trait::async_trait;

use lolcomp_types::CatalogEnvelope;

use crate::error::CatalogError;

/// A read-only source of champion catalog data.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Provider identifier for logs.
    fn provider_name(&self) -> &'static str;

    /// Fetch the full catalog envelope for the provider's current
    /// data-version. Callers keep the envelope for pass-through responses
    /// and build a [`lolcomp_types::CatalogSnapshot`] from it.
    ///
    /// One request, no retry: a failure surfaces to the caller, which renders
    /// an empty catalog state.
    async fn fetch_catalog(&self) -> Result<CatalogEnvelope, CatalogError>;

    /// Fetch the detail envelope (abilities, flavor text) for one champion.
    ///
    /// The payload is passed through verbatim; only the catalog list is
    /// decoded into typed records.
    async fn fetch_champion(&self, id: &str) -> Result<serde_json::Value, CatalogError>;
}

//! Shared application state and the startup sequence.

use std::sync::Arc;

use tokio::sync::RwLock;

use lolcomp_catalog::CatalogProvider;
use lolcomp_store::{CompositionStore, MigrateOutcome, StoragePort};
use lolcomp_types::CatalogSnapshot;

/// State shared by every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    /// Snapshot fetched once at startup; `None` when the provider was
    /// unreachable, which renders as an empty catalog downstream.
    pub catalog: Option<Arc<CatalogSnapshot>>,
    pub store: Arc<RwLock<CompositionStore>>,
}

impl AppState {
    /// Run the startup sequence: fetch the catalog, load the saved
    /// collection, migrate it when the data-version moved.
    ///
    /// Neither a failed fetch nor a failed load is fatal; both degrade to an
    /// empty view, matching the error philosophy of the rest of the system.
    pub async fn initialize(
        provider: Arc<dyn CatalogProvider>,
        storage: Arc<dyn StoragePort>,
        storage_key: &str,
    ) -> Self {
        let catalog = match provider.fetch_catalog().await {
            Ok(envelope) => Some(Arc::new(CatalogSnapshot::from_envelope(envelope))),
            Err(error) => {
                tracing::warn!(
                    provider = provider.provider_name(),
                    error = %error,
                    "catalog fetch failed at startup; serving empty catalog"
                );
                None
            }
        };

        let mut store = match CompositionStore::load(storage.clone(), storage_key) {
            Ok(store) => store,
            Err(error) => {
                tracing::warn!(
                    key = storage_key,
                    error = %error,
                    "failed to load saved compositions; starting empty"
                );
                CompositionStore::empty(storage, storage_key)
            }
        };

        if let Some(ref snapshot) = catalog {
            match store.migrate(snapshot) {
                Ok(MigrateOutcome::UpToDate) => {}
                Ok(MigrateOutcome::Migrated { rewritten }) => {
                    tracing::info!(
                        rewritten,
                        version = snapshot.version(),
                        "saved compositions migrated"
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        error = %error,
                        "composition migration failed; collection left as loaded"
                    );
                }
            }
        }

        Self {
            provider,
            catalog,
            store: Arc::new(RwLock::new(store)),
        }
    }
}

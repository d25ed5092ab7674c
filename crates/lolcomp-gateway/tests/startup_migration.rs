#![allow(missing_docs)]

//! Startup sequence: a persisted collection from an older data-version is
//! rewritten against the freshly loaded catalog before the gateway serves.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use lolcomp_catalog::{CatalogError, CatalogProvider};
use lolcomp_gateway::AppState;
use lolcomp_store::{MemoryStorage, StoragePort};
use lolcomp_types::test_support::champion;
use lolcomp_types::{COMPOSITIONS_STORAGE_KEY, CatalogEnvelope, ChampionRecord, Composition, Role};

struct FixedProvider {
    envelope: CatalogEnvelope,
}

#[async_trait]
impl CatalogProvider for FixedProvider {
    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_catalog(&self) -> Result<CatalogEnvelope, CatalogError> {
        Ok(self.envelope.clone())
    }

    async fn fetch_champion(&self, id: &str) -> Result<Value, CatalogError> {
        Err(CatalogError::NotFound(id.to_string()))
    }
}

#[tokio::test]
async fn stale_collection_is_migrated_at_startup() {
    // Persisted under 13.10.1: Annie (still in the catalog) and Aurelion
    // (removed from it).
    let stale = Composition::new(
        "13.10.1",
        vec![
            champion("Annie", &[Role::Mage], "13.10.1"),
            champion("Aurelion", &[Role::Mage], "13.10.1"),
        ],
    );
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set(
            COMPOSITIONS_STORAGE_KEY,
            &serde_json::to_string(&vec![stale]).expect("encode"),
        )
        .expect("seed");

    let mut annie = champion("Annie", &[Role::Mage], "13.11.1");
    annie.title = "the Dark Child".to_string();
    let data: BTreeMap<String, ChampionRecord> =
        [("Annie".to_string(), annie)].into_iter().collect();
    let provider = Arc::new(FixedProvider {
        envelope: CatalogEnvelope {
            kind: "champion".to_string(),
            format: "standAloneComplex".to_string(),
            version: "13.11.1".to_string(),
            data,
        },
    });

    let state = AppState::initialize(provider, storage.clone(), COMPOSITIONS_STORAGE_KEY).await;

    let store = state.store.read().await;
    assert_eq!(store.len(), 1);
    let migrated = &store.compositions()[0];
    assert_eq!(migrated.version, "13.11.1");
    for record in &migrated.data.champions {
        match record.id.as_str() {
            "Annie" => {
                assert_eq!(record.version, "13.11.1");
                assert_eq!(record.title, "the Dark Child");
            }
            // No longer in the catalog: stale record kept.
            "Aurelion" => assert_eq!(record.version, "13.10.1"),
            other => panic!("unexpected champion {other}"),
        }
    }

    // The rewrite went through the port, not just memory.
    let blob = storage
        .get(COMPOSITIONS_STORAGE_KEY)
        .expect("get")
        .expect("blob");
    let persisted: Vec<Composition> = serde_json::from_str(&blob).expect("decode");
    assert_eq!(persisted[0].version, "13.11.1");
}

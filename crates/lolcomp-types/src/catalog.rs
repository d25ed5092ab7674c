//! Catalog envelope (wire shape) and the immutable in-memory snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::champion::ChampionRecord;

/// Provider envelope for the "all champions" resource, passed through to
/// gateway clients verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub format: String,
    /// Data-version shared by every record in `data`.
    pub version: String,
    pub data: BTreeMap<String, ChampionRecord>,
}

/// Immutable champion catalog for one data-version.
///
/// Created fresh per load and superseded, never merged: a later fetch
/// replaces the whole snapshot.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    version: String,
    champions: BTreeMap<String, ChampionRecord>,
}

impl CatalogSnapshot {
    /// Build a snapshot from the provider envelope.
    pub fn from_envelope(envelope: CatalogEnvelope) -> Self {
        Self {
            version: envelope.version,
            champions: envelope.data,
        }
    }

    /// Snapshot for tests and empty-catalog startup.
    pub fn new(version: impl Into<String>, champions: Vec<ChampionRecord>) -> Self {
        Self {
            version: version.into(),
            champions: champions
                .into_iter()
                .map(|record| (record.id.clone(), record))
                .collect(),
        }
    }

    /// Data-version of every record in this snapshot.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn get(&self, id: &str) -> Option<&ChampionRecord> {
        self.champions.get(id)
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    /// All records, in id order.
    pub fn records(&self) -> impl Iterator<Item = &ChampionRecord> {
        self.champions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_indexes_records_by_id() {
        let json = r#"{
            "type": "champion",
            "format": "standAloneComplex",
            "version": "13.11.1",
            "data": {
                "Annie": {
                    "id": "Annie", "key": "1", "name": "Annie",
                    "title": "the Dark Child", "tags": ["Mage"],
                    "info": {"attack": 2, "defense": 3, "magic": 10, "difficulty": 6},
                    "image": {"full": "Annie.png", "sprite": "champion0.png",
                              "group": "champion", "x": 48, "y": 0, "w": 48, "h": 48},
                    "stats": {"hp": 560.0, "mp": 418.0},
                    "version": "13.11.1"
                }
            }
        }"#;
        let envelope: CatalogEnvelope = serde_json::from_str(json).expect("decode envelope");
        let snapshot = CatalogSnapshot::from_envelope(envelope);

        assert_eq!(snapshot.version(), "13.11.1");
        assert_eq!(snapshot.len(), 1);
        let annie = snapshot.get("Annie").expect("Annie present");
        assert_eq!(annie.name, "Annie");
        assert_eq!(annie.stats.get("hp"), Some(&560.0));
        assert!(snapshot.get("Aatrox").is_none());
    }
}

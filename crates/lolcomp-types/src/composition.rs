//! Persisted composition: a saved roll plus the data-version it was rolled
//! against.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::champion::ChampionRecord;

/// Storage key the saved-composition collection is persisted under.
pub const COMPOSITIONS_STORAGE_KEY: &str = "lolcomp:compositions";

/// Champion payload of a composition. Kept as its own struct so the
/// persisted layout stays `{"data": {"champions": [...]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionData {
    pub champions: Vec<ChampionRecord>,
}

/// A saved group of champions (a prior roll) kept for later reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Generated unique identifier.
    pub id: String,
    /// Data-version of the catalog at save time.
    pub version: String,
    pub data: CompositionData,
}

impl Composition {
    /// New composition with a generated id.
    pub fn new(version: impl Into<String>, champions: Vec<ChampionRecord>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            version: version.into(),
            data: CompositionData { champions },
        }
    }

    /// Champion identifiers as a set. Two compositions with equal lineups
    /// are duplicates of each other regardless of roll order.
    pub fn lineup(&self) -> BTreeSet<&str> {
        self.data
            .champions
            .iter()
            .map(|champion| champion.id.as_str())
            .collect()
    }

    /// Set-equality check against another composition's lineup.
    pub fn same_lineup(&self, other: &Composition) -> bool {
        self.lineup() == other.lineup()
    }
}

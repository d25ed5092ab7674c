//! Saved-composition persistence manager.
//!
//! The whole collection lives in one serialized blob under a fixed key and
//! is rewritten in full on every mutation. In-memory state is committed only
//! after the port confirms the write, so a failed persist leaves the prior
//! state intact.

use std::sync::Arc;

use lolcomp_types::{CatalogSnapshot, Composition};

use crate::backend::StoragePort;
use crate::error::StoreError;

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Appended and persisted.
    Saved { id: String },
    /// An existing composition already holds the same champion-identifier
    /// set; nothing was written.
    Duplicate { existing_id: String },
}

/// Result of a delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// No composition with that id; the collection is unchanged and nothing
    /// was written.
    NotFound,
}

/// Result of a migration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateOutcome {
    /// Every composition already matched the catalog's data-version.
    UpToDate,
    /// The collection was rewritten against the new data-version.
    Migrated { rewritten: usize },
}

/// Manager for the persisted composition collection.
pub struct CompositionStore {
    storage: Arc<dyn StoragePort>,
    key: String,
    compositions: Vec<Composition>,
}

impl CompositionStore {
    /// Empty store that has not read anything from the port.
    pub fn empty(storage: Arc<dyn StoragePort>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            compositions: Vec::new(),
        }
    }

    /// Load the collection from the port.
    ///
    /// An absent blob is an empty collection. An undecodable blob is treated
    /// as empty, and an undecodable element is skipped, both with a warning.
    pub fn load(storage: Arc<dyn StoragePort>, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let Some(blob) = storage.get(&key)? else {
            return Ok(Self::empty(storage, key));
        };
        let entries: Vec<serde_json::Value> = match serde_json::from_str(&blob) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(
                    key = %key,
                    backend = storage.backend_name(),
                    error = %error,
                    "saved compositions blob is not a JSON array; starting empty"
                );
                return Ok(Self::empty(storage, key));
            }
        };
        let mut compositions = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<Composition>(entry) {
                Ok(composition) => compositions.push(composition),
                Err(error) => {
                    tracing::warn!(
                        key = %key,
                        error = %error,
                        "skipping malformed saved composition"
                    );
                }
            }
        }
        tracing::debug!(
            key = %key,
            backend = storage.backend_name(),
            loaded = compositions.len(),
            "saved compositions loaded"
        );
        Ok(Self {
            storage,
            key,
            compositions,
        })
    }

    /// The saved collection, in save order.
    pub fn compositions(&self) -> &[Composition] {
        &self.compositions
    }

    pub fn len(&self) -> usize {
        self.compositions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }

    /// Append `candidate` unless a saved composition already has the same
    /// lineup (set equality over champion ids, roll order irrelevant).
    pub fn save(&mut self, candidate: Composition) -> Result<SaveOutcome, StoreError> {
        if let Some(existing) = self
            .compositions
            .iter()
            .find(|saved| saved.same_lineup(&candidate))
        {
            tracing::debug!(
                existing_id = %existing.id,
                "save rejected: duplicate lineup"
            );
            return Ok(SaveOutcome::Duplicate {
                existing_id: existing.id.clone(),
            });
        }

        let mut next = self.compositions.clone();
        next.push(candidate);
        self.persist(&next)?;
        let id = next
            .last()
            .map(|saved| saved.id.clone())
            .unwrap_or_default();
        self.compositions = next;
        tracing::debug!(
            id = %id,
            total = self.compositions.len(),
            backend = self.storage.backend_name(),
            "composition saved"
        );
        Ok(SaveOutcome::Saved { id })
    }

    /// Remove the composition with `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Result<DeleteOutcome, StoreError> {
        if !self.compositions.iter().any(|saved| saved.id == id) {
            return Ok(DeleteOutcome::NotFound);
        }
        let next: Vec<Composition> = self
            .compositions
            .iter()
            .filter(|saved| saved.id != id)
            .cloned()
            .collect();
        self.persist(&next)?;
        self.compositions = next;
        tracing::debug!(
            id = %id,
            total = self.compositions.len(),
            backend = self.storage.backend_name(),
            "composition deleted"
        );
        Ok(DeleteOutcome::Deleted)
    }

    /// Rewrite the collection against `catalog` when any saved composition
    /// carries a different data-version.
    ///
    /// Every composition is rewritten, matching version or not: its version
    /// field becomes the catalog's, and each champion record is replaced by
    /// the catalog's record for that id. Ids the catalog no longer knows keep
    /// their stale record, so a saved lineup stays usable across removals
    /// and renames.
    pub fn migrate(&mut self, catalog: &CatalogSnapshot) -> Result<MigrateOutcome, StoreError> {
        let version = catalog.version();
        if self
            .compositions
            .iter()
            .all(|saved| saved.version == version)
        {
            return Ok(MigrateOutcome::UpToDate);
        }

        let next: Vec<Composition> = self
            .compositions
            .iter()
            .map(|saved| {
                let mut migrated = saved.clone();
                migrated.version = version.to_string();
                for champion in &mut migrated.data.champions {
                    if let Some(current) = catalog.get(&champion.id) {
                        *champion = current.clone();
                    }
                }
                migrated
            })
            .collect();
        self.persist(&next)?;
        let rewritten = next.len();
        self.compositions = next;
        tracing::info!(
            version = %version,
            rewritten,
            backend = self.storage.backend_name(),
            "saved compositions migrated to current data-version"
        );
        Ok(MigrateOutcome::Migrated { rewritten })
    }

    /// Serialize and write through the port. Callers commit in-memory state
    /// only after this returns `Ok`.
    fn persist(&self, compositions: &[Composition]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(compositions)?;
        self.storage.set(&self.key, &blob)?;
        Ok(())
    }
}

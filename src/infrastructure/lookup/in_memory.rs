//! In-memory entity store

use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::{
    ContentTypeUid, DomainError, Entity, EntityLookup, PublicationState, SlugQuery,
};

/// Thread-safe in-memory entity store
///
/// Useful for testing and development. Entries are grouped per content type
/// and never persisted.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    entries: RwLock<HashMap<ContentTypeUid, Vec<Entity>>>,
}

impl InMemoryEntityStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with entries for one content type
    pub fn with_entities(mut self, uid: ContentTypeUid, entities: Vec<Entity>) -> Self {
        self.entries
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(uid)
            .or_default()
            .extend(entities);
        self
    }

    /// Parse seed JSON of the form `{ "<uid>": [ { "id": 1, ... } ] }`
    pub fn from_seed(raw: &str) -> Result<Self, DomainError> {
        let seed: HashMap<ContentTypeUid, Vec<Entity>> = serde_json::from_str(raw)
            .map_err(|e| DomainError::configuration(format!("Invalid seed data: {}", e)))?;

        Ok(Self {
            entries: RwLock::new(seed),
        })
    }

    /// Load seed JSON from a file
    pub async fn load_seed(path: &Path) -> Result<Self, DomainError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read seed data from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let store = Self::from_seed(&raw)?;

        info!(
            path = %path.display(),
            entities = store.len()?,
            "Loaded seed entities"
        );

        Ok(store)
    }

    /// Total number of stored entries
    pub fn len(&self) -> Result<usize, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.values().map(Vec::len).sum())
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }
}

/// Whether `state` restricts results to published entries
fn published_only(state: Option<&PublicationState>) -> Result<bool, DomainError> {
    match state.map(PublicationState::as_str) {
        None | Some(PublicationState::PREVIEW) => Ok(false),
        Some(PublicationState::LIVE) => Ok(true),
        Some(other) => Err(DomainError::validation(format!(
            "Invalid publicationState. Expected one of 'preview','live' received: {}.",
            other
        ))),
    }
}

fn matches_filters(entity: &Entity, query: &SlugQuery) -> bool {
    query
        .filters
        .iter()
        .all(|(field, value)| entity.text(field) == Some(value.as_str()))
}

#[async_trait]
impl EntityLookup for InMemoryEntityStore {
    async fn find_one(
        &self,
        uid: &ContentTypeUid,
        query: &SlugQuery,
    ) -> Result<Option<Entity>, DomainError> {
        let published_only = published_only(query.publication_state.as_ref())?;
        let entries = self.entries.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let found = entries
            .get(uid)
            .into_iter()
            .flatten()
            .filter(|entity| !published_only || entity.is_published())
            .filter(|entity| matches_filters(entity, query))
            .min_by_key(|entity| entity.id)
            .cloned();

        debug!(uid = %uid, found = found.is_some(), "Entity lookup");

        Ok(found)
    }
}

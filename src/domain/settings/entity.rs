//! Slug settings and the resolved model mapping

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::content_type::{ContentTypeDefinition, ContentTypeUid};

/// Slug settings for a single content type, keyed by model name in [`SlugSettings`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugFieldSettings {
    /// Attribute holding the slug
    pub field: String,

    /// Attribute the slug is generated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
}

impl SlugFieldSettings {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            references: None,
        }
    }

    pub fn with_references(mut self, references: impl Into<String>) -> Self {
        self.references = Some(references.into());
        self
    }
}

/// Slug plugin settings as configured by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugSettings {
    /// Slug-eligible content types by model name
    #[serde(default)]
    pub content_types: BTreeMap<String, SlugFieldSettings>,
}

impl SlugSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_type(mut self, model_name: impl Into<String>, field: SlugFieldSettings) -> Self {
        self.content_types.insert(model_name.into(), field);
        self
    }
}

/// A slug-eligible content model
#[derive(Debug, Clone, PartialEq)]
pub struct SlugModelConfig {
    pub uid: ContentTypeUid,
    pub field: String,
    pub references: Option<String>,
    pub content_type: ContentTypeDefinition,
}

impl SlugModelConfig {
    pub fn new(content_type: ContentTypeDefinition, field: impl Into<String>) -> Self {
        Self {
            uid: content_type.uid.clone(),
            field: field.into(),
            references: None,
            content_type,
        }
    }

    pub fn with_references(mut self, references: impl Into<String>) -> Self {
        self.references = Some(references.into());
        self
    }

    pub fn draft_and_publish(&self) -> bool {
        self.content_type.draft_and_publish()
    }
}

/// Mapping from model key to slug model configuration
///
/// Entries registered through [`SlugModels::register`] are reachable both by
/// model name and by UID; both keys share one configuration.
#[derive(Debug, Clone, Default)]
pub struct SlugModels {
    models: HashMap<String, Arc<SlugModelConfig>>,
}

impl SlugModels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a configuration under its model name and its UID
    pub fn register(&mut self, config: SlugModelConfig) {
        let config = Arc::new(config);

        self.models.insert(
            config.content_type.model_name().to_string(),
            Arc::clone(&config),
        );
        self.models.insert(config.uid.to_string(), config);
    }

    /// Insert a configuration under an explicit key only
    pub fn insert(&mut self, key: impl Into<String>, config: SlugModelConfig) {
        self.models.insert(key.into(), Arc::new(config));
    }

    pub fn with_model(mut self, key: impl Into<String>, config: SlugModelConfig) -> Self {
        self.insert(key, config);
        self
    }

    /// Case-sensitive lookup by model name or UID
    pub fn get(&self, key: &str) -> Option<&SlugModelConfig> {
        self.models.get(key).map(Arc::as_ref)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.models.contains_key(key)
    }

    /// Keys accepted by the resolver, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.models.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of distinct content types
    pub fn model_count(&self) -> usize {
        self.models
            .values()
            .map(|config| &config.uid)
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

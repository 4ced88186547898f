//! Settings provider backed by application configuration

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::info;

use crate::domain::{
    build_slug_models, ContentTypeRegistry, DomainError, SettingsProvider, SlugModels,
    SlugSettings,
};

/// Resolves configured slug settings against the content type registry
///
/// The model mapping is rebuilt whenever settings are replaced; readers
/// always observe the latest mapping.
#[derive(Debug)]
pub struct ConfiguredSettingsProvider {
    registry: Arc<ContentTypeRegistry>,
    models: RwLock<SlugModels>,
}

impl ConfiguredSettingsProvider {
    pub fn new(registry: Arc<ContentTypeRegistry>, settings: SlugSettings) -> Self {
        let models = build_slug_models(&registry, &settings);

        info!(
            models = models.model_count(),
            "Slug models resolved from settings"
        );

        Self {
            registry,
            models: RwLock::new(models),
        }
    }

    /// Swap in new settings; subsequent lookups use the new mapping
    pub fn replace_settings(&self, settings: SlugSettings) -> Result<(), DomainError> {
        let models = build_slug_models(&self.registry, &settings);
        let mut current = self.models.write().map_err(|e| {
            DomainError::internal(format!("Failed to acquire settings write lock: {}", e))
        })?;

        info!(
            models = models.model_count(),
            "Slug settings replaced"
        );

        *current = models;
        Ok(())
    }
}

#[async_trait]
impl SettingsProvider for ConfiguredSettingsProvider {
    async fn get_models(&self) -> Result<SlugModels, DomainError> {
        let models = self.models.read().map_err(|e| {
            DomainError::internal(format!("Failed to acquire settings read lock: {}", e))
        })?;

        Ok(models.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AttributeDefinition, AttributeType, ContentTypeDefinition, ContentTypeUid,
        SlugFieldSettings,
    };

    fn registry() -> Arc<ContentTypeRegistry> {
        Arc::new(
            ContentTypeRegistry::new(vec![
                ContentTypeDefinition::new(
                    ContentTypeUid::new("api::article.article").unwrap(),
                    "article",
                )
                .with_attribute("slug", AttributeDefinition::new(AttributeType::Uid)),
                ContentTypeDefinition::new(ContentTypeUid::new("api::page.page").unwrap(), "page")
                    .with_attribute("slug", AttributeDefinition::new(AttributeType::String)),
            ])
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_get_models_reflects_settings() {
        let provider = ConfiguredSettingsProvider::new(
            registry(),
            SlugSettings::new().with_content_type("article", SlugFieldSettings::new("slug")),
        );

        let models = provider.get_models().await.unwrap();

        assert!(models.contains("article"));
        assert!(!models.contains("page"));
    }

    #[tokio::test]
    async fn test_replace_settings_is_visible_to_next_read() {
        let provider = ConfiguredSettingsProvider::new(registry(), SlugSettings::new());
        assert!(provider.get_models().await.unwrap().is_empty());

        provider
            .replace_settings(
                SlugSettings::new().with_content_type("page", SlugFieldSettings::new("slug")),
            )
            .unwrap();

        let models = provider.get_models().await.unwrap();
        assert!(models.contains("page"));
        assert!(models.contains("api::page.page"));
        assert_eq!(models.model_count(), 1);
    }
}

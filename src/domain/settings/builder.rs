//! Builds the slug model mapping from registered content types and settings

use tracing::warn;

use super::entity::{SlugModelConfig, SlugModels, SlugSettings};
use crate::domain::content_type::ContentTypeRegistry;

/// Resolve settings against the registry
///
/// Content types without settings are not slug-eligible. Settings naming a
/// missing or non-textual slug field, or a missing reference field, are
/// skipped with a warning instead of failing the whole mapping.
pub fn build_slug_models(registry: &ContentTypeRegistry, settings: &SlugSettings) -> SlugModels {
    let mut models = SlugModels::new();

    for content_type in registry.iter() {
        let Some(field_settings) = settings.content_types.get(content_type.model_name()) else {
            continue;
        };

        let field_is_valid = content_type
            .attribute(&field_settings.field)
            .is_some_and(|attribute| attribute.kind.is_textual());

        if !field_is_valid {
            warn!(
                uid = %content_type.uid,
                field = %field_settings.field,
                "Skipping slug registration, invalid field provided"
            );
            continue;
        }

        if let Some(references) = &field_settings.references {
            if !content_type.has_attribute(references) {
                warn!(
                    uid = %content_type.uid,
                    references = %references,
                    "Skipping slug registration, invalid reference field provided"
                );
                continue;
            }
        }

        let mut config = SlugModelConfig::new(content_type.clone(), field_settings.field.clone());

        if let Some(references) = &field_settings.references {
            config = config.with_references(references.clone());
        }

        models.register(config);
    }

    for model_name in settings.content_types.keys() {
        if registry.find_by_model_name(model_name).is_none() {
            warn!(model_name = %model_name, "Slug settings reference an unknown content type");
        }
    }

    models
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content_type::{
        AttributeDefinition, AttributeType, ContentTypeDefinition, ContentTypeUid,
    };
    use crate::domain::settings::SlugFieldSettings;

    fn registry() -> ContentTypeRegistry {
        ContentTypeRegistry::new(vec![
            ContentTypeDefinition::new(ContentTypeUid::new("api::article.article").unwrap(), "article")
                .with_draft_and_publish(true)
                .with_attribute("title", AttributeDefinition::new(AttributeType::String))
                .with_attribute("urlSlug", AttributeDefinition::new(AttributeType::Uid))
                .with_attribute("views", AttributeDefinition::new(AttributeType::Integer)),
            ContentTypeDefinition::new(ContentTypeUid::new("api::page.page").unwrap(), "page")
                .with_attribute("slug", AttributeDefinition::new(AttributeType::String)),
            ContentTypeDefinition::new(ContentTypeUid::new("api::tag.tag").unwrap(), "tag")
                .with_attribute("name", AttributeDefinition::new(AttributeType::String)),
        ])
        .unwrap()
    }

    #[test]
    fn test_only_configured_types_are_eligible() {
        let settings = SlugSettings::new()
            .with_content_type("article", SlugFieldSettings::new("urlSlug").with_references("title"))
            .with_content_type("page", SlugFieldSettings::new("slug"));

        let models = build_slug_models(&registry(), &settings);

        assert_eq!(models.model_count(), 2);
        assert!(models.contains("article"));
        assert!(models.contains("api::article.article"));
        assert!(models.contains("page"));
        assert!(!models.contains("tag"));

        let article = models.get("article").unwrap();
        assert_eq!(article.field, "urlSlug");
        assert_eq!(article.references.as_deref(), Some("title"));
        assert!(article.draft_and_publish());
    }

    #[test]
    fn test_missing_field_is_skipped() {
        let settings = SlugSettings::new().with_content_type("article", SlugFieldSettings::new("slug"));

        assert!(build_slug_models(&registry(), &settings).is_empty());
    }

    #[test]
    fn test_non_textual_field_is_skipped() {
        let settings = SlugSettings::new().with_content_type("article", SlugFieldSettings::new("views"));

        assert!(build_slug_models(&registry(), &settings).is_empty());
    }

    #[test]
    fn test_missing_reference_is_skipped() {
        let settings = SlugSettings::new().with_content_type(
            "article",
            SlugFieldSettings::new("urlSlug").with_references("headline"),
        );

        assert!(build_slug_models(&registry(), &settings).is_empty());
    }

    #[test]
    fn test_unknown_model_name_is_ignored() {
        let settings = SlugSettings::new().with_content_type("post", SlugFieldSettings::new("slug"));

        assert!(build_slug_models(&registry(), &settings).is_empty());
    }
}

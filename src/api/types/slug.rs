//! Slug lookup REST types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{ContentTypeDefinition, Entity};

/// Query parameters of `GET /api/slugify/slugs/{model_name}/{slug}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindSlugParams {
    pub publication_state: Option<String>,
}

/// `{ id, attributes }` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlugEntityData {
    pub id: u64,
    pub attributes: Map<String, Value>,
}

/// Successful slug lookup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlugResponse {
    pub data: SlugEntityData,
    #[serde(default)]
    pub meta: Map<String, Value>,
}

impl SlugResponse {
    /// Wrap an entity, dropping attributes the content type does not expose
    pub fn from_entity(entity: Entity, content_type: Option<&ContentTypeDefinition>) -> Self {
        let attributes = entity
            .attributes
            .into_iter()
            .filter(|(name, _)| {
                content_type
                    .and_then(|ct| ct.attribute(name))
                    .is_none_or(|attribute| attribute.is_public())
            })
            .collect();

        Self {
            data: SlugEntityData {
                id: entity.id,
                attributes,
            },
            meta: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttributeDefinition, AttributeType, ContentTypeUid};

    #[test]
    fn test_from_entity_drops_hidden_attributes() {
        let content_type = ContentTypeDefinition::new(ContentTypeUid::new("api::article.article").unwrap(), "article")
            .with_attribute("slug", AttributeDefinition::new(AttributeType::Uid))
            .with_attribute("notes", AttributeDefinition::new(AttributeType::Text).private());

        let entity = Entity::new(5)
            .with_attribute("slug", "hello")
            .with_attribute("notes", "internal")
            .with_attribute("createdAt", "2024-01-01T00:00:00.000Z");

        let response = SlugResponse::from_entity(entity, Some(&content_type));

        assert_eq!(response.data.id, 5);
        assert!(response.data.attributes.contains_key("slug"));
        assert!(response.data.attributes.contains_key("createdAt"));
        assert!(!response.data.attributes.contains_key("notes"));
    }

    #[test]
    fn test_params_use_camel_case() {
        let params: FindSlugParams = serde_json::from_str(r#"{"publicationState":"preview"}"#).unwrap();
        assert_eq!(params.publication_state.as_deref(), Some("preview"));
    }
}

//! Dynamic GraphQL schema assembly

use std::sync::Arc;

use async_graphql::Value;
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, Schema, TypeRef};

use super::content_types::{content_type_objects, scalars};
use super::find_slug::{find_slug_types, SchemaArtifact};
use crate::api::state::SlugServiceTrait;
use crate::config::GraphqlConfig;
use crate::domain::{ContentTypeRegistry, DomainError, SlugModels};

pub const QUERY: &str = "Query";

/// Build the schema for the registered content types and current slug models
///
/// The union membership is fixed here; later settings changes affect which
/// model names resolve but not the shape of the schema.
pub fn build_schema(
    registry: &ContentTypeRegistry,
    models: &SlugModels,
    service: Arc<dyn SlugServiceTrait>,
    config: &GraphqlConfig,
) -> Result<Schema, DomainError> {
    let mut query = Object::new(QUERY).field(version_field());
    let mut builder = Schema::build(QUERY, None, None);

    for scalar in scalars() {
        builder = builder.register(scalar);
    }

    for object in content_type_objects(registry) {
        builder = builder.register(object);
    }

    for artifact in find_slug_types(registry, models, service) {
        match artifact {
            SchemaArtifact::Union(union) => builder = builder.register(union),
            SchemaArtifact::QueryField(field) => query = query.field(field),
        }
    }

    builder
        .register(query)
        .limit_depth(config.max_depth)
        .limit_complexity(config.max_complexity)
        .finish()
        .map_err(|e| DomainError::configuration(format!("Failed to build GraphQL schema: {}", e)))
}

fn version_field() -> Field {
    Field::new("version", TypeRef::named_nn(TypeRef::STRING), |_| {
        FieldFuture::new(async move {
            Ok(Some(FieldValue::value(Value::from(env!("CARGO_PKG_VERSION").to_string()))))
        })
    })
    .description("Gateway version")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lookup::MockEntityLookup;
    use crate::domain::settings::MockSettingsProvider;
    use crate::domain::{
        AttributeDefinition, AttributeType, ContentTypeDefinition, ContentTypeUid, Entity, PublicationState,
        SlugModelConfig,
    };
    use crate::infrastructure::services::SlugService;
    use serde_json::json;

    fn registry() -> ContentTypeRegistry {
        ContentTypeRegistry::new(vec![
            ContentTypeDefinition::new(ContentTypeUid::new("api::article.article").unwrap(), "article")
                .with_draft_and_publish(true)
                .with_attribute("title", AttributeDefinition::new(AttributeType::String))
                .with_attribute("slug", AttributeDefinition::new(AttributeType::Uid))
                .with_attribute("secret", AttributeDefinition::new(AttributeType::String).private()),
            ContentTypeDefinition::new(ContentTypeUid::new("api::tag.tag").unwrap(), "tag")
                .with_attribute("slug", AttributeDefinition::new(AttributeType::Uid)),
            ContentTypeDefinition::new(ContentTypeUid::new("api::page.page").unwrap(), "page"),
        ])
        .unwrap()
    }

    fn models(registry: &ContentTypeRegistry) -> SlugModels {
        let mut models = SlugModels::new();

        for uid in ["api::article.article", "api::tag.tag"] {
            let content_type = registry.get(&ContentTypeUid::new(uid).unwrap()).unwrap();
            models.register(SlugModelConfig::new(content_type.clone(), "slug"));
        }

        models
    }

    fn schema_with(lookup: MockEntityLookup) -> Schema {
        let registry = registry();
        let models = models(&registry);

        let mut settings = MockSettingsProvider::new();
        let current = models.clone();
        settings.expect_get_models().returning(move || Ok(current.clone()));

        let service = Arc::new(SlugService::new(Arc::new(settings), Arc::new(lookup)));

        build_schema(&registry, &models, service, &GraphqlConfig::default()).unwrap()
    }

    #[test]
    fn test_sdl_declares_union_of_eligible_models() {
        let sdl = schema_with(MockEntityLookup::new()).sdl();

        assert!(sdl.contains("union FindSlugResponse = ArticleEntityResponse | TagEntityResponse"));
        assert!(sdl.contains("findSlug("));
        assert!(sdl.contains("publicationState: String"));
        assert!(sdl.contains("): FindSlugResponse"));
        assert!(sdl.contains("type PageEntityResponse"));
        assert!(!sdl.contains("secret"));
    }

    #[test]
    fn test_no_find_slug_without_models() {
        let registry = registry();
        let service = Arc::new(SlugService::new(
            Arc::new(MockSettingsProvider::new()),
            Arc::new(MockEntityLookup::new()),
        ));

        let sdl = build_schema(&registry, &SlugModels::new(), service, &GraphqlConfig::default())
            .unwrap()
            .sdl();

        assert!(!sdl.contains("FindSlugResponse"));
        assert!(!sdl.contains("findSlug"));
        assert!(sdl.contains("version: String!"));
    }

    #[tokio::test]
    async fn test_find_slug_resolves_union_member() {
        let mut lookup = MockEntityLookup::new();
        lookup.expect_find_one().returning(|_, _| {
            Ok(Some(
                Entity::new(4)
                    .with_attribute("slug", "rust")
                    .with_attribute("createdAt", "2024-01-01T00:00:00.000Z"),
            ))
        });

        let response = schema_with(lookup)
            .execute(
                r#"{
                    findSlug(modelName: "tag", slug: "rust") {
                        __typename
                        ... on TagEntityResponse { data { id attributes { slug createdAt } } }
                    }
                }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({
                "findSlug": {
                    "__typename": "TagEntityResponse",
                    "data": {
                        "id": "4",
                        "attributes": { "slug": "rust", "createdAt": "2024-01-01T00:00:00.000Z" }
                    }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_find_slug_missing_entity_has_null_data() {
        let mut lookup = MockEntityLookup::new();
        lookup.expect_find_one().returning(|_, _| Ok(None));

        let response = schema_with(lookup)
            .execute(
                r#"{ findSlug(modelName: "article", slug: "nope") {
                    __typename
                    ... on ArticleEntityResponse { data { id } }
                } }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "findSlug": { "__typename": "ArticleEntityResponse", "data": null } })
        );
    }

    #[tokio::test]
    async fn test_find_slug_unknown_model_is_user_error() {
        let mut lookup = MockEntityLookup::new();
        lookup.expect_find_one().never();

        let response = schema_with(lookup)
            .execute(r#"{ findSlug(modelName: "Unknown", slug: "x") { __typename } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            "Unknown model name not found, all models must be defined in the settings and are case sensitive."
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
    }

    #[tokio::test]
    async fn test_find_slug_without_model_name_is_user_error() {
        let mut lookup = MockEntityLookup::new();
        lookup.expect_find_one().never();

        let response = schema_with(lookup)
            .execute(r#"{ findSlug(slug: "rust") { __typename } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.starts_with(" model name not found"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
        assert_eq!(json["data"]["findSlug"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_find_slug_null_slug_searches_empty_string() {
        let mut lookup = MockEntityLookup::new();
        lookup
            .expect_find_one()
            .withf(|uid, query| {
                uid.as_str() == "api::tag.tag"
                    && query.filters.get("slug").map(String::as_str) == Some("")
            })
            .times(1)
            .returning(|_, _| Ok(None));

        let response = schema_with(lookup)
            .execute(
                r#"{ findSlug(modelName: "tag", slug: null) {
                    __typename
                    ... on TagEntityResponse { data { id } }
                } }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "findSlug": { "__typename": "TagEntityResponse", "data": null } })
        );
    }

    #[tokio::test]
    async fn test_find_slug_null_publication_state_queries_live() {
        let mut lookup = MockEntityLookup::new();
        lookup
            .expect_find_one()
            .withf(|_, query| query.publication_state == Some(PublicationState::live()))
            .times(1)
            .returning(|_, _| Ok(None));

        let response = schema_with(lookup)
            .execute(
                r#"{ findSlug(modelName: "article", slug: "draft", publicationState: null) {
                    __typename
                } }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "findSlug": { "__typename": "ArticleEntityResponse" } })
        );
    }

    #[tokio::test]
    async fn test_find_slug_empty_publication_state_queries_live() {
        let mut lookup = MockEntityLookup::new();
        lookup
            .expect_find_one()
            .withf(|_, query| query.publication_state == Some(PublicationState::live()))
            .times(1)
            .returning(|_, _| Ok(None));

        let response = schema_with(lookup)
            .execute(r#"{ findSlug(modelName: "article", slug: "draft", publicationState: "") { __typename } }"#)
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }
}

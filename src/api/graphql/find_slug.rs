//! `FindSlugResponse` union and the `findSlug` query field

use std::sync::Arc;

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputValue, ResolverContext, TypeRef, Union,
};
use tracing::{debug, info};

use super::error::to_graphql_error;
use crate::api::state::SlugServiceTrait;
use crate::domain::{ContentTypeRegistry, SlugModels, UnionMembership, FIND_SLUG_RESPONSE};

pub const FIND_SLUG_FIELD: &str = "findSlug";

/// A schema extension produced for `findSlug`
pub enum SchemaArtifact {
    /// Registered as a standalone type
    Union(Union),
    /// Added to the `Query` root
    QueryField(Field),
}

/// Union and query field for `findSlug`
///
/// Returns nothing when no registered content type is slug-eligible, so the
/// schema never carries an empty union.
pub fn find_slug_types(
    registry: &ContentTypeRegistry,
    models: &SlugModels,
    service: Arc<dyn SlugServiceTrait>,
) -> Vec<SchemaArtifact> {
    let membership = UnionMembership::derive(registry, models);

    if membership.is_empty() {
        info!("No slug-eligible content types, {} not registered", FIND_SLUG_FIELD);
        return Vec::new();
    }

    let union = membership
        .type_names()
        .into_iter()
        .fold(
            Union::new(FIND_SLUG_RESPONSE).description("Union Type of all registered slug content types"),
            |union, member| union.possible_type(member),
        );

    info!(
        members = ?membership.type_names(),
        "Registered {}",
        FIND_SLUG_RESPONSE
    );

    vec![
        SchemaArtifact::Union(union),
        SchemaArtifact::QueryField(find_slug_field(Arc::new(membership), service)),
    ]
}

fn find_slug_field(membership: Arc<UnionMembership>, service: Arc<dyn SlugServiceTrait>) -> Field {
    Field::new(FIND_SLUG_FIELD, TypeRef::named(FIND_SLUG_RESPONSE), move |ctx| {
        let membership = membership.clone();
        let service = service.clone();

        FieldFuture::new(async move {
            let model_name = string_argument(&ctx, "modelName")?.unwrap_or_default();
            let slug = string_argument(&ctx, "slug")?.unwrap_or_default();
            let publication_state = string_argument(&ctx, "publicationState")?;

            let response = service
                .find_slug(&model_name, &slug, publication_state.as_deref())
                .await
                .map_err(to_graphql_error)?;

            let type_name = membership
                .classify(response.resource_uid())
                .map_err(to_graphql_error)?
                .to_string();

            debug!(model_name = %model_name, type_name = %type_name, "Resolved findSlug");

            Ok(Some(FieldValue::owned_any(response).with_type(type_name)))
        })
    })
    .argument(InputValue::new("modelName", TypeRef::named(TypeRef::STRING)).description("The model name of the content type"))
    .argument(InputValue::new("slug", TypeRef::named(TypeRef::STRING)).description("The slug to query for"))
    .argument(
        InputValue::new("publicationState", TypeRef::named(TypeRef::STRING))
            .description("The publication state of the entry"),
    )
}

/// Nullable string argument; an explicit `null` counts as absent
fn string_argument(ctx: &ResolverContext<'_>, name: &str) -> async_graphql::Result<Option<String>> {
    match ctx.args.get(name) {
        Some(value) if !value.is_null() => Ok(Some(value.string()?.to_string())),
        _ => Ok(None),
    }
}

//! Slug lookup endpoint handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, FindSlugParams, SlugResponse};

/// GET /api/slugify/slugs/{model_name}/{slug}
pub async fn find_slug(
    State(state): State<AppState>,
    Path((model_name, slug)): Path<(String, String)>,
    Query(params): Query<FindSlugParams>,
) -> Result<Json<SlugResponse>, ApiError> {
    debug!(model_name = %model_name, slug = %slug, "Finding entity by slug");

    let response = state
        .slug_service
        .find_slug(&model_name, &slug, params.publication_state.as_deref())
        .await
        .map_err(ApiError::from)?;

    let content_type = state.registry.get(response.resource_uid());

    let entity = response
        .into_data()
        .ok_or_else(|| ApiError::not_found("Not Found").with_detail("slug", slug.as_str()))?;

    Ok(Json(SlugResponse::from_entity(entity, content_type)))
}

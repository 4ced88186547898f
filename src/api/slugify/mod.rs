//! Slugify REST endpoints

pub mod slugs;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create the slugify router, nested under `/api/slugify`
pub fn create_slugify_router() -> Router<AppState> {
    Router::new().route("/slugs/{model_name}/{slug}", get(slugs::find_slug))
}

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::graphql;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::slugify;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    let graphql_route = if state.graphql.graphiql {
        post(graphql::graphql_handler).get(graphql::graphiql_handler)
    } else {
        post(graphql::graphql_handler)
    };

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // GraphQL endpoint, GraphiQL on GET when enabled
        .route(&state.graphql.path, graphql_route)
        // REST mirror of findSlug
        .nest("/api/slugify", slugify::create_slugify_router())
        .with_state(state)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

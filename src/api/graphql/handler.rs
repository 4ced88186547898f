//! GraphQL HTTP handlers

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;

/// Execute a GraphQL request against the dynamic schema
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    debug!(operation = ?request.operation_name, "Executing GraphQL request");

    Json(state.schema.execute(request).await)
}

/// Serve the GraphiQL IDE pointed at the configured endpoint
pub async fn graphiql_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(&state.graphql.path).finish())
}

//! Slug Lookup Gateway
//!
//! Resolves a content entry from a model name and a slug through a single
//! polymorphic GraphQL query:
//! - `FindSlugResponse` union over every slug-enabled content type
//! - `findSlug(modelName, slug, publicationState)` resolver
//! - REST mirror under `/api/slugify`

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::graphql::build_schema;
use api::state::AppState;
use config::GraphqlConfig;
use domain::{ContentTypeRegistry, DomainError, UnionMembership};
use infrastructure::content_type::load_content_types;
use infrastructure::lookup::InMemoryEntityStore;
use infrastructure::services::SlugService;
use infrastructure::settings::ConfiguredSettingsProvider;

/// Create application state from configuration
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let registry = Arc::new(load_content_types(&config.content.content_types_path).await?);

    let settings = Arc::new(ConfiguredSettingsProvider::new(
        registry.clone(),
        config.slugify.clone(),
    ));

    let store = match &config.content.seed_path {
        Some(path) => InMemoryEntityStore::load_seed(path).await?,
        None => InMemoryEntityStore::new(),
    };

    let service = Arc::new(SlugService::new(settings, Arc::new(store)));

    Ok(build_app_state(registry, service, &config.graphql).await?)
}

/// Build the schema for the current slug models and wrap everything in `AppState`
pub async fn build_app_state(
    registry: Arc<ContentTypeRegistry>,
    service: Arc<SlugService>,
    graphql: &GraphqlConfig,
) -> Result<AppState, DomainError> {
    let models = service.models().await?;
    let membership = UnionMembership::derive(&registry, &models);

    info!(
        slug_models = models.model_count(),
        union_members = ?membership.type_names(),
        "Building GraphQL schema"
    );

    let schema = build_schema(&registry, &models, service.clone(), graphql)?;

    Ok(AppState {
        slug_service: service,
        registry,
        schema,
        graphql: graphql.clone(),
    })
}

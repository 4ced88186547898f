//! Application state for shared services

use std::sync::Arc;

use async_graphql::dynamic::Schema;

use crate::config::GraphqlConfig;
use crate::domain::{ContentTypeRegistry, DomainError, EntityResponse, SlugModels};
use crate::infrastructure::services::SlugService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub slug_service: Arc<dyn SlugServiceTrait>,
    pub registry: Arc<ContentTypeRegistry>,
    pub schema: Schema,
    pub graphql: GraphqlConfig,
}

/// Trait for slug service operations
#[async_trait::async_trait]
pub trait SlugServiceTrait: Send + Sync {
    async fn models(&self) -> Result<SlugModels, DomainError>;
    async fn find_slug(
        &self,
        model_name: &str,
        slug: &str,
        publication_state: Option<&str>,
    ) -> Result<EntityResponse, DomainError>;
}

#[async_trait::async_trait]
impl SlugServiceTrait for SlugService {
    async fn models(&self) -> Result<SlugModels, DomainError> {
        SlugService::models(self).await
    }

    async fn find_slug(
        &self,
        model_name: &str,
        slug: &str,
        publication_state: Option<&str>,
    ) -> Result<EntityResponse, DomainError> {
        SlugService::find_slug(self, model_name, slug, publication_state).await
    }
}

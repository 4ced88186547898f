//! Entity lookup trait

use async_trait::async_trait;

use super::entity::Entity;
use super::query::SlugQuery;
use crate::domain::content_type::ContentTypeUid;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Single-entity lookup against a content type's entries
///
/// Implementations return at most one entity per query; slug uniqueness is
/// the store's concern.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EntityLookup: Send + Sync {
    async fn find_one(
        &self,
        uid: &ContentTypeUid,
        query: &SlugQuery,
    ) -> Result<Option<Entity>, DomainError>;
}

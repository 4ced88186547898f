//! Settings provider trait

use async_trait::async_trait;

use super::entity::SlugModels;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Source of the current slug model mapping
///
/// Implementations must reflect configuration changes; callers re-read the
/// mapping on every request instead of caching it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Current mapping of model names and UIDs to slug model configuration
    async fn get_models(&self) -> Result<SlugModels, DomainError>;
}

//! Slug service - resolves a model name and slug to a single entity

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::{
    to_entity_response, DomainError, EntityLookup, EntityResponse, PublicationState,
    SettingsProvider, SlugModelConfig, SlugModels, SlugQuery,
};
use crate::infrastructure::observability::{record_slug_lookup, LookupOutcome};

/// Resolves `findSlug` requests against the current model mapping
pub struct SlugService {
    settings: Arc<dyn SettingsProvider>,
    lookup: Arc<dyn EntityLookup>,
}

impl std::fmt::Debug for SlugService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlugService").finish_non_exhaustive()
    }
}

impl SlugService {
    pub fn new(settings: Arc<dyn SettingsProvider>, lookup: Arc<dyn EntityLookup>) -> Self {
        Self { settings, lookup }
    }

    /// Current slug model mapping
    pub async fn models(&self) -> Result<SlugModels, DomainError> {
        self.settings.get_models().await
    }

    /// Find the entity of `model_name` whose slug field equals `slug`
    ///
    /// The mapping is re-read on every call. A missing entity yields an empty
    /// response, not an error.
    pub async fn find_slug(
        &self,
        model_name: &str,
        slug: &str,
        publication_state: Option<&str>,
    ) -> Result<EntityResponse, DomainError> {
        let start = Instant::now();
        let models = self.settings.get_models().await?;

        let Some(model) = models.get(model_name) else {
            warn!(model_name = %model_name, "Slug lookup for unknown model");
            record_slug_lookup("unknown", LookupOutcome::Rejected, start.elapsed());

            return Err(DomainError::validation(format!(
                "{} model name not found, all models must be defined in the settings and are case sensitive.",
                model_name
            )));
        };

        let query = build_slug_query(model, slug, publication_state);

        debug!(
            model_name = %model_name,
            uid = %model.uid,
            field = %model.field,
            publication_state = ?query.publication_state,
            "Resolving slug"
        );

        let entity = match self.lookup.find_one(&model.uid, &query).await {
            Ok(entity) => entity,
            Err(e) => {
                record_slug_lookup(model.uid.as_str(), LookupOutcome::Failed, start.elapsed());
                return Err(e);
            }
        };

        let outcome = if entity.is_some() {
            LookupOutcome::Found
        } else {
            LookupOutcome::Missing
        };
        record_slug_lookup(model.uid.as_str(), outcome, start.elapsed());

        Ok(to_entity_response(entity, model.uid.clone()))
    }
}

/// Build the lookup query for a slug
///
/// Draft/publish content types get the requested publication state, or
/// `live` when none (or an empty one) was requested. Other content types
/// never carry one.
pub fn build_slug_query(
    model: &SlugModelConfig,
    slug: &str,
    publication_state: Option<&str>,
) -> SlugQuery {
    let query = SlugQuery::new(model.field.clone(), slug);

    if !model.draft_and_publish() {
        return query;
    }

    let state = publication_state
        .filter(|hint| !hint.is_empty())
        .map(PublicationState::new)
        .unwrap_or_else(PublicationState::live);

    query.with_publication_state(state)
}

//! Slug lookup query value objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Publication state requested for draft/publish content types
///
/// Kept as the raw requested value; the lookup backend decides which values
/// it understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicationState(String);

impl PublicationState {
    pub const LIVE: &'static str = "live";
    pub const PREVIEW: &'static str = "preview";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Published entries only
    pub fn live() -> Self {
        Self(Self::LIVE.to_string())
    }

    /// Draft and published entries
    pub fn preview() -> Self {
        Self(Self::PREVIEW.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_live(&self) -> bool {
        self.0 == Self::LIVE
    }
}

impl std::fmt::Display for PublicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-request lookup query: `{ filters: { [field]: slug }, publicationState? }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugQuery {
    pub filters: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_state: Option<PublicationState>,
}

impl SlugQuery {
    /// Query matching `field == slug`
    pub fn new(field: impl Into<String>, slug: impl Into<String>) -> Self {
        let mut filters = BTreeMap::new();
        filters.insert(field.into(), slug.into());

        Self {
            filters,
            publication_state: None,
        }
    }

    pub fn with_publication_state(mut self, state: PublicationState) -> Self {
        self.publication_state = Some(state);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_without_publication_state() {
        let query = SlugQuery::new("slug", "about-us");

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "filters": { "slug": "about-us" } })
        );
    }

    #[test]
    fn test_serializes_with_publication_state() {
        let query = SlugQuery::new("urlSlug", "my-post").with_publication_state(PublicationState::live());

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "filters": { "urlSlug": "my-post" }, "publicationState": "live" })
        );
    }

    #[test]
    fn test_publication_state_values() {
        assert!(PublicationState::live().is_live());
        assert!(!PublicationState::preview().is_live());
        assert_eq!(PublicationState::new("draft").as_str(), "draft");
    }
}

//! `FindSlugResponse` union membership
//!
//! Membership is derived once from the registered content types and the slug
//! model mapping. The same member list drives both the union definition and
//! the classification of resolved entities, so the two cannot drift apart.

use super::content_type::{ContentTypeRegistry, ContentTypeUid};
use super::naming::entity_response_type_name;
use super::settings::SlugModels;
use super::DomainError;

/// Name of the polymorphic `findSlug` result type
pub const FIND_SLUG_RESPONSE: &str = "FindSlugResponse";

/// One union branch: the entity-response type of a slug-eligible content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionMember {
    type_name: String,
    uid: ContentTypeUid,
}

impl UnionMember {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Immutable `(type name, uid)` list backing the union
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnionMembership {
    members: Vec<UnionMember>,
}

impl UnionMembership {
    /// Every registered content type whose UID is a key of `models`, in registration order
    pub fn derive(registry: &ContentTypeRegistry, models: &SlugModels) -> Self {
        let members = registry
            .iter()
            .filter(|content_type| models.contains(content_type.uid.as_str()))
            .map(|content_type| UnionMember {
                type_name: entity_response_type_name(content_type),
                uid: content_type.uid.clone(),
            })
            .collect();

        Self { members }
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.members.iter().map(UnionMember::type_name).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Union branch for a result produced by `uid`
    ///
    /// A UID outside the membership means the model mapping changed after the
    /// union was built; this is reported as a classification error, never
    /// mapped to some other branch.
    pub fn classify(&self, uid: &ContentTypeUid) -> Result<&str, DomainError> {
        self.members
            .iter()
            .find(|member| &member.uid == uid)
            .map(UnionMember::type_name)
            .ok_or_else(|| {
                DomainError::classification(format!(
                    "Content type '{}' is not a member of {}",
                    uid, FIND_SLUG_RESPONSE
                ))
            })
    }
}

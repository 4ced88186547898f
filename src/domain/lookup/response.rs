//! Entity response wrapper

use super::entity::Entity;
use crate::domain::content_type::ContentTypeUid;

/// Lookup result tagged with the content type that produced it
///
/// The UID travels with the result so union classification does not depend
/// on the shape of the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityResponse {
    data: Option<Entity>,
    resource_uid: ContentTypeUid,
}

impl EntityResponse {
    pub fn data(&self) -> Option<&Entity> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<Entity> {
        self.data
    }

    pub fn resource_uid(&self) -> &ContentTypeUid {
        &self.resource_uid
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }
}

/// Wrap a lookup result for the response; a missing entity is not an error
pub fn to_entity_response(data: Option<Entity>, resource_uid: ContentTypeUid) -> EntityResponse {
    EntityResponse { data, resource_uid }
}

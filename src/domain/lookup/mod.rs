//! Lookup domain - Slug queries, entities and response wrapping

mod entity;
mod query;
mod repository;
mod response;

pub use entity::{Entity, PUBLISHED_AT};
pub use query::{PublicationState, SlugQuery};
pub use repository::EntityLookup;
pub use response::{to_entity_response, EntityResponse};

#[cfg(test)]
pub use repository::MockEntityLookup;

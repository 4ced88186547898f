//! Domain layer - Content types, slug settings and lookup contracts

pub mod content_type;
pub mod error;
pub mod lookup;
pub mod naming;
pub mod settings;
pub mod slug_union;

pub use content_type::{
    AttributeDefinition, AttributeType, ContentTypeDefinition, ContentTypeKind,
    ContentTypeRegistry, ContentTypeUid, ContentTypeValidationError,
};
pub use error::DomainError;
pub use lookup::{
    to_entity_response, Entity, EntityLookup, EntityResponse, PublicationState, SlugQuery,
    PUBLISHED_AT,
};
pub use naming::{entity_response_type_name, entity_type_name, type_name, RESERVED_TYPE_NAMES};
pub use settings::{
    build_slug_models, SettingsProvider, SlugFieldSettings, SlugModelConfig, SlugModels,
    SlugSettings,
};
pub use slug_union::{UnionMember, UnionMembership, FIND_SLUG_RESPONSE};

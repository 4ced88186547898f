//! Content type domain - Registered content type definitions

mod entity;
mod registry;
mod validation;

pub use entity::{
    AttributeDefinition, AttributeType, ContentTypeDefinition, ContentTypeInfo, ContentTypeKind,
    ContentTypeOptions, ContentTypeUid,
};
pub use registry::ContentTypeRegistry;
pub use validation::{
    validate_attribute_name, validate_content_type_uid, ContentTypeValidationError,
};

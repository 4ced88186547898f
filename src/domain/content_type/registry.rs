//! Registry of content types known to the gateway

use std::collections::HashSet;

use super::entity::{ContentTypeDefinition, ContentTypeUid};
use super::validation::{validate_attribute_name, ContentTypeValidationError};
use crate::domain::naming::{generated_type_names, type_name, RESERVED_TYPE_NAMES};

/// Ordered, UID-unique set of registered content types
///
/// Registration order is preserved; schema generation walks the registry in
/// this order so generated type lists are stable across restarts.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeRegistry {
    content_types: Vec<ContentTypeDefinition>,
}

impl ContentTypeRegistry {
    /// Build a registry, validating names and uniqueness
    ///
    /// Generated GraphQL type names must be unique across content types and
    /// must not shadow the schema's built-in types.
    pub fn new(
        content_types: Vec<ContentTypeDefinition>,
    ) -> Result<Self, ContentTypeValidationError> {
        let mut uids = HashSet::new();
        let mut model_names = HashSet::new();
        let mut type_names = HashSet::new();

        for content_type in &content_types {
            let uid = content_type.uid.as_str();

            if content_type.info.singular_name.trim().is_empty() || type_name(content_type).is_empty() {
                return Err(ContentTypeValidationError::EmptySingularName {
                    uid: uid.to_string(),
                });
            }

            if !uids.insert(uid) {
                return Err(ContentTypeValidationError::DuplicateUid {
                    uid: uid.to_string(),
                });
            }

            if !model_names.insert(content_type.model_name()) {
                return Err(ContentTypeValidationError::DuplicateModelName {
                    name: content_type.model_name().to_string(),
                });
            }

            for name in generated_type_names(content_type) {
                if RESERVED_TYPE_NAMES.contains(&name.as_str()) {
                    return Err(ContentTypeValidationError::ReservedTypeName {
                        uid: uid.to_string(),
                        name,
                    });
                }

                if !type_names.insert(name.clone()) {
                    return Err(ContentTypeValidationError::DuplicateTypeName {
                        uid: uid.to_string(),
                        name,
                    });
                }
            }

            for name in content_type.attributes.keys() {
                validate_attribute_name(uid, name)?;
            }
        }

        Ok(Self { content_types })
    }

    pub fn get(&self, uid: &ContentTypeUid) -> Option<&ContentTypeDefinition> {
        self.content_types.iter().find(|ct| &ct.uid == uid)
    }

    pub fn find_by_model_name(&self, model_name: &str) -> Option<&ContentTypeDefinition> {
        self.content_types
            .iter()
            .find(|ct| ct.model_name() == model_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentTypeDefinition> {
        self.content_types.iter()
    }

    pub fn len(&self) -> usize {
        self.content_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content_types.is_empty()
    }
}

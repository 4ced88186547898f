//! Content type validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Content type UIDs look like `api::article.article` or `plugin::users-permissions.user`
static CONTENT_TYPE_UID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(api|plugin|admin|strapi)::[a-z0-9][a-z0-9-]*\.[a-z0-9][a-z0-9-]*$").unwrap()
});

/// Attribute names become GraphQL field names
static ATTRIBUTE_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]*$").unwrap());

/// Content type validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ContentTypeValidationError {
    /// UID is empty
    EmptyUid,
    /// UID does not follow the `namespace::name.name` layout
    InvalidUidFormat { uid: String },
    /// Singular name is empty
    EmptySingularName { uid: String },
    /// Attribute name cannot be exposed as a GraphQL field
    InvalidAttributeName { uid: String, name: String },
    /// Two content types share a UID
    DuplicateUid { uid: String },
    /// Two content types share a model name
    DuplicateModelName { name: String },
    /// Two content types generate the same GraphQL type name
    DuplicateTypeName { uid: String, name: String },
    /// Generated GraphQL type name is taken by a built-in schema type
    ReservedTypeName { uid: String, name: String },
}

impl fmt::Display for ContentTypeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUid => write!(f, "Content type UID cannot be empty"),
            Self::InvalidUidFormat { uid } => {
                write!(
                    f,
                    "Invalid content type UID '{}': expected '<namespace>::<name>.<name>'",
                    uid
                )
            }
            Self::EmptySingularName { uid } => {
                write!(f, "Content type '{}' has an empty singular name", uid)
            }
            Self::InvalidAttributeName { uid, name } => {
                write!(
                    f,
                    "Content type '{}' has an invalid attribute name '{}'",
                    uid, name
                )
            }
            Self::DuplicateUid { uid } => {
                write!(f, "Content type '{}' is registered more than once", uid)
            }
            Self::DuplicateModelName { name } => {
                write!(f, "Model name '{}' is used by more than one content type", name)
            }
            Self::DuplicateTypeName { uid, name } => {
                write!(
                    f,
                    "Content type '{}' generates type name '{}' which is already in use",
                    uid, name
                )
            }
            Self::ReservedTypeName { uid, name } => {
                write!(
                    f,
                    "Content type '{}' generates reserved type name '{}'",
                    uid, name
                )
            }
        }
    }
}

impl std::error::Error for ContentTypeValidationError {}

/// Validate a content type UID
pub fn validate_content_type_uid(uid: &str) -> Result<(), ContentTypeValidationError> {
    if uid.is_empty() {
        return Err(ContentTypeValidationError::EmptyUid);
    }

    if !CONTENT_TYPE_UID_PATTERN.is_match(uid) {
        return Err(ContentTypeValidationError::InvalidUidFormat {
            uid: uid.to_string(),
        });
    }

    Ok(())
}

/// Validate an attribute name
pub fn validate_attribute_name(uid: &str, name: &str) -> Result<(), ContentTypeValidationError> {
    if !ATTRIBUTE_NAME_PATTERN.is_match(name) {
        return Err(ContentTypeValidationError::InvalidAttributeName {
            uid: uid.to_string(),
            name: name.to_string(),
        });
    }

    Ok(())
}

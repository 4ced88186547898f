//! Content type definition and related types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::validation::{validate_content_type_uid, ContentTypeValidationError};

/// Content type identifier, e.g. `api::article.article`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentTypeUid(String);

impl ContentTypeUid {
    /// Create a new ContentTypeUid after validation
    pub fn new(uid: impl Into<String>) -> Result<Self, ContentTypeValidationError> {
        let uid = uid.into();
        validate_content_type_uid(&uid)?;
        Ok(Self(uid))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part (`api`, `plugin`, ...)
    pub fn namespace(&self) -> &str {
        self.0.split("::").next().unwrap_or_default()
    }

    /// Name of the owning api or plugin (`article` in `api::article.article`)
    pub fn origin(&self) -> &str {
        self.0
            .split("::")
            .nth(1)
            .and_then(|rest| rest.split('.').next())
            .unwrap_or_default()
    }
}

impl TryFrom<String> for ContentTypeUid {
    type Error = ContentTypeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContentTypeUid> for String {
    fn from(uid: ContentTypeUid) -> Self {
        uid.0
    }
}

impl std::fmt::Display for ContentTypeUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collection types hold many entries, single types exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentTypeKind {
    #[default]
    CollectionType,
    SingleType,
}

/// Naming information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeInfo {
    pub singular_name: String,
    pub plural_name: String,
    pub display_name: String,
}

/// Content type options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeOptions {
    /// Entries exist as draft and published ("live") versions
    #[serde(default)]
    pub draft_and_publish: bool,
}

/// Attribute types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Text,
    RichText,
    Blocks,
    Email,
    Password,
    Uid,
    Enumeration,
    Integer,
    BigInteger,
    Float,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Time,
    Timestamp,
    Json,
    Media,
    Relation,
    Component,
    DynamicZone,
    #[serde(other)]
    Other,
}

impl AttributeType {
    /// Whether the attribute holds a plain text value a slug can live in
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            Self::String | Self::Text | Self::RichText | Self::Email | Self::Uid | Self::Enumeration
        )
    }
}

/// A single attribute of a content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    #[serde(rename = "type")]
    pub kind: AttributeType,

    #[serde(default)]
    pub required: bool,

    /// Private attributes are never exposed
    #[serde(default)]
    pub private: bool,
}

impl AttributeDefinition {
    pub fn new(kind: AttributeType) -> Self {
        Self {
            kind,
            required: false,
            private: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Whether the attribute may appear in responses
    pub fn is_public(&self) -> bool {
        !self.private && self.kind != AttributeType::Password
    }
}

/// Registered content type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDefinition {
    pub uid: ContentTypeUid,

    #[serde(default)]
    pub kind: ContentTypeKind,

    pub info: ContentTypeInfo,

    #[serde(default)]
    pub options: ContentTypeOptions,

    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeDefinition>,
}

impl ContentTypeDefinition {
    /// Create a collection type with default naming derived from the singular name
    pub fn new(uid: ContentTypeUid, singular_name: impl Into<String>) -> Self {
        let singular_name = singular_name.into();

        Self {
            uid,
            kind: ContentTypeKind::CollectionType,
            info: ContentTypeInfo {
                plural_name: format!("{}s", singular_name),
                display_name: singular_name.clone(),
                singular_name,
            },
            options: ContentTypeOptions::default(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_kind(mut self, kind: ContentTypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_draft_and_publish(mut self, enabled: bool) -> Self {
        self.options.draft_and_publish = enabled;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: AttributeDefinition) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn uid(&self) -> &ContentTypeUid {
        &self.uid
    }

    /// The name settings and queries refer to this content type by
    pub fn model_name(&self) -> &str {
        &self.info.singular_name
    }

    pub fn draft_and_publish(&self) -> bool {
        self.options.draft_and_publish
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

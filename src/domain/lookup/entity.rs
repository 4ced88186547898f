//! Stored content entries

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute holding the publication timestamp of draft/publish entries
pub const PUBLISHED_AT: &str = "publishedAt";

/// A content entry: numeric id plus its attribute values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u64,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Entity {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// String value of an attribute, if it holds one
    pub fn text(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(Value::as_str)
    }

    pub fn is_published(&self) -> bool {
        self.attribute(PUBLISHED_AT).is_some_and(|value| !value.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flattened_attributes() {
        let entity: Entity = serde_json::from_value(json!({
            "id": 7,
            "title": "Hello",
            "slug": "hello",
            "publishedAt": null
        }))
        .unwrap();

        assert_eq!(entity.id, 7);
        assert_eq!(entity.text("slug"), Some("hello"));
        assert!(!entity.is_published());
        assert!(entity.attribute("id").is_none());
    }

    #[test]
    fn test_published() {
        let entity = Entity::new(1).with_attribute(PUBLISHED_AT, "2024-01-01T00:00:00.000Z");
        assert!(entity.is_published());
    }
}

//! Object types generated for registered content types
//!
//! Every content type contributes three objects:
//!
//! - `{T}` with its public attributes and timestamps
//! - `{T}Entity { id, attributes: {T} }`
//! - `{T}EntityResponse { data: {T}Entity }`

use async_graphql::Value;
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, Scalar, TypeRef};

use crate::domain::{
    entity_response_type_name, entity_type_name, type_name, AttributeType, ContentTypeDefinition,
    ContentTypeRegistry, Entity, EntityResponse, PUBLISHED_AT,
};

pub const DATE_TIME: &str = "DateTime";
pub const JSON: &str = "JSON";
pub const LONG: &str = "Long";

/// Custom scalars referenced by generated attribute fields
pub fn scalars() -> Vec<Scalar> {
    vec![
        Scalar::new(DATE_TIME).description("A date-time string at UTC, such as 2024-01-01T00:00:00.000Z"),
        Scalar::new(JSON).description("Arbitrary JSON value"),
        Scalar::new(LONG).description("64-bit integer"),
    ]
}

/// GraphQL output type for an attribute
pub fn attribute_type_ref(kind: AttributeType) -> &'static str {
    match kind {
        AttributeType::String
        | AttributeType::Text
        | AttributeType::RichText
        | AttributeType::Email
        | AttributeType::Password
        | AttributeType::Uid
        | AttributeType::Enumeration => TypeRef::STRING,
        AttributeType::Integer => TypeRef::INT,
        AttributeType::BigInteger => LONG,
        AttributeType::Float | AttributeType::Decimal => TypeRef::FLOAT,
        AttributeType::Boolean => TypeRef::BOOLEAN,
        AttributeType::Date | AttributeType::DateTime | AttributeType::Time | AttributeType::Timestamp => {
            DATE_TIME
        }
        AttributeType::Blocks
        | AttributeType::Json
        | AttributeType::Media
        | AttributeType::Relation
        | AttributeType::Component
        | AttributeType::DynamicZone
        | AttributeType::Other => JSON,
    }
}

/// The three objects of every registered content type, in registration order
pub fn content_type_objects(registry: &ContentTypeRegistry) -> Vec<Object> {
    registry
        .iter()
        .flat_map(|content_type| {
            [
                attributes_object(content_type),
                entity_object(content_type),
                entity_response_object(content_type),
            ]
        })
        .collect()
}

fn attributes_object(content_type: &ContentTypeDefinition) -> Object {
    let mut object = Object::new(type_name(content_type)).description(content_type.info.display_name.clone());

    for (name, attribute) in content_type.attributes.iter().filter(|(_, a)| a.is_public()) {
        object = object.field(attribute_field(name, attribute_type_ref(attribute.kind)));
    }

    object = object
        .field(attribute_field("createdAt", DATE_TIME))
        .field(attribute_field("updatedAt", DATE_TIME));

    if content_type.draft_and_publish() {
        object = object.field(attribute_field(PUBLISHED_AT, DATE_TIME));
    }

    object
}

fn attribute_field(name: &str, type_name: &str) -> Field {
    let attribute = name.to_string();

    Field::new(name, TypeRef::named(type_name), move |ctx| {
        let attribute = attribute.clone();

        FieldFuture::new(async move {
            let entity = ctx.parent_value.try_downcast_ref::<Entity>()?;

            let value = entity
                .attribute(&attribute)
                .cloned()
                .map(Value::from_json)
                .transpose()?;

            Ok(value.map(FieldValue::value))
        })
    })
}

fn entity_object(content_type: &ContentTypeDefinition) -> Object {
    Object::new(entity_type_name(content_type))
        .field(Field::new("id", TypeRef::named(TypeRef::ID), |ctx| {
            FieldFuture::new(async move {
                let entity = ctx.parent_value.try_downcast_ref::<Entity>()?;
                Ok(Some(FieldValue::value(Value::from(entity.id.to_string()))))
            })
        }))
        .field(Field::new(
            "attributes",
            TypeRef::named(type_name(content_type)),
            |ctx| {
                FieldFuture::new(async move {
                    let entity = ctx.parent_value.try_downcast_ref::<Entity>()?;
                    Ok(Some(FieldValue::borrowed_any(entity)))
                })
            },
        ))
}

fn entity_response_object(content_type: &ContentTypeDefinition) -> Object {
    Object::new(entity_response_type_name(content_type)).field(Field::new(
        "data",
        TypeRef::named(entity_type_name(content_type)),
        |ctx| {
            FieldFuture::new(async move {
                let response = ctx.parent_value.try_downcast_ref::<EntityResponse>()?;
                Ok(response.data().map(|entity| FieldValue::borrowed_any(entity)))
            })
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttributeDefinition, ContentTypeUid, RESERVED_TYPE_NAMES};

    #[test]
    fn test_attribute_type_mapping() {
        assert_eq!(attribute_type_ref(AttributeType::Uid), TypeRef::STRING);
        assert_eq!(attribute_type_ref(AttributeType::Integer), TypeRef::INT);
        assert_eq!(attribute_type_ref(AttributeType::BigInteger), LONG);
        assert_eq!(attribute_type_ref(AttributeType::Decimal), TypeRef::FLOAT);
        assert_eq!(attribute_type_ref(AttributeType::DateTime), DATE_TIME);
        assert_eq!(attribute_type_ref(AttributeType::Relation), JSON);
        assert_eq!(attribute_type_ref(AttributeType::Other), JSON);
    }

    #[test]
    fn test_builtin_scalars_are_reserved() {
        for name in [DATE_TIME, JSON, LONG, super::super::schema::QUERY] {
            assert!(RESERVED_TYPE_NAMES.contains(&name), "{} is not reserved", name);
        }
    }

    #[test]
    fn test_three_objects_per_content_type() {
        let registry = ContentTypeRegistry::new(vec![
            ContentTypeDefinition::new(ContentTypeUid::new("api::article.article").unwrap(), "article")
                .with_attribute("title", AttributeDefinition::new(AttributeType::String)),
            ContentTypeDefinition::new(ContentTypeUid::new("api::tag.tag").unwrap(), "tag"),
        ])
        .unwrap();

        let names: Vec<String> = content_type_objects(&registry)
            .iter()
            .map(|object| object.type_name().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "Article",
                "ArticleEntity",
                "ArticleEntityResponse",
                "Tag",
                "TagEntity",
                "TagEntityResponse",
            ]
        );
    }
}

//! Deterministic GraphQL type names for content types

use super::content_type::ContentTypeDefinition;
use super::slug_union::FIND_SLUG_RESPONSE;

/// Type names the schema defines regardless of registered content types
pub const RESERVED_TYPE_NAMES: &[&str] = &[
    "Query",
    FIND_SLUG_RESPONSE,
    "DateTime",
    "JSON",
    "Long",
    "String",
    "Int",
    "Float",
    "Boolean",
    "ID",
];

/// Base type name: `article` -> `Article`, `plugin::users-permissions.user` -> `UsersPermissionsUser`
pub fn type_name(content_type: &ContentTypeDefinition) -> String {
    let singular = pascal_case(content_type.model_name());

    if content_type.uid.namespace() == "plugin" {
        format!("{}{}", pascal_case(content_type.uid.origin()), singular)
    } else {
        singular
    }
}

pub fn entity_type_name(content_type: &ContentTypeDefinition) -> String {
    format!("{}Entity", type_name(content_type))
}

/// Name of the response wrapper type a `findSlug` union member resolves to
pub fn entity_response_type_name(content_type: &ContentTypeDefinition) -> String {
    format!("{}EntityResponse", type_name(content_type))
}

/// Every object type name generated for a content type
pub fn generated_type_names(content_type: &ContentTypeDefinition) -> [String; 3] {
    [
        entity_response_type_name(content_type),
        entity_type_name(content_type),
        type_name(content_type),
    ]
}

fn pascal_case(value: &str) -> String {
    value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();

            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content_type::ContentTypeUid;

    fn content_type(uid: &str, name: &str) -> ContentTypeDefinition {
        ContentTypeDefinition::new(ContentTypeUid::new(uid).unwrap(), name)
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("article"), "Article");
        assert_eq!(pascal_case("blog-post"), "BlogPost");
        assert_eq!(pascal_case("blogPost"), "BlogPost");
        assert_eq!(pascal_case("landing_page"), "LandingPage");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_api_type_names() {
        let ct = content_type("api::blog-post.blog-post", "blog-post");

        assert_eq!(type_name(&ct), "BlogPost");
        assert_eq!(entity_type_name(&ct), "BlogPostEntity");
        assert_eq!(entity_response_type_name(&ct), "BlogPostEntityResponse");
    }

    #[test]
    fn test_plugin_type_names_are_prefixed() {
        let ct = content_type("plugin::users-permissions.user", "user");

        assert_eq!(type_name(&ct), "UsersPermissionsUser");
        assert_eq!(
            entity_response_type_name(&ct),
            "UsersPermissionsUserEntityResponse"
        );
    }

    #[test]
    fn test_generated_type_names() {
        let ct = content_type("api::tag.tag", "tag");

        assert_eq!(
            generated_type_names(&ct),
            ["TagEntityResponse", "TagEntity", "Tag"].map(String::from)
        );
    }
}

//! GraphQL API - Dynamic schema with the `findSlug` polymorphic lookup

mod content_types;
mod error;
mod find_slug;
mod handler;
mod schema;

pub use content_types::{attribute_type_ref, content_type_objects, scalars, DATE_TIME, JSON, LONG};
pub use error::{error_code, to_graphql_error};
pub use find_slug::{find_slug_types, SchemaArtifact, FIND_SLUG_FIELD};
pub use handler::{graphiql_handler, graphql_handler};
pub use schema::{build_schema, QUERY};

//! Domain error to GraphQL error mapping

use async_graphql::ErrorExtensions;
use tracing::error;

use crate::domain::DomainError;

/// Error code reported in the `extensions.code` of a GraphQL error
pub fn error_code(err: &DomainError) -> &'static str {
    match err {
        DomainError::Validation { .. } => "BAD_USER_INPUT",
        DomainError::Classification { .. }
        | DomainError::Configuration { .. }
        | DomainError::Internal { .. }
        | DomainError::Storage { .. } => "INTERNAL_SERVER_ERROR",
    }
}

/// Convert a domain error into a GraphQL error carrying its code
pub fn to_graphql_error(err: DomainError) -> async_graphql::Error {
    let code = error_code(&err);

    if code == "INTERNAL_SERVER_ERROR" {
        error!(error = %err, "GraphQL resolver failed");
    }

    async_graphql::Error::new(err.message()).extend_with(|_, extensions| extensions.set("code", code))
}

//! Loads content type schemas from a JSON file

use std::path::Path;

use tracing::info;

use crate::domain::{ContentTypeDefinition, ContentTypeRegistry, DomainError};

/// Read a JSON array of content type schemas into a registry
pub async fn load_content_types(path: &Path) -> Result<ContentTypeRegistry, DomainError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        DomainError::configuration(format!(
            "Failed to read content types from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let registry = parse_content_types(&raw)?;

    info!(
        path = %path.display(),
        count = registry.len(),
        "Loaded content types"
    );

    Ok(registry)
}

/// Parse a JSON array of content type schemas into a registry
pub fn parse_content_types(raw: &str) -> Result<ContentTypeRegistry, DomainError> {
    let definitions: Vec<ContentTypeDefinition> = serde_json::from_str(raw)
        .map_err(|e| DomainError::configuration(format!("Invalid content type schema: {}", e)))?;

    ContentTypeRegistry::new(definitions).map_err(|e| DomainError::configuration(e.to_string()))
}

//! Infrastructure layer - Collaborator implementations and services

pub mod content_type;
pub mod logging;
pub mod lookup;
pub mod observability;
pub mod services;
pub mod settings;

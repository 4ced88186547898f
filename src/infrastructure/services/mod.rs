//! Application services

mod slug_service;

pub use slug_service::{build_slug_query, SlugService};

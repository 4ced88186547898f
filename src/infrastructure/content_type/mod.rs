//! Content type infrastructure - Schema loading

mod loader;

pub use loader::{load_content_types, parse_content_types};

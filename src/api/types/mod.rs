//! REST API types

pub mod error;
pub mod slug;

pub use error::{ApiError, ApiErrorDetail, ApiErrorName, ApiErrorResponse};
pub use slug::{FindSlugParams, SlugEntityData, SlugResponse};

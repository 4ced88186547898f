//! Settings domain - Slug-eligible content models

mod builder;
mod entity;
mod provider;

pub use builder::build_slug_models;
pub use entity::{SlugFieldSettings, SlugModelConfig, SlugModels, SlugSettings};
pub use provider::SettingsProvider;

#[cfg(test)]
pub use provider::MockSettingsProvider;

//! Settings infrastructure - Slug settings providers

mod configured;

pub use configured::ConfiguredSettingsProvider;

//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ContentConfig, GraphqlConfig, LogFormat, LoggingConfig, MetricsConfig,
    ServerConfig,
};

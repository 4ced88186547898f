use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::SlugSettings;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub graphql: GraphqlConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub slugify: SlugSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// GraphQL endpoint and query protection limits
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlConfig {
    #[serde(default = "default_graphql_path")]
    pub path: String,
    /// Serve the GraphiQL IDE on `GET {path}`
    #[serde(default = "default_true")]
    pub graphiql: bool,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default = "default_max_complexity")]
    pub max_complexity: usize,
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

/// Where content type schemas and seed entries are read from
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_content_types_path")]
    pub content_types_path: PathBuf,
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_depth() -> usize {
    10
}

fn default_max_complexity() -> usize {
    100
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

fn default_content_types_path() -> PathBuf {
    PathBuf::from("config/content-types.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            path: default_graphql_path(),
            graphiql: true,
            max_depth: default_max_depth(),
            max_complexity: default_max_complexity(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_metrics_path(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_types_path: default_content_types_path(),
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

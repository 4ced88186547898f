//! Serve command - runs the GraphQL and REST endpoints

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::create_router_with_state;
use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::observability::{create_metrics_router, init_metrics};

/// Run the server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config_with_logging();

    let metrics = init_metrics(&config.metrics);
    let state = crate::create_app_state(&config).await?;

    let mut app = create_router_with_state(state);

    if let Some(metrics) = metrics {
        app = app.merge(create_metrics_router(metrics, &config.metrics.path));
    }

    let addr = build_socket_addr(&config)?;
    info!(graphql = %config.graphql.path, "Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load configuration and install the log subscriber it describes
///
/// When no source parses, defaults are used and the load failure is logged
/// after the subscriber is in place.
pub(crate) fn load_config_with_logging() -> AppConfig {
    let (config, error) = config_or_default(AppConfig::load());
    logging::init_logging(&config.logging);

    if let Some(e) = error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    config
}

fn config_or_default<E>(loaded: Result<AppConfig, E>) -> (AppConfig, Option<E>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_socket_addr() {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 1337;

        assert_eq!(build_socket_addr(&config).unwrap().to_string(), "127.0.0.1:1337");
    }

    #[test]
    fn test_config_error_falls_back_to_defaults() {
        let (config, error) =
            config_or_default(Err(::config::ConfigError::Message("invalid port".to_string())));

        assert_eq!(config.server.port, AppConfig::default().server.port);
        assert_eq!(error.map(|e| e.to_string()), Some("invalid port".to_string()));
    }

    #[test]
    fn test_loaded_config_is_kept() {
        let mut loaded = AppConfig::default();
        loaded.server.port = 4000;

        let (config, error) = config_or_default::<::config::ConfigError>(Ok(loaded));

        assert_eq!(config.server.port, 4000);
        assert!(error.is_none());
    }

    #[test]
    fn test_build_socket_addr_rejects_hostname() {
        let mut config = AppConfig::default();
        config.server.host = "localhost".to_string();

        assert!(build_socket_addr(&config).is_err());
    }
}

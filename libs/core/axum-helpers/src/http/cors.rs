use axum::http::{HeaderValue, Method, header};
use core_config::{Environment, server::ServerConfig};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Creates a CORS layer for an explicit origin allow-list.
///
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer for development.
///
/// Allows any origin - **DO NOT USE IN PRODUCTION**.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Pick the CORS layer for the configured origins.
///
/// An empty allow-list is permissive in development and an error in production.
pub fn cors_layer_for(config: &ServerConfig, environment: &Environment) -> io::Result<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        if environment.is_production() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "CORS_ALLOWED_ORIGIN is required in production. Example: CORS_ALLOWED_ORIGIN=https://example.com",
            ));
        }
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(create_permissive_cors_layer());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    info!(origins = ?config.cors_allowed_origins, "CORS configured");
    Ok(create_cors_layer(origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(origins: &[&str]) -> ServerConfig {
        let mut config = ServerConfig::default();
        config.cors_allowed_origins = origins.iter().map(|o| o.to_string()).collect();
        config
    }

    #[test]
    fn test_empty_origins_permissive_in_development() {
        assert!(cors_layer_for(&config_with(&[]), &Environment::Development).is_ok());
    }

    #[test]
    fn test_empty_origins_rejected_in_production() {
        let err = cors_layer_for(&config_with(&[]), &Environment::Production).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
    }

    #[test]
    fn test_explicit_origins_accepted_in_production() {
        let config = config_with(&["https://example.com", "http://localhost:3000"]);
        assert!(cors_layer_for(&config, &Environment::Production).is_ok());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let config = config_with(&["https://bad\norigin"]);
        assert!(cors_layer_for(&config, &Environment::Development).is_err());
    }
}

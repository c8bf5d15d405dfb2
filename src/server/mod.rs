//! JSON-over-HTTP transport for the color core.
//!
//! Routes:
//! - `POST /api/convert` — [`ColorInput`](crate::ColorInput) to [`Color`](crate::Color)
//! - `POST /api/palette` — [`PaletteRequest`](crate::PaletteRequest) to `{palette: [...]}`
//! - `GET /api/random` — a random color
//! - `GET /health`

pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

pub use error::{AppError, AppResult};
pub use state::AppState;
pub use types::{HealthResponse, PaletteResponse};

/// Run the server until `shutdown` resolves.
pub async fn run_with_shutdown<F>(config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address {:?}", config.listen_addr))?;
    let app = create_router(config)?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Create the application router.
///
/// # Errors
///
/// Fails if a configured CORS origin is not a valid header value.
pub fn create_router(config: ServerConfig) -> anyhow::Result<Router> {
    let cors = cors_layer(&config.cors_origins)?;
    let body_limit = DefaultBodyLimit::max(config.max_body_size);
    let state = Arc::new(AppState::new(config));

    let api_routes = Router::new()
        .route("/convert", post(handlers::convert))
        .route("/palette", post(handlers::palette))
        .route("/random", get(handlers::random));

    Ok(Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CORS origin {origin:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_rejects_invalid_origin() {
        assert!(cors_layer(&["http://ok.test".to_string()]).is_ok());
        assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
    }

    #[test]
    fn test_create_router_with_defaults() {
        assert!(create_router(ServerConfig::default()).is_ok());
    }
}

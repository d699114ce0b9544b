//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - CORS
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// Shared application state
///
/// Holds only the clone-cheap pool; no mutable state crosses requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::projects::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until shutdown.
pub async fn run_server(pool: PgPool, bind_addr: SocketAddr) -> Result<(), ServerError> {
    let app = build_router(AppState { pool });

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        // connect_lazy_with never dials, so the router is exercisable
        // without a database for routes that do not touch it
        let pool = crate::db::create_pool("Host=localhost;Port=5432;Database=nowhere")
            .expect("pool creation failed");
        build_router(AppState { pool })
    }

    #[tokio::test]
    async fn health_route_is_mounted() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router failed");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected_before_any_query() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/test/notanumber")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router failed");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router failed");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

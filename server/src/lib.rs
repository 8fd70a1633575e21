//! HTTP service for a single collection of to-do items.
//!
//! # Overview
//! Three routes translate JSON requests into store calls:
//! `POST /todos`, `GET /todos` and `DELETE /todos/{todo_id}`.
//!
//! # Design
//! - The store is created once in `main` and injected through `AppState`;
//!   handlers hold no other state.
//! - `TodoStore` is the persistence seam. `MongoStore` is used in production,
//!   `MemoryStore` in tests.
//! - Every rejection from the JSON or path extractors becomes a 422 before the
//!   store is touched.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use model::{CreateTodo, DeleteConfirmation, TodoItem};
pub use routes::AppState;
pub use store::{MemoryStore, MongoStore, StoreError, TodoStore};

pub fn app(store: Arc<dyn TodoStore>, allowed_origin: &str) -> Router {
    routes::router(AppState { store })
        .layer(cors_layer(allowed_origin))
        .layer(TraceLayer::new_for_http())
}

/// Single origin with credentials. Methods and headers are mirrored from the
/// preflight request because `*` cannot be combined with credentials.
/// Requests from any other origin get no `Access-Control-Allow-Origin`.
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());
    match HeaderValue::from_str(allowed_origin) {
        Ok(origin) => cors.allow_origin(AllowOrigin::list([origin])),
        Err(_) => {
            tracing::warn!(origin = allowed_origin, "invalid CORS origin, cross-origin requests disabled");
            cors
        }
    }
}

/// Serves `router` until ctrl-c or SIGTERM.
pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

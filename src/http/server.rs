//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all phonebook routes
//! - Wire up middleware (access log, CORS, timeout, tracing)
//! - Inject the contact store into handlers
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::http::access_log::access_log;
use crate::http::handlers;
use crate::store::ContactStore;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
}

/// HTTP server for the phonebook service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server over the given contact store.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        let state = AppState { store };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::greeting))
            .route("/info", get(handlers::info))
            .route(
                "/api/contacts",
                get(handlers::list_contacts).post(handlers::create_contact),
            )
            .route(
                "/api/contacts/{id}",
                get(handlers::get_contact)
                    .put(handlers::update_contact)
                    .delete(handlers::delete_contact),
            )
            .fallback(handlers::unknown_endpoint)
            .with_state(state)
            .layer(middleware::from_fn(access_log))
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

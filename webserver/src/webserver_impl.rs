//! Main webserver implementation
//!
//! Wires the injected generator and batch store into an axum router and
//! runs it until the shutdown future resolves.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use generator::{BatchStore, CompletionClient, ContentGenerator};
use shared::{ProcessId, process_info};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::{api, static_files};

/// Dashboard server with dependency injection
pub struct WebServer<C, S> {
    state: Arc<WebServerState<C, S>>,
}

impl<C, S> Clone for WebServer<C, S> {
    fn clone(&self) -> Self {
        Self { state: Arc::clone(&self.state) }
    }
}

impl<C, S> WebServer<C, S>
where
    C: CompletionClient + 'static,
    S: BatchStore + 'static,
{
    pub fn new(generator: Option<ContentGenerator<C>>, store: S) -> Self {
        Self {
            state: Arc::new(WebServerState::new(generator, store)),
        }
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Dashboard
            .route("/", get(static_files::serve_index))

            // Batch files
            .route("/generate", post(api::generate::<C, S>))
            .route("/files", get(api::list_files::<C, S>))
            .route("/view/:filename", get(api::view_file::<C, S>))
            .route("/download/:filename", get(api::download_file::<C, S>))

            // In-memory generation
            .route("/api/generate", post(api::api_generate::<C, S>))
            .route("/api/latest", get(api::api_latest::<C, S>))

            // Health check
            .route("/health", get(api::health_check::<C, S>))

            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(Arc::clone(&self.state))
    }

    /// Serve on `addr` until `shutdown` resolves
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            WebServerError::ServerStartupFailed {
                addr: addr.to_string(),
                message: e.to_string(),
            }
        })?;

        process_info!(ProcessId::current(), "🌐 Web server listening on http://{}", addr);
        process_info!(ProcessId::current(), "📊 Dashboard available at http://{}/", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState<C, S>> {
        &self.state
    }
}

//! HTTP server implementation for the batchsort service.
//!
//! Exposes batch sorting in two modes: `/process-single` sorts sequences
//! one after another, `/process-concurrent` fans out one task per sequence
//! and joins on all of them before responding.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use batchsort_core::{sort_concurrent, sort_sequential, Result, SortMode};

use crate::api::{SortRequest, SortResponse, StatusResponse};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8000".parse().expect("valid default addr"),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: self.addr.unwrap_or(defaults.addr),
            cors: self.cors.unwrap_or(defaults.cors),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates new app state.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new());
        Self { config, state }
    }

    /// Creates the router.
    fn router(&self) -> Router {
        let mut router = Router::new()
            // Health endpoints
            .route("/health", get(health))
            .route("/api/status", get(server_status))
            // Sorting endpoints
            .route("/process-single", post(process_single))
            .route("/process-concurrent", post(process_concurrent))
            .with_state(self.state.clone());

        // Add middleware
        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot start.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, "Starting batchsort server");
        eprintln!("Server listening on http://{}", self.config.addr);
        eprintln!("Press Ctrl+C to stop");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(batchsort_core::Error::Io)?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    tracing::info!("Received Ctrl+C, shutting down");
                },
                () = terminate => {
                    tracing::info!("Received SIGTERM, shutting down");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| batchsort_core::Error::internal(e.to_string()))?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, message.to_owned()).into_response()
}

// === Health Endpoints ===

async fn health() -> &'static str {
    "OK"
}

async fn server_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

// === Sorting Endpoints ===

async fn process_single(payload: std::result::Result<Json<SortRequest>, JsonRejection>) -> Response {
    process(payload, SortMode::Sequential).await
}

async fn process_concurrent(
    payload: std::result::Result<Json<SortRequest>, JsonRejection>,
) -> Response {
    process(payload, SortMode::Concurrent).await
}

async fn process(
    payload: std::result::Result<Json<SortRequest>, JsonRejection>,
    mode: SortMode,
) -> Response {
    let request_id = format!("sort-{}", uuid::Uuid::new_v4());

    // Every malformed body maps to a plain 400, whether the JSON itself is
    // invalid or the shape does not match the request type.
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(
                request_id = %request_id,
                error = %rejection,
                "Rejected malformed sort request"
            );
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON payload");
        },
    };

    tracing::debug!(
        request_id = %request_id,
        mode = %mode,
        arrays = req.to_sort.len(),
        "Sort request"
    );

    let start = Instant::now();

    let sorted_arrays = match mode {
        SortMode::Sequential => sort_sequential(&req.to_sort),
        SortMode::Concurrent => match sort_concurrent(&req.to_sort).await {
            Ok(arrays) => arrays,
            Err(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Concurrent sort failed");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
            },
        },
    };

    let time_ns = start.elapsed().as_nanos() as u64;

    tracing::debug!(
        request_id = %request_id,
        mode = %mode,
        arrays = sorted_arrays.len(),
        time_ns,
        "Sort request finished"
    );

    Json(SortResponse {
        sorted_arrays,
        time_ns,
    })
    .into_response()
}

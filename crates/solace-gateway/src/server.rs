// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. Cross-origin policy is
//! fully permissive (all origins/methods/headers) -- a debugging posture
//! carried over from the original deployment, not a security boundary.

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, options, post},
    Router,
};
use solace_core::{ChatResponder, IdentityVerifier, SolaceError};
use tower_http::cors::CorsLayer;

use crate::auth::auth_middleware;
use crate::handlers;

/// Shared state for axum request handlers.
///
/// Everything here is read-only after startup; request handlers share it
/// without locks.
#[derive(Clone)]
pub struct AppState {
    /// Identity verification policy.
    pub verifier: Arc<dyn IdentityVerifier>,
    /// Completion engine.
    pub responder: Arc<dyn ChatResponder>,
    /// Development mode flag; relaxes the user-id match check.
    pub dev_mode: bool,
    /// Service display name, used by the health endpoint.
    pub service_name: String,
}

/// Gateway server configuration.
///
/// Mirrors the `[server]` section from `solace-config` to avoid a
/// dependency on the config crate from the gateway crate.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the gateway router.
///
/// Routes:
/// - `GET  /` -- health check (unauthenticated)
/// - `GET  /api/v1/auth/me` -- verified identity (auth required)
/// - `POST /api/v1/chat/send` -- chat completion (auth required)
/// - `OPTIONS` on both API paths -- bare 200 for preflight (unauthenticated)
pub fn build_router(state: AppState) -> Router {
    // Routes requiring authentication.
    let protected_routes = Router::new()
        .route("/api/v1/auth/me", get(handlers::get_me))
        .route("/api/v1/chat/send", post(handlers::post_send))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Unauthenticated routes: health check and preflight responses
    // (preflight requests carry no Authorization header).
    let public_routes = Router::new()
        .route("/", get(handlers::get_health))
        .route("/api/v1/auth/me", options(handlers::options_ok))
        .route("/api/v1/chat/send", options(handlers::options_ok));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server and serve until the process exits.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), SolaceError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SolaceError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| SolaceError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

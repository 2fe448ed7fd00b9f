// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication middleware for the gateway.
//!
//! Extracts the optional `Authorization: Bearer <token>` header, resolves
//! it through the configured [`IdentityVerifier`], and inserts the verified
//! [`Identity`] into request extensions for handlers to read. Verification
//! failures become 401 responses; what counts as a failure (including the
//! development-mode relaxations) is entirely the verifier's policy.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::handlers::ErrorResponse;
use crate::server::AppState;

/// Extract the bearer token from the Authorization header, if present.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Middleware that authenticates the request and attaches the identity.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(request.headers());

    match state.verifier.verify(token).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            Ok(next.run(request).await)
        }
        Err(failure) => {
            tracing::debug!(error = %failure, "request rejected by identity verification");
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: failure.to_string(),
                }),
            )
                .into_response())
        }
    }
}

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles `GET /` (health), `GET /api/v1/auth/me`, and
//! `POST /api/v1/chat/send`, plus the bare OPTIONS responses that satisfy
//! cross-origin preflight checks.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use solace_core::{ChatMessage, Identity, Role, SolaceError};

use crate::server::AppState;

/// Request body for POST /api/v1/chat/send.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSendRequest {
    /// Caller-asserted user id; must match the verified identity in
    /// production mode.
    pub user_id: String,
    /// Prior turns of the conversation, oldest first.
    pub conversation_history: Vec<ChatMessage>,
    /// The new user message.
    pub message: String,
}

/// Response body for POST /api/v1/chat/send.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSendResponse {
    pub ai_response: AiResponseData,
}

/// The assistant turn produced for a send request.
#[derive(Debug, Serialize)]
pub struct AiResponseData {
    pub role: Role,
    pub content: String,
    pub justification: Option<String>,
}

/// Response body for GET /api/v1/auth/me.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub uid: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// GET /
///
/// Unauthenticated health check.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: format!("{} API is running", state.service_name),
    })
}

/// Bare OPTIONS handler for cross-origin preflight requests.
pub async fn options_ok() -> StatusCode {
    StatusCode::OK
}

/// GET /api/v1/auth/me
///
/// Returns the verified identity. Doubles as an authentication probe.
pub async fn get_me(Extension(identity): Extension<Identity>) -> Json<MeResponse> {
    Json(MeResponse {
        uid: identity.uid,
        email: identity.email,
        name: identity.name,
    })
}

/// POST /api/v1/chat/send
///
/// Forwards the message to the completion engine and returns the split
/// reply. In production mode the caller-asserted user id must match the
/// verified identity; on mismatch the engine is never invoked.
pub async fn post_send(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<ChatSendRequest>,
) -> Response {
    if !state.dev_mode && body.user_id != identity.uid {
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "User ID in request does not match authenticated user".to_string(),
            }),
        )
            .into_response();
    }

    match state
        .responder
        .respond(&body.conversation_history, &body.message, None)
        .await
    {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatSendResponse {
                ai_response: AiResponseData {
                    role: Role::Assistant,
                    content: reply.content,
                    justification: Some(reply.justification),
                },
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "chat send failed");
            // Provider messages are pre-sanitized by the engine; nothing
            // here carries raw upstream text.
            let detail = match &e {
                SolaceError::Provider { message, .. } => message.clone(),
                other => other.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: detail }),
            )
                .into_response()
        }
    }
}

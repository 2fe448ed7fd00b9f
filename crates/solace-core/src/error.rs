// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Solace chat backend.

use thiserror::Error;

/// A failed identity verification, always mapped to HTTP 401 by the gateway.
///
/// The `Display` strings are the client-facing detail messages; they carry
/// no information from the underlying token besides the failure class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// No bearer token was supplied.
    #[error("Authentication token is missing")]
    Missing,

    /// The token was valid once but has expired.
    #[error("Token expired. Please reauthenticate.")]
    Expired,

    /// The token is malformed or its signature does not verify.
    #[error("Invalid token. Please reauthenticate.")]
    Invalid,

    /// Any other verification failure (backend unreachable, bad cert set).
    #[error("Authentication failed: {0}")]
    Other(String),
}

/// The primary error type used across Solace crates.
#[derive(Debug, Error)]
pub enum SolaceError {
    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Identity verification failures.
    #[error("auth error: {0}")]
    Auth(#[from] AuthFailure),

    /// Completion provider errors (API failure, unsupported provider).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Solace chat backend.
//!
//! The gateway is a thin surface: an auth middleware gate in front of two
//! JSON routes plus a health check. All state is read-only after startup;
//! every request runs independently with no cross-request coordination.

pub mod auth;
pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, AppState, ServerConfig};

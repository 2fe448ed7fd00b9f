// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion engine for the Solace chat backend.
//!
//! This crate implements [`solace_core::ChatResponder`] over the Gemini
//! generateContent API, with a deterministic canned responder for
//! development mode and a splitter that separates each completion into a
//! main response and a justification clause.

pub mod client;
pub mod engine;
pub mod mock;
pub mod split;
pub mod types;

pub use client::GeminiClient;
pub use engine::{resolve_model, CompletionEngine, UPSTREAM_ERROR_DETAIL};
pub use mock::canned_reply;
pub use split::{split_response, GENERIC_JUSTIFICATION};

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity verification for the Solace chat backend.
//!
//! This crate implements [`solace_core::IdentityVerifier`] over Google
//! securetoken ID tokens, with the development-mode mock-identity policy
//! the HTTP surface relies on for local testing.

pub mod firebase;
pub mod verifier;

pub use firebase::FirebaseBackend;
pub use verifier::{TokenVerifier, DEV_TOKEN_SENTINEL};

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity verification trait.

use async_trait::async_trait;

use crate::error::AuthFailure;
use crate::types::Identity;

/// Resolves an optional bearer token to a verified [`Identity`].
///
/// Implementations decide what "no token" means: the production verifier
/// rejects it, while development mode substitutes a fixed mock identity.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verifies the given token (or its absence) and returns the identity.
    async fn verify(&self, token: Option<&str>) -> Result<Identity, AuthFailure>;
}

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verification backend for Google securetoken ID tokens.
//!
//! Tokens are RS256 JWTs signed by Google's rotating service-account keys.
//! Verification selects the key by the token's `kid`, fetches the current
//! JWK set over HTTPS, and validates signature, expiry, audience (the
//! project id), and issuer. The key set is fetched per verification; one
//! verification is one backend call.

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use solace_core::{AuthFailure, Identity, SolaceError};
use std::time::Duration;
use tracing::debug;

/// Google's JWK endpoint for securetoken signing keys.
const JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// Claims carried by a securetoken ID token that we surface as [`Identity`].
#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

/// ID-token verification backend for one identity-provider project.
#[derive(Debug, Clone)]
pub struct FirebaseBackend {
    client: reqwest::Client,
    project_id: String,
    jwks_url: String,
}

impl FirebaseBackend {
    /// Creates a backend for the given project id.
    pub fn new(project_id: &str) -> Result<Self, SolaceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SolaceError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            project_id: project_id.to_string(),
            jwks_url: JWKS_URL.to_string(),
        })
    }

    /// Overrides the JWK endpoint (for testing with wiremock).
    #[cfg(test)]
    pub fn with_jwks_url(mut self, url: String) -> Self {
        self.jwks_url = url;
        self
    }

    /// Verifies an ID token and returns the identity it asserts.
    pub async fn verify_id_token(&self, token: &str) -> Result<Identity, AuthFailure> {
        let header = decode_header(token).map_err(|_| AuthFailure::Invalid)?;
        let Some(kid) = header.kid else {
            // Google-issued tokens always carry a key id.
            return Err(AuthFailure::Invalid);
        };

        let jwks = self.fetch_jwks().await?;
        let jwk = jwks
            .keys
            .iter()
            .find(|k| k.kid == kid)
            .ok_or(AuthFailure::Invalid)?;

        let key =
            DecodingKey::from_rsa_components(&jwk.n, &jwk.e).map_err(|_| AuthFailure::Invalid)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[format!(
            "https://securetoken.google.com/{}",
            self.project_id
        )]);

        let data =
            decode::<IdTokenClaims>(token, &key, &validation).map_err(map_jwt_error)?;

        debug!(uid = data.claims.sub, "token verified");
        Ok(Identity {
            uid: data.claims.sub,
            email: data.claims.email,
            name: data.claims.name,
        })
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AuthFailure> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| AuthFailure::Other(format!("failed to fetch signing keys: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthFailure::Other(format!(
                "signing key endpoint returned {status}"
            )));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthFailure::Other(format!("failed to parse signing keys: {e}")))
    }
}

/// Maps JWT validation errors onto the auth failure taxonomy.
///
/// Expiry is distinguished so callers can report it precisely; everything
/// that means "this token will never verify" is `Invalid`.
fn map_jwt_error(e: jsonwebtoken::errors::Error) -> AuthFailure {
    use jsonwebtoken::errors::ErrorKind;

    match e.kind() {
        ErrorKind::ExpiredSignature => AuthFailure::Expired,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidIssuer
        | ErrorKind::ImmatureSignature
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => AuthFailure::Invalid,
        _ => AuthFailure::Other(e.to_string()),
    }
}

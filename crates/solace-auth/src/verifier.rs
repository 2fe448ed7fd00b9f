// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token verification policy: live backend verification with the
//! development-mode mock-identity escape hatch.
//!
//! Policy, in order:
//! 1. Backend uninitialized or development mode: an absent token or the
//!    `"dev-mode"` sentinel yields the fixed mock identity.
//! 2. Absent token otherwise: `Missing`.
//! 3. Present token: one verification call. Expiry always fails; invalid
//!    tokens and other backend failures fail in production but substitute
//!    the mock identity in development mode.

use async_trait::async_trait;
use solace_config::SolaceConfig;
use solace_core::{AuthFailure, Identity, IdentityVerifier};
use tracing::{debug, error, info, warn};

use crate::firebase::FirebaseBackend;

/// Sentinel token value that selects the mock identity in development mode.
pub const DEV_TOKEN_SENTINEL: &str = "dev-mode";

/// Production [`IdentityVerifier`] with development-mode relaxations.
pub struct TokenVerifier {
    backend: Option<FirebaseBackend>,
    dev_mode: bool,
    mock_identity: Identity,
}

impl TokenVerifier {
    /// Builds the verifier from configuration.
    ///
    /// A missing or unusable `auth.project_id` leaves the backend
    /// uninitialized, which enables the mock-identity escape hatch for
    /// absent/sentinel tokens regardless of mode.
    pub fn new(config: &SolaceConfig) -> Self {
        let backend = match config.auth.project_id.as_deref() {
            Some(project_id) if !project_id.is_empty() => {
                match FirebaseBackend::new(project_id) {
                    Ok(backend) => {
                        info!(project_id, "identity backend initialized");
                        Some(backend)
                    }
                    Err(e) => {
                        error!(error = %e, "identity backend initialization failed; falling back to mock authentication");
                        None
                    }
                }
            }
            _ => {
                warn!("auth.project_id not set; identity backend disabled");
                None
            }
        };

        Self {
            backend,
            dev_mode: config.agent.dev_mode,
            mock_identity: Identity {
                uid: config.auth.mock_uid.clone(),
                email: Some(config.auth.mock_email.clone()),
                name: Some(config.auth.mock_name.clone()),
            },
        }
    }
}

#[async_trait]
impl IdentityVerifier for TokenVerifier {
    async fn verify(&self, token: Option<&str>) -> Result<Identity, AuthFailure> {
        // Escape hatch for local testing without live credentials.
        if (self.backend.is_none() || self.dev_mode)
            && (token.is_none() || token == Some(DEV_TOKEN_SENTINEL))
        {
            debug!("using development mode authentication");
            return Ok(self.mock_identity.clone());
        }

        let Some(token) = token else {
            return Err(AuthFailure::Missing);
        };

        let Some(backend) = &self.backend else {
            if self.dev_mode {
                warn!("no identity backend in development mode; using mock identity");
                return Ok(self.mock_identity.clone());
            }
            return Err(AuthFailure::Other(
                "identity backend is not initialized".to_string(),
            ));
        };

        match backend.verify_id_token(token).await {
            Ok(identity) => Ok(identity),
            // Expired tokens fail even in development mode.
            Err(AuthFailure::Expired) => Err(AuthFailure::Expired),
            Err(failure) => {
                if self.dev_mode {
                    warn!(error = %failure, "verification failed in development mode; using mock identity");
                    return Ok(self.mock_identity.clone());
                }
                Err(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_config::SolaceConfig;

    fn config(dev_mode: bool, project_id: Option<&str>) -> SolaceConfig {
        let mut config = SolaceConfig::default();
        config.agent.dev_mode = dev_mode;
        config.auth.project_id = project_id.map(|s| s.to_string());
        config
    }

    fn mock_uid(verifier: &TokenVerifier) -> &str {
        &verifier.mock_identity.uid
    }

    #[tokio::test]
    async fn absent_token_yields_mock_identity_when_backend_uninitialized() {
        let verifier = TokenVerifier::new(&config(false, None));
        let identity = verifier.verify(None).await.unwrap();
        assert_eq!(identity.uid, mock_uid(&verifier));
        assert_eq!(identity.email.as_deref(), Some("dev@example.com"));
        assert_eq!(identity.name.as_deref(), Some("Development User"));
    }

    #[tokio::test]
    async fn sentinel_token_yields_mock_identity_in_dev_mode() {
        let verifier = TokenVerifier::new(&config(true, Some("empathy-test")));
        let identity = verifier.verify(Some(DEV_TOKEN_SENTINEL)).await.unwrap();
        assert_eq!(identity.uid, "dev-user-123");
    }

    #[tokio::test]
    async fn absent_token_is_missing_in_production_with_backend() {
        let verifier = TokenVerifier::new(&config(false, Some("empathy-test")));
        let failure = verifier.verify(None).await.unwrap_err();
        assert_eq!(failure, AuthFailure::Missing);
    }

    #[tokio::test]
    async fn garbage_token_is_invalid_in_production() {
        let verifier = TokenVerifier::new(&config(false, Some("empathy-test")));
        let failure = verifier.verify(Some("not-a-jwt")).await.unwrap_err();
        assert_eq!(failure, AuthFailure::Invalid);
    }

    #[tokio::test]
    async fn garbage_token_yields_mock_identity_in_dev_mode() {
        let verifier = TokenVerifier::new(&config(true, Some("empathy-test")));
        let identity = verifier.verify(Some("not-a-jwt")).await.unwrap();
        assert_eq!(identity.uid, "dev-user-123");
    }

    #[tokio::test]
    async fn real_token_without_backend_fails_in_production() {
        let verifier = TokenVerifier::new(&config(false, None));
        let failure = verifier.verify(Some("some-token")).await.unwrap_err();
        assert!(matches!(failure, AuthFailure::Other(_)));
    }

    #[tokio::test]
    async fn real_token_without_backend_yields_mock_identity_in_dev_mode() {
        let verifier = TokenVerifier::new(&config(true, None));
        let identity = verifier.verify(Some("some-token")).await.unwrap();
        assert_eq!(identity.uid, "dev-user-123");
    }

    #[tokio::test]
    async fn mock_identity_fields_come_from_config() {
        let mut cfg = config(true, None);
        cfg.auth.mock_uid = "tester-9".to_string();
        cfg.auth.mock_email = "t@example.com".to_string();
        cfg.auth.mock_name = "Tester".to_string();
        let verifier = TokenVerifier::new(&cfg);
        let identity = verifier.verify(None).await.unwrap();
        assert_eq!(identity.uid, "tester-9");
        assert_eq!(identity.email.as_deref(), Some("t@example.com"));
        assert_eq!(identity.name.as_deref(), Some("Tester"));
    }
}

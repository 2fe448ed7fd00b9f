// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Solace chat backend.
//!
//! This crate provides the error taxonomy, shared domain types, and the
//! adapter traits implemented by the auth and completion crates. It holds
//! no I/O and no configuration of its own.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{AuthFailure, SolaceError};
pub use traits::{ChatResponder, IdentityVerifier};
pub use types::{AssistantReply, ChatMessage, Identity, Role};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedVerifier;

    #[async_trait]
    impl IdentityVerifier for FixedVerifier {
        async fn verify(&self, token: Option<&str>) -> Result<Identity, AuthFailure> {
            match token {
                Some(_) => Ok(Identity {
                    uid: "u-1".into(),
                    email: None,
                    name: None,
                }),
                None => Err(AuthFailure::Missing),
            }
        }
    }

    struct EchoResponder;

    #[async_trait]
    impl ChatResponder for EchoResponder {
        async fn respond(
            &self,
            _history: &[ChatMessage],
            message: &str,
            _model: Option<&str>,
        ) -> Result<AssistantReply, SolaceError> {
            Ok(AssistantReply {
                content: message.to_string(),
                justification: "echo".into(),
            })
        }
    }

    // Both traits must stay object-safe: the gateway shares them as
    // `Arc<dyn ...>` across request handlers.
    #[tokio::test]
    async fn traits_are_object_safe() {
        let verifier: Box<dyn IdentityVerifier> = Box::new(FixedVerifier);
        let responder: Box<dyn ChatResponder> = Box::new(EchoResponder);

        assert_eq!(
            verifier.verify(Some("tok")).await.unwrap().uid,
            "u-1"
        );
        assert_eq!(
            verifier.verify(None).await.unwrap_err(),
            AuthFailure::Missing
        );
        assert_eq!(
            responder.respond(&[], "hi", None).await.unwrap().content,
            "hi"
        );
    }
}

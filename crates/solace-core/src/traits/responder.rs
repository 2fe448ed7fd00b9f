// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat completion trait.

use async_trait::async_trait;

use crate::error::SolaceError;
use crate::types::{AssistantReply, ChatMessage};

/// Produces an assistant reply for a new user message given the prior
/// conversation history.
///
/// `model` is a friendly model name; `None` selects the configured default.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// Returns the split (main response, justification) pair for the turn.
    async fn respond(
        &self,
        history: &[ChatMessage],
        message: &str,
        model: Option<&str>,
    ) -> Result<AssistantReply, SolaceError>;
}

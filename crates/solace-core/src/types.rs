// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Solace workspace.

use serde::{Deserialize, Serialize};

/// A verified caller identity, produced by an [`crate::IdentityVerifier`].
///
/// Lives for the duration of one request; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user id from the identity provider.
    pub uid: String,
    /// Email, when the provider supplies one.
    pub email: Option<String>,
    /// Display name, when the provider supplies one.
    pub name: Option<String>,
}

/// Speaker role for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single turn in a conversation, as carried on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Only meaningful for assistant turns; re-injected into the prompt
    /// as a context note when forwarding history upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

/// The post-processed output of one completion: the main answer plus the
/// justification clause extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub content: String,
    pub justification: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn chat_message_deserializes_without_justification() {
        let json = r#"{"role": "user", "content": "Hello"}"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.justification.is_none());
    }

    #[test]
    fn chat_message_round_trips_justification() {
        let msg = ChatMessage {
            role: Role::Assistant,
            content: "Try a budget.".into(),
            justification: Some("Budgets make spending visible.".into()),
        };
        let json = serde_json::to_string(&msg).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.justification.as_deref(), Some("Budgets make spending visible."));
    }

    #[test]
    fn chat_message_omits_absent_justification() {
        let msg = ChatMessage {
            role: Role::User,
            content: "hi".into(),
            justification: None,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("justification"));
    }

    #[test]
    fn identity_serializes_optional_fields() {
        let id = Identity {
            uid: "dev-user-123".into(),
            email: Some("dev@example.com".into()),
            name: None,
        };
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["uid"], "dev-user-123");
        assert_eq!(json["email"], "dev@example.com");
        assert_eq!(json["name"], serde_json::Value::Null);
    }
}

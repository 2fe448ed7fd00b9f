// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The completion engine: model resolution, prompt assembly, and the
//! mock/live decision.
//!
//! Implements [`ChatResponder`] over the Gemini client, substituting the
//! deterministic canned responder when development mode is active (and on
//! live-call failure while in development mode). There is no retry policy
//! beyond that single substitution.

use async_trait::async_trait;
use solace_config::SolaceConfig;
use solace_core::{AssistantReply, ChatMessage, ChatResponder, Role, SolaceError};
use tracing::{debug, error, info, warn};

use crate::client::GeminiClient;
use crate::mock;
use crate::split;
use crate::types::{Content, GenerateRequest, GenerationConfig};

/// Client-facing detail for completion failures in production mode.
/// The underlying cause is logged, never returned to callers.
pub const UPSTREAM_ERROR_DETAIL: &str =
    "Error communicating with the AI service. Please try again later.";

/// Static friendly-name -> provider-qualified model mapping.
/// Unmapped names pass through unchanged.
const MODEL_ALIASES: &[(&str, &str)] = &[
    ("gemini-1.5-flash", "gemini/gemini-1.5-flash"),
    ("gemini-1.5-pro", "gemini/gemini-1.5-pro"),
    ("gemini-1.0-pro", "gemini/gemini-1.0-pro"),
    ("claude-3-opus", "anthropic/claude-3-opus"),
    ("claude-3-sonnet", "anthropic/claude-3-sonnet"),
    ("claude-3-haiku", "anthropic/claude-3-haiku"),
    ("gpt-4", "openai/gpt-4"),
    ("gpt-4-turbo", "openai/gpt-4-turbo"),
    ("gpt-3.5-turbo", "openai/gpt-3.5-turbo"),
];

/// Resolve a friendly model name to its provider-qualified id.
pub fn resolve_model(name: &str) -> &str {
    MODEL_ALIASES
        .iter()
        .find(|(friendly, _)| *friendly == name)
        .map(|(_, qualified)| *qualified)
        .unwrap_or(name)
}

/// Split a provider-qualified id into (provider, model id).
/// Bare names default to the Gemini provider.
fn provider_and_model(resolved: &str) -> (&str, &str) {
    match resolved.split_once('/') {
        Some((provider, model)) => (provider, model),
        None => ("gemini", resolved),
    }
}

/// Chat completion engine holding read-only configuration fixed at startup.
pub struct CompletionEngine {
    client: Option<GeminiClient>,
    system_prompt: String,
    dev_mode: bool,
    use_real_api: bool,
    max_tokens: u32,
    default_model: String,
}

impl CompletionEngine {
    /// Creates the engine from configuration.
    ///
    /// # API Key Resolution
    /// 1. `llm.google_api_key` if set and non-empty
    /// 2. `GOOGLE_API_KEY` environment variable
    /// 3. Neither: no live client is constructed; live calls fail and
    ///    development mode serves canned output instead.
    ///
    /// # System Prompt Resolution
    /// 1. `agent.system_prompt_file` if set and readable
    /// 2. `agent.system_prompt` if set
    /// 3. The built-in default prompt
    pub async fn new(config: &SolaceConfig) -> Result<Self, SolaceError> {
        let client = match resolve_api_key(&config.llm.google_api_key) {
            Some(key) => Some(GeminiClient::new(&key)?),
            None => None,
        };
        let system_prompt = load_system_prompt(
            &config.agent.system_prompt,
            &config.agent.system_prompt_file,
        )
        .await;

        info!(
            dev_mode = config.agent.dev_mode,
            use_real_api = config.llm.use_real_api,
            gemini_available = client.is_some(),
            default_model = config.llm.default_model,
            "completion engine initialized"
        );

        Ok(Self {
            client,
            system_prompt,
            dev_mode: config.agent.dev_mode,
            use_real_api: config.llm.use_real_api,
            max_tokens: config.llm.max_tokens,
            default_model: config.llm.default_model.clone(),
        })
    }

    async fn complete_live(
        &self,
        history: &[ChatMessage],
        user_message: &str,
        resolved: &str,
    ) -> Result<String, SolaceError> {
        let (provider, model_id) = provider_and_model(resolved);
        if provider != "gemini" {
            return Err(SolaceError::Provider {
                message: format!("no live client configured for provider `{provider}`"),
                source: None,
            });
        }
        let client = self.client.as_ref().ok_or_else(|| SolaceError::Provider {
            message: "Gemini API key is not configured".to_string(),
            source: None,
        })?;

        let request = GenerateRequest {
            system_instruction: Some(Content::system(self.system_prompt.clone())),
            contents: build_contents(history, user_message),
            generation_config: Some(GenerationConfig {
                max_output_tokens: self.max_tokens,
            }),
        };

        debug!(
            model = model_id,
            turns = request.contents.len(),
            "sending completion request"
        );

        let response = client.generate(model_id, &request).await?;
        response.text().ok_or_else(|| SolaceError::Provider {
            message: "completion response contained no text".to_string(),
            source: None,
        })
    }
}

#[async_trait]
impl ChatResponder for CompletionEngine {
    async fn respond(
        &self,
        history: &[ChatMessage],
        message: &str,
        model: Option<&str>,
    ) -> Result<AssistantReply, SolaceError> {
        let requested = model.unwrap_or(&self.default_model);
        let resolved = resolve_model(requested);

        // Decided per call, not cached at startup.
        let use_mock = self.dev_mode && !self.use_real_api;
        if use_mock {
            debug!("development mode: serving canned completion");
            return Ok(mock::canned_reply(message));
        }

        match self.complete_live(history, message, resolved).await {
            Ok(text) => Ok(split::split_response(text.trim())),
            Err(e) => {
                error!(error = %e, model = resolved, "completion provider call failed");
                if self.dev_mode {
                    warn!("development mode: falling back to canned completion");
                    return Ok(mock::canned_reply(message));
                }
                Err(SolaceError::Provider {
                    message: UPSTREAM_ERROR_DETAIL.to_string(),
                    source: Some(Box::new(e)),
                })
            }
        }
    }
}

/// Build the upstream turn list: full history (assistant turns annotated
/// with their prior justification) followed by the new user message.
fn build_contents(history: &[ChatMessage], user_message: &str) -> Vec<Content> {
    let mut contents = Vec::with_capacity(history.len() + 1);
    for msg in history {
        let role = match msg.role {
            Role::User => "user",
            Role::Assistant => "model",
        };
        let mut text = msg.content.clone();
        if msg.role == Role::Assistant
            && let Some(justification) = &msg.justification
            && !justification.is_empty()
        {
            text.push_str(&format!(
                "\n[Context: My justification for the above response was: {justification}]"
            ));
        }
        contents.push(Content::text(role, text));
    }
    contents.push(Content::text("user", user_message));
    contents
}

/// Resolves the Gemini API key from config or environment.
///
/// Keys of 10 characters or fewer are treated as absent; a real key is
/// much longer and a truncated one only produces confusing 400s upstream.
fn resolve_api_key(config_key: &Option<String>) -> Option<String> {
    let key = config_key
        .clone()
        .filter(|k| !k.is_empty())
        .or_else(|| std::env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty()))?;

    if key.len() <= 10 {
        warn!("Gemini API key looks truncated; treating it as absent");
        return None;
    }
    Some(key)
}

/// Loads the system prompt following priority: file > inline > default.
async fn load_system_prompt(inline_prompt: &Option<String>, prompt_file: &Option<String>) -> String {
    if let Some(file_path) = prompt_file {
        match tokio::fs::read_to_string(file_path).await {
            Ok(content) => {
                let trimmed = content.trim().to_string();
                if !trimmed.is_empty() {
                    info!(path = file_path, "loaded system prompt from file");
                    return trimmed;
                }
            }
            Err(e) => {
                warn!(
                    path = file_path,
                    error = %e,
                    "failed to read system prompt file, falling back"
                );
            }
        }
    }

    if let Some(prompt) = inline_prompt
        && !prompt.is_empty()
    {
        return prompt.clone();
    }

    solace_config::DEFAULT_SYSTEM_PROMPT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_engine(client: Option<GeminiClient>, dev_mode: bool, use_real_api: bool) -> CompletionEngine {
        CompletionEngine {
            client,
            system_prompt: "Test prompt.".to_string(),
            dev_mode,
            use_real_api,
            max_tokens: 1024,
            default_model: "gemini-1.5-flash".to_string(),
        }
    }

    fn wired_client(base_url: &str) -> GeminiClient {
        GeminiClient::new("test-api-key-long-enough")
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    #[test]
    fn resolve_model_maps_known_aliases() {
        assert_eq!(resolve_model("gemini-1.5-flash"), "gemini/gemini-1.5-flash");
        assert_eq!(resolve_model("claude-3-haiku"), "anthropic/claude-3-haiku");
        assert_eq!(resolve_model("gpt-4-turbo"), "openai/gpt-4-turbo");
    }

    #[test]
    fn resolve_model_passes_through_unmapped_names() {
        assert_eq!(resolve_model("gemini-2.0-flash"), "gemini-2.0-flash");
    }

    #[test]
    fn provider_split_defaults_bare_names_to_gemini() {
        assert_eq!(
            provider_and_model("gemini/gemini-1.5-pro"),
            ("gemini", "gemini-1.5-pro")
        );
        assert_eq!(
            provider_and_model("gemini-2.0-flash"),
            ("gemini", "gemini-2.0-flash")
        );
        assert_eq!(
            provider_and_model("anthropic/claude-3-opus"),
            ("anthropic", "claude-3-opus")
        );
    }

    #[test]
    fn build_contents_maps_roles_and_appends_user_message() {
        let history = vec![
            ChatMessage {
                role: Role::User,
                content: "I need advice".into(),
                justification: None,
            },
            ChatMessage {
                role: Role::Assistant,
                content: "Try a budget.".into(),
                justification: Some("Budgets reveal spending.".into()),
            },
        ];
        let contents = build_contents(&history, "What next?");
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].role.as_deref(), Some("user"));
        assert_eq!(contents[1].role.as_deref(), Some("model"));
        assert_eq!(
            contents[1].parts[0].text,
            "Try a budget.\n[Context: My justification for the above response was: Budgets reveal spending.]"
        );
        assert_eq!(contents[2].role.as_deref(), Some("user"));
        assert_eq!(contents[2].parts[0].text, "What next?");
    }

    #[test]
    fn build_contents_skips_empty_justification() {
        let history = vec![ChatMessage {
            role: Role::Assistant,
            content: "Hello.".into(),
            justification: Some("".into()),
        }];
        let contents = build_contents(&history, "hi");
        assert_eq!(contents[0].parts[0].text, "Hello.");
    }

    #[test]
    fn resolve_api_key_prefers_config() {
        let key = resolve_api_key(&Some("config-key-that-is-long".into()));
        assert_eq!(key.as_deref(), Some("config-key-that-is-long"));
    }

    #[test]
    fn resolve_api_key_rejects_truncated_keys() {
        assert!(resolve_api_key(&Some("short".into())).is_none());
    }

    #[tokio::test]
    async fn system_prompt_defaults_when_unset() {
        let prompt = load_system_prompt(&None, &None).await;
        assert_eq!(prompt, solace_config::DEFAULT_SYSTEM_PROMPT);
    }

    #[tokio::test]
    async fn system_prompt_inline_overrides_default() {
        let prompt = load_system_prompt(&Some("Custom prompt.".into()), &None).await;
        assert_eq!(prompt, "Custom prompt.");
    }

    #[tokio::test]
    async fn system_prompt_file_overrides_inline() {
        let dir = std::env::temp_dir().join("solace-test-prompt");
        let _ = std::fs::create_dir_all(&dir);
        let file_path = dir.join("test-prompt.md");
        std::fs::write(&file_path, "File-based prompt.").unwrap();

        let prompt = load_system_prompt(
            &Some("Inline prompt.".into()),
            &Some(file_path.to_string_lossy().into_owned()),
        )
        .await;
        assert_eq!(prompt, "File-based prompt.");

        let _ = std::fs::remove_file(&file_path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[tokio::test]
    async fn system_prompt_missing_file_falls_back_to_inline() {
        let prompt = load_system_prompt(
            &Some("Fallback prompt.".into()),
            &Some("/nonexistent/path/prompt.md".into()),
        )
        .await;
        assert_eq!(prompt, "Fallback prompt.");
    }

    #[tokio::test]
    async fn dev_mode_serves_canned_reply_without_client() {
        let engine = test_engine(None, true, false);
        let reply = engine.respond(&[], "hello there", None).await.unwrap();
        assert!(reply.content.starts_with("Hello!"));
    }

    #[tokio::test]
    async fn live_success_is_split_into_reply() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{
                    "text": "Here is my advice.\nJustification: Because it addresses the root cause."
                }]},
                "finishReason": "STOP"
            }]
        });
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
            .and(body_partial_json(serde_json::json!({
                "generationConfig": {"maxOutputTokens": 1024}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let engine = test_engine(Some(wired_client(&server.uri())), false, false);
        let reply = engine.respond(&[], "What should I do?", None).await.unwrap();
        assert_eq!(reply.content, "Here is my advice.");
        assert_eq!(reply.justification, "Because it addresses the root cause.");
    }

    #[tokio::test]
    async fn live_failure_in_dev_mode_falls_back_to_canned_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        // dev_mode with use_real_api forces the live path first.
        let engine = test_engine(Some(wired_client(&server.uri())), true, true);
        let reply = engine.respond(&[], "my debt is growing", None).await.unwrap();
        assert!(reply.content.contains("financial challenges"));
    }

    #[tokio::test]
    async fn live_failure_in_production_returns_sanitized_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string("secret internal detail"),
            )
            .mount(&server)
            .await;

        let engine = test_engine(Some(wired_client(&server.uri())), false, false);
        let err = engine.respond(&[], "anything", None).await.unwrap_err();
        match err {
            SolaceError::Provider { message, .. } => {
                assert_eq!(message, UPSTREAM_ERROR_DETAIL);
                assert!(!message.contains("secret internal detail"));
            }
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_api_key_in_production_is_a_provider_error() {
        let engine = test_engine(None, false, false);
        let err = engine.respond(&[], "hello", None).await.unwrap_err();
        assert!(matches!(err, SolaceError::Provider { .. }));
    }

    #[tokio::test]
    async fn unsupported_provider_in_production_is_a_provider_error() {
        let engine = test_engine(None, false, false);
        let err = engine
            .respond(&[], "hello", Some("claude-3-opus"))
            .await
            .unwrap_err();
        match err {
            SolaceError::Provider { message, .. } => {
                assert_eq!(message, UPSTREAM_ERROR_DETAIL);
            }
            other => panic!("expected Provider error, got {other:?}"),
        }
    }
}

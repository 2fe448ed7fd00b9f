// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Solace chat backend.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Default system prompt for the completion engine.
///
/// Instructs the model to separate each answer from its justification with
/// the `Justification:` marker the response splitter looks for.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an AI assistant designed to help users solve their problems iteratively or provide empathetic support. \n\
If the user presents a problem, try to break it down and offer actionable suggestions. Ask clarifying questions if needed. \n\
If the user seems distressed or is sharing a personal issue, respond with empathy, validate their feelings, and offer consolation. \n\
Avoid giving unsolicited advice unless specifically asked for problem-solving. \n\
For every main suggestion or solution you provide, also give a short justification for why you are suggesting it. \n\
Structure your response clearly. The main response should be distinct from the justification, which should be prefixed with 'Justification:'.";

/// Top-level Solace configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SolaceConfig {
    /// Service identity and mode settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Identity provider settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Completion provider settings.
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Service identity and mode configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the service.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Development mode. Relaxes authentication (mock identity fallback)
    /// and substitutes deterministic mock completions. Never enable in
    /// production.
    #[serde(default)]
    pub dev_mode: bool,

    /// Inline system prompt string. Overridden by `system_prompt_file` if both set.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Path to a file containing the system prompt.
    /// Takes precedence over `system_prompt` if both are set.
    #[serde(default)]
    pub system_prompt_file: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            dev_mode: false,
            system_prompt: None,
            system_prompt_file: None,
        }
    }
}

fn default_agent_name() -> String {
    "solace".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Identity provider configuration.
///
/// When `project_id` is unset the verification backend stays uninitialized
/// and the mock-identity escape hatch applies to absent/sentinel tokens.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Identity provider project id (the token audience). `None` leaves
    /// the verification backend uninitialized.
    #[serde(default)]
    pub project_id: Option<String>,

    /// Uid of the fixed mock identity used in development mode.
    #[serde(default = "default_mock_uid")]
    pub mock_uid: String,

    /// Email of the fixed mock identity.
    #[serde(default = "default_mock_email")]
    pub mock_email: String,

    /// Display name of the fixed mock identity.
    #[serde(default = "default_mock_name")]
    pub mock_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            mock_uid: default_mock_uid(),
            mock_email: default_mock_email(),
            mock_name: default_mock_name(),
        }
    }
}

fn default_mock_uid() -> String {
    "dev-user-123".to_string()
}

fn default_mock_email() -> String {
    "dev@example.com".to_string()
}

fn default_mock_name() -> String {
    "Development User".to_string()
}

/// Completion provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Gemini API key. `None` falls back to the `GOOGLE_API_KEY`
    /// environment variable.
    #[serde(default)]
    pub google_api_key: Option<String>,

    /// Default friendly model name for completion requests.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Use the real completion API even in development mode.
    #[serde(default)]
    pub use_real_api: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            default_model: default_model(),
            max_tokens: default_max_tokens(),
            use_real_api: false,
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = SolaceConfig::default();
        assert_eq!(config.agent.name, "solace");
        assert_eq!(config.agent.log_level, "info");
        assert!(!config.agent.dev_mode);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.auth.project_id.is_none());
        assert_eq!(config.auth.mock_uid, "dev-user-123");
        assert_eq!(config.llm.default_model, "gemini-1.5-flash");
        assert_eq!(config.llm.max_tokens, 1024);
        assert!(!config.llm.use_real_api);
    }

    #[test]
    fn sections_deny_unknown_fields() {
        let toml_str = r#"
[llm]
googel_api_key = "abc"
"#;
        let result = toml::from_str::<SolaceConfig>(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn dev_mode_defaults_false_when_section_present() {
        let toml_str = r#"
[agent]
name = "test"
"#;
        let config: SolaceConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.agent.dev_mode);
    }

    #[test]
    fn default_system_prompt_mentions_justification_marker() {
        assert!(DEFAULT_SYSTEM_PROMPT.contains("'Justification:'"));
    }
}

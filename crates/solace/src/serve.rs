// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solace serve` command implementation.
//!
//! Constructs the token verifier and completion engine once from the
//! validated configuration, then hands them to the gateway as shared
//! read-only state. Nothing else is process-global; both components are
//! independently testable with injected configuration.

use std::sync::Arc;

use solace_auth::TokenVerifier;
use solace_config::SolaceConfig;
use solace_core::{ChatResponder, IdentityVerifier, SolaceError};
use solace_gateway::{start_server, AppState, ServerConfig};
use solace_llm::CompletionEngine;
use tracing::{info, warn};

/// Initializes the tracing subscriber from the configured log level.
///
/// `RUST_LOG` takes precedence over `agent.log_level` when set.
fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the `solace serve` command.
pub async fn run_serve(config: SolaceConfig) -> Result<(), SolaceError> {
    init_tracing(&config.agent.log_level);

    info!(name = config.agent.name, "starting solace serve");
    if config.agent.dev_mode {
        warn!(
            use_real_api = config.llm.use_real_api,
            "development mode is active -- authentication is relaxed and completions may be mocked"
        );
    }

    let verifier: Arc<dyn IdentityVerifier> = Arc::new(TokenVerifier::new(&config));
    let responder: Arc<dyn ChatResponder> = Arc::new(CompletionEngine::new(&config).await?);

    let state = AppState {
        verifier,
        responder,
        dev_mode: config.agent.dev_mode,
        service_name: config.agent.name.clone(),
    };

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    start_server(&server_config, state).await
}

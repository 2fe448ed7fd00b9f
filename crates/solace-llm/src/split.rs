// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splits raw completion text into a main response and a justification.
//!
//! The system prompt asks the model to prefix its justification with a
//! `Justification:` line, so the marker is tried first. The sentence-based
//! fallback is a best-effort heuristic: it treats every `.` as a clause
//! boundary and is knowingly lossy for abbreviations, decimals, and
//! ellipses. Splitting never fails; with no structure at all the whole
//! text becomes the main response.

use std::sync::LazyLock;

use regex::Regex;
use solace_core::AssistantReply;

/// Justification used when no marker is present and the text has at most
/// one sentence clause.
pub const GENERIC_JUSTIFICATION: &str =
    "This response aims to address your specific query with relevant information.";

/// Matches a `Justification:` line (at start of text or of a line) through
/// to the end of the text or the next blank line.
static JUSTIFICATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:^|\n)Justification:\s*(.*?)(?:$|\n\n)").expect("static pattern")
});

/// Split completion text into (main response, justification).
pub fn split_response(text: &str) -> AssistantReply {
    // Priority 1: explicit marker.
    if let Some(caps) = JUSTIFICATION_RE.captures(text) {
        let justification = caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let content = JUSTIFICATION_RE.replace_all(text, "").trim().to_string();
        return AssistantReply {
            content,
            justification,
        };
    }

    // Priority 2: treat the second-to-last sentence clause as the
    // justification. The split keeps the empty clause a trailing `.`
    // produces, matching the original service's output exactly.
    let clauses: Vec<&str> = text.split('.').collect();
    if clauses.len() > 1 {
        let justification = format!("{}.", clauses[clauses.len() - 2].trim());
        let content = format!("{}.", clauses[..clauses.len() - 2].join("."));
        return AssistantReply {
            content,
            justification,
        };
    }

    // Priority 3: no structure detected.
    AssistantReply {
        content: text.to_string(),
        justification: GENERIC_JUSTIFICATION.to_string(),
    }
}

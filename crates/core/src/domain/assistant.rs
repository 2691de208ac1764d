//! AI assistant request and response records.

use finpanel_shared::types::AccountId;
use serde::{Deserialize, Serialize};

/// Request body for the conversational assistant endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// The user's prompt.
    pub prompt: String,
    /// Rolling rendered history, most recent last. At most ten lines.
    #[serde(rename = "historico", default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<String>>,
    /// Account to ground the answer in.
    #[serde(rename = "contaId", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
}

impl PromptRequest {
    /// A bare prompt with no history or account context.
    #[must_use]
    pub fn simple(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            history: None,
            account_id: None,
        }
    }
}

/// Nested payload of the advisor and status endpoints.
///
/// The advisor endpoints wrap their text in this shape inside the regular
/// envelope; for status probes, `succeeded` is the health bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantPayload {
    /// Whether the assistant produced a result.
    #[serde(rename = "sucesso")]
    pub succeeded: bool,
    /// Human-readable status message.
    #[serde(rename = "mensagem")]
    pub message: String,
    /// The generated text.
    #[serde(rename = "dados")]
    pub text: String,
    /// Server timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

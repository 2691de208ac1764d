//! AI assistant resource client and conversation state.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;

use finpanel_core::domain::{AssistantPayload, Goal, PromptRequest};
use finpanel_shared::types::{AccountId, GoalId};
use finpanel_shared::{ApiError, ApiResult};

use crate::http::ApiClient;
use crate::retry::retry_with_backoff;

/// How many rendered messages of history travel with each prompt.
const HISTORY_WINDOW: usize = 10;

/// Client for `/api/ai`.
///
/// Generation is slow and the assistant backend flaps, so every
/// generating call runs under the retry combinator with a long timeout.
/// Status probes are quick, unretried, and map failure to "offline".
#[derive(Debug, Clone)]
pub struct AssistantClient {
    api: Arc<ApiClient>,
}

impl AssistantClient {
    /// Creates the client over a shared transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn generation_timeout(&self) -> Duration {
        self.api.config().backend.assistant_timeout()
    }

    async fn retrying<T, F, Fut>(&self, operation: F) -> ApiResult<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = ApiResult<T>>,
    {
        let retry = &self.api.config().retry;
        retry_with_backoff(operation, retry.max_attempts, retry.initial_delay()).await
    }

    async fn generate_advice(&self, method: Method, path: &str, body: Option<&Goal>) -> ApiResult<String> {
        let payload: AssistantPayload = self
            .retrying(|| {
                let mut builder = ApiClient::with_timeout(
                    self.api.request(method.clone(), path),
                    self.generation_timeout(),
                );
                if let Some(goal) = body {
                    builder = builder.json(goal);
                }
                self.api.fetch(builder)
            })
            .await?;
        Ok(payload.text)
    }

    async fn generate_text(&self, path: &str, request: &PromptRequest) -> ApiResult<String> {
        let payload = self
            .retrying(|| {
                let builder = ApiClient::with_timeout(
                    self.api.request(Method::POST, path).json(request),
                    self.generation_timeout(),
                );
                self.api.fetch_payload::<String>(builder)
            })
            .await?;
        Ok(payload.into_option().unwrap_or_default())
    }

    async fn probe_status(&self, path: &str) -> bool {
        let builder = ApiClient::with_timeout(
            self.api.request(Method::GET, path),
            self.api.config().backend.status_timeout(),
        );
        match self.api.fetch_payload::<AssistantPayload>(builder).await {
            Ok(payload) => payload.into_option().is_some_and(|p| p.succeeded),
            Err(_) => false,
        }
    }

    /// Generates an action plan for a goal.
    pub async fn action_plan(&self, goal_id: GoalId) -> ApiResult<String> {
        self.generate_advice(
            Method::GET,
            &format!("/api/ai/assistente-financeiro/plano-acao/{goal_id}"),
            None,
        )
        .await
    }

    /// Analyzes whether a prospective goal is feasible.
    pub async fn analyze_feasibility(&self, goal: &Goal) -> ApiResult<String> {
        self.generate_advice(
            Method::POST,
            "/api/ai/assistente-financeiro/analisar-viabilidade",
            Some(goal),
        )
        .await
    }

    /// Generates spending optimization suggestions for an account.
    pub async fn optimization_suggestions(&self, account_id: AccountId) -> ApiResult<String> {
        self.generate_advice(
            Method::GET,
            &format!("/api/ai/assistente-financeiro/sugestoes-otimizacao/{account_id}"),
            None,
        )
        .await
    }

    /// Whether the advisor backend is up.
    pub async fn advisor_status(&self) -> bool {
        self.probe_status("/api/ai/assistente-financeiro/status").await
    }

    /// Continues a conversation with rolling history.
    pub async fn converse(&self, request: &PromptRequest) -> ApiResult<String> {
        self.generate_text("/api/ai/dinamica/conversacao", request).await
    }

    /// Answers a prompt grounded in an account's data.
    pub async fn respond_with_context(
        &self,
        prompt: impl Into<String>,
        account_id: Option<AccountId>,
    ) -> ApiResult<String> {
        let request = PromptRequest {
            prompt: prompt.into(),
            history: None,
            account_id,
        };
        self.generate_text("/api/ai/dinamica/responder", &request).await
    }

    /// Answers a prompt with no grounding.
    pub async fn respond_simple(&self, prompt: impl Into<String>) -> ApiResult<String> {
        let request = PromptRequest::simple(prompt);
        self.generate_text("/api/ai/dinamica/responder-simples", &request)
            .await
    }

    /// Whether the conversational backend is up.
    pub async fn dynamic_status(&self) -> bool {
        self.probe_status("/api/ai/dinamica/status").await
    }
}

/// Who said a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// The person typing.
    User,
    /// The assistant.
    Assistant,
}

impl ChatRole {
    /// The prefix used when rendering history lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "Usuário",
            Self::Assistant => "IA",
        }
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who said it.
    pub role: ChatRole,
    /// What was said.
    pub content: String,
}

impl ChatMessage {
    fn rendered(&self) -> String {
        format!("{}: {}", self.role.label(), self.content)
    }
}

/// Rolling conversation state for the chat view.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    account_id: Option<AccountId>,
}

impl ChatSession {
    /// Starts a conversation, optionally grounded in an account.
    #[must_use]
    pub fn new(account_id: Option<AccountId>) -> Self {
        Self {
            messages: Vec::new(),
            account_id,
        }
    }

    /// The conversation so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Discards the conversation.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// The rendered history lines sent with the next prompt: at most the
    /// last ten messages, oldest first.
    #[must_use]
    pub fn history_window(&self) -> Vec<String> {
        let skip = self.messages.len().saturating_sub(HISTORY_WINDOW);
        self.messages[skip..].iter().map(ChatMessage::rendered).collect()
    }

    /// Sends a prompt, records both sides of the exchange, and returns the
    /// assistant's reply.
    ///
    /// Blank prompts and blank replies are rejected; on a failed call the
    /// user's message stays in the transcript so it can be retried.
    pub async fn send(
        &mut self,
        assistant: &AssistantClient,
        prompt: &str,
    ) -> ApiResult<String> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ApiError::Rejected("Pergunta vazia".to_string()));
        }

        let request = PromptRequest {
            prompt: prompt.to_string(),
            history: Some(self.history_window()),
            account_id: self.account_id,
        };
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: prompt.to_string(),
        });

        let reply = assistant.converse(&request).await?;
        if reply.trim().is_empty() {
            return Err(ApiError::Rejected(
                "Resposta vazia recebida da IA".to_string(),
            ));
        }

        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: reply.clone(),
        });
        Ok(reply)
    }
}

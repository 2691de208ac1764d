//! Savings goal resource client.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;

use finpanel_core::domain::{Goal, ProgressUpdate};
use finpanel_shared::types::{AccountId, GoalId};
use finpanel_shared::ApiResult;

use crate::envelope::Payload;
use crate::http::ApiClient;

/// The overdue-goals endpoint wraps its list in yet another shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OverdueResponse {
    Wrapped {
        #[serde(rename = "metas")]
        goals: Vec<Goal>,
    },
    Plain(Payload<Vec<Goal>>),
}

/// Client for `/api/v1/metas`.
#[derive(Debug, Clone)]
pub struct GoalsClient {
    api: Arc<ApiClient>,
}

impl GoalsClient {
    /// Creates the client over a shared transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists every goal visible to the session.
    pub async fn list(&self) -> ApiResult<Vec<Goal>> {
        self.api
            .fetch_list(self.api.request(Method::GET, "/api/v1/metas"))
            .await
    }

    /// Fetches one goal.
    pub async fn get(&self, id: GoalId) -> ApiResult<Goal> {
        self.api
            .fetch(self.api.request(Method::GET, &format!("/api/v1/metas/{id}")))
            .await
    }

    /// Creates a goal.
    pub async fn create(&self, goal: &Goal) -> ApiResult<Goal> {
        self.api
            .fetch(self.api.request(Method::POST, "/api/v1/metas").json(goal))
            .await
    }

    /// Creates a goal and asks the assistant for a feasibility analysis.
    pub async fn create_with_analysis(&self, goal: &Goal) -> ApiResult<Goal> {
        self.api
            .fetch(
                self.api
                    .request(Method::POST, "/api/v1/metas/com-analise-ia")
                    .json(goal),
            )
            .await
    }

    /// Updates a goal.
    pub async fn update(&self, id: GoalId, goal: &Goal) -> ApiResult<Goal> {
        self.api
            .fetch(
                self.api
                    .request(Method::PUT, &format!("/api/v1/metas/{id}"))
                    .json(goal),
            )
            .await
    }

    /// Deletes a goal.
    pub async fn delete(&self, id: GoalId) -> ApiResult<()> {
        self.api
            .fetch_unit(self.api.request(Method::DELETE, &format!("/api/v1/metas/{id}")))
            .await
    }

    /// Lists the goals of one account.
    pub async fn list_by_account(&self, account_id: AccountId) -> ApiResult<Vec<Goal>> {
        self.api
            .fetch_list(
                self.api
                    .request(Method::GET, &format!("/api/v1/metas/conta/{account_id}")),
            )
            .await
    }

    /// Adds to a goal's progress.
    pub async fn update_progress(&self, id: GoalId, update: &ProgressUpdate) -> ApiResult<Goal> {
        self.api
            .fetch(
                self.api
                    .request(Method::PUT, &format!("/api/v1/metas/{id}/progresso"))
                    .query(&[("valorAdicionado", update.amount_added.to_string())]),
            )
            .await
    }

    /// Pauses an active goal.
    pub async fn pause(&self, id: GoalId) -> ApiResult<Goal> {
        self.api
            .fetch(
                self.api
                    .request(Method::POST, &format!("/api/v1/metas/{id}/pausar")),
            )
            .await
    }

    /// Reactivates a paused goal.
    pub async fn reactivate(&self, id: GoalId) -> ApiResult<Goal> {
        self.api
            .fetch(
                self.api
                    .request(Method::POST, &format!("/api/v1/metas/{id}/reativar")),
            )
            .await
    }

    /// Asks the server to sweep goals past their end date.
    pub async fn check_overdue(&self) -> ApiResult<()> {
        self.api
            .fetch_unit(
                self.api
                    .request(Method::POST, "/api/v1/metas/verificar-vencidas"),
            )
            .await
    }

    /// Lists the overdue goals of one account.
    pub async fn list_overdue_by_account(&self, account_id: AccountId) -> ApiResult<Vec<Goal>> {
        let response: OverdueResponse = self
            .api
            .fetch_bare(self.api.request(
                Method::GET,
                &format!("/api/v1/metas/conta/{account_id}/vencidas"),
            ))
            .await?;
        Ok(match response {
            OverdueResponse::Wrapped { goals } => goals,
            OverdueResponse::Plain(payload) => payload.into_list(),
        })
    }
}

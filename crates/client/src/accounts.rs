//! Bank account resource client.

use std::sync::Arc;

use reqwest::Method;

use finpanel_core::domain::Account;
use finpanel_shared::types::AccountId;
use finpanel_shared::ApiResult;

use crate::http::ApiClient;

/// Client for `/api/v1/contas`.
#[derive(Debug, Clone)]
pub struct AccountsClient {
    api: Arc<ApiClient>,
}

impl AccountsClient {
    /// Creates the client over a shared transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists every account visible to the session.
    pub async fn list(&self) -> ApiResult<Vec<Account>> {
        self.api
            .fetch_list(self.api.request(Method::GET, "/api/v1/contas"))
            .await
    }

    /// Fetches one account.
    pub async fn get(&self, id: AccountId) -> ApiResult<Account> {
        self.api
            .fetch(self.api.request(Method::GET, &format!("/api/v1/contas/{id}")))
            .await
    }

    /// Creates an account.
    pub async fn create(&self, account: &Account) -> ApiResult<Account> {
        self.api
            .fetch(
                self.api
                    .request(Method::POST, "/api/v1/contas")
                    .json(account),
            )
            .await
    }

    /// Updates an account.
    pub async fn update(&self, id: AccountId, account: &Account) -> ApiResult<Account> {
        self.api
            .fetch(
                self.api
                    .request(Method::PUT, &format!("/api/v1/contas/{id}"))
                    .json(account),
            )
            .await
    }

    /// Deletes an account.
    pub async fn delete(&self, id: AccountId) -> ApiResult<()> {
        self.api
            .fetch_unit(
                self.api
                    .request(Method::DELETE, &format!("/api/v1/contas/{id}")),
            )
            .await
    }
}

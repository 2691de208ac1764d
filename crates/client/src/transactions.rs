//! Financial transaction resource client.

use std::sync::Arc;

use bytes::Bytes;
use chrono::NaiveDate;
use reqwest::Method;

use finpanel_core::domain::{ReportData, ReportRequest, Transaction, TransactionKind};
use finpanel_shared::types::{AccountId, TransactionId};
use finpanel_shared::ApiResult;

use crate::http::ApiClient;

/// Client for `/api/v1/movimentacoes`.
#[derive(Debug, Clone)]
pub struct TransactionsClient {
    api: Arc<ApiClient>,
}

impl TransactionsClient {
    /// Creates the client over a shared transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists every transaction visible to the session.
    pub async fn list(&self) -> ApiResult<Vec<Transaction>> {
        self.api
            .fetch_list(self.api.request(Method::GET, "/api/v1/movimentacoes"))
            .await
    }

    /// Fetches one transaction.
    pub async fn get(&self, id: TransactionId) -> ApiResult<Transaction> {
        self.api
            .fetch(
                self.api
                    .request(Method::GET, &format!("/api/v1/movimentacoes/{id}")),
            )
            .await
    }

    /// Creates a transaction.
    pub async fn create(&self, transaction: &Transaction) -> ApiResult<Transaction> {
        self.api
            .fetch(
                self.api
                    .request(Method::POST, "/api/v1/movimentacoes")
                    .json(transaction),
            )
            .await
    }

    /// Updates a transaction.
    pub async fn update(
        &self,
        id: TransactionId,
        transaction: &Transaction,
    ) -> ApiResult<Transaction> {
        self.api
            .fetch(
                self.api
                    .request(Method::PUT, &format!("/api/v1/movimentacoes/{id}"))
                    .json(transaction),
            )
            .await
    }

    /// Deletes a transaction.
    pub async fn delete(&self, id: TransactionId) -> ApiResult<()> {
        self.api
            .fetch_unit(
                self.api
                    .request(Method::DELETE, &format!("/api/v1/movimentacoes/{id}")),
            )
            .await
    }

    /// Lists the transactions of one account.
    pub async fn list_by_account(&self, account_id: AccountId) -> ApiResult<Vec<Transaction>> {
        self.api
            .fetch_list(
                self.api
                    .request(Method::GET, &format!("/api/v1/movimentacoes/conta/{account_id}")),
            )
            .await
    }

    /// Lists the transactions of one account, restricted to a kind.
    pub async fn list_by_account_and_kind(
        &self,
        account_id: AccountId,
        kind: TransactionKind,
    ) -> ApiResult<Vec<Transaction>> {
        self.api
            .fetch_list(self.api.request(
                Method::GET,
                &format!("/api/v1/movimentacoes/conta/{account_id}/tipo/{kind}"),
            ))
            .await
    }

    /// Lists the transactions of one account within a date range.
    pub async fn list_by_period(
        &self,
        account_id: AccountId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ApiResult<Vec<Transaction>> {
        self.api
            .fetch_list(
                self.api
                    .request(
                        Method::GET,
                        &format!("/api/v1/movimentacoes/conta/{account_id}/periodo"),
                    )
                    .query(&[
                        ("dataInicio", start_date.to_string()),
                        ("dataFim", end_date.to_string()),
                    ]),
            )
            .await
    }

    /// Reverses a completed transaction.
    pub async fn reverse(&self, id: TransactionId) -> ApiResult<Transaction> {
        self.api
            .fetch(
                self.api
                    .request(Method::POST, &format!("/api/v1/movimentacoes/{id}/estornar")),
            )
            .await
    }

    /// Renders the transaction report server-side and returns the PDF blob.
    pub async fn report_pdf(&self, request: &ReportRequest) -> ApiResult<Bytes> {
        self.api
            .fetch_bytes(
                self.api
                    .request(Method::POST, "/api/v1/movimentacoes/relatorio/pdf")
                    .json(request),
            )
            .await
    }

    /// Fetches the pre-aggregated report data for an external renderer.
    pub async fn report_data(&self, request: &ReportRequest) -> ApiResult<ReportData> {
        self.api
            .fetch_bare(
                self.api
                    .request(Method::POST, "/api/v1/movimentacoes/relatorio/dados")
                    .json(request),
            )
            .await
    }
}

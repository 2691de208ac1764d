//! Dashboard loading: concurrent fetch join + aggregation.

use std::sync::Arc;

use finpanel_core::summary::{dashboard_snapshot, DashboardSnapshot};
use finpanel_shared::ApiResult;

use crate::accounts::AccountsClient;
use crate::goals::GoalsClient;
use crate::http::ApiClient;
use crate::transactions::TransactionsClient;

/// Loads everything the dashboard needs in one join.
///
/// The three fetches run concurrently; if any one fails the whole load
/// fails and the caller falls back to the empty snapshot. Aggregation
/// happens client-side over the joined snapshot.
#[derive(Debug, Clone)]
pub struct DashboardService {
    accounts: AccountsClient,
    transactions: TransactionsClient,
    goals: GoalsClient,
}

impl DashboardService {
    /// Creates the service over a shared transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            accounts: AccountsClient::new(Arc::clone(&api)),
            transactions: TransactionsClient::new(Arc::clone(&api)),
            goals: GoalsClient::new(api),
        }
    }

    /// Fetches accounts, transactions, and goals concurrently and derives
    /// the dashboard snapshot.
    ///
    /// Category reconciliation runs as part of assembly; any mismatch is
    /// logged as a warning and carried in the snapshot, never an error.
    pub async fn load(&self) -> ApiResult<DashboardSnapshot> {
        let (accounts, transactions, goals) = tokio::try_join!(
            self.accounts.list(),
            self.transactions.list(),
            self.goals.list(),
        )?;

        let snapshot = dashboard_snapshot(&accounts, &transactions, &goals);
        if !snapshot.discrepancies.is_empty() {
            tracing::warn!(
                mismatches = snapshot.discrepancies.len(),
                "category totals diverge from the chart series; display-logic defect"
            );
        }
        Ok(snapshot)
    }

    /// Like [`load`](Self::load), but degrades to the empty snapshot when
    /// any fetch fails.
    pub async fn load_or_empty(&self) -> DashboardSnapshot {
        match self.load().await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!(error = %error, "dashboard load failed, serving empty state");
                DashboardSnapshot::default()
            }
        }
    }
}

//! Balance and dashboard aggregation.
//!
//! Pure, read-only folds over already-fetched snapshots:
//! - Per-account balances from type-signed amounts
//! - Aggregate income/expense/balance totals
//! - Per-category totals with a separate chart-magnitude channel
//! - Reconciliation between independently derived category views
//! - Dashboard snapshot assembly
//!
//! Nothing here errors: empty or irrelevant input degrades to zero/empty
//! results.

pub mod balance;
pub mod category;
pub mod dashboard;
pub mod reconcile;
pub mod types;

#[cfg(test)]
mod props;

pub use balance::{account_balance, account_balances, aggregate_summary};
pub use category::{category_sums, category_totals, CHART_EPSILON};
pub use dashboard::{dashboard_snapshot, recent_transactions};
pub use reconcile::{reconcile, RECONCILE_TOLERANCE};
pub use types::{
    AccountBalance, AggregateSummary, CashFlow, CategoryTotal, DashboardSnapshot, Discrepancy,
};

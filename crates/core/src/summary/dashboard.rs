//! Dashboard snapshot assembly.

use std::collections::BTreeMap;

use crate::domain::{Account, Category, Goal, Transaction};

use super::balance::aggregate_summary;
use super::category::{category_sums, category_totals};
use super::reconcile::reconcile;
use super::types::{CashFlow, DashboardSnapshot};

/// Number of transactions shown in the recent-activity list.
const RECENT_LIMIT: usize = 10;

/// Returns the most recent transactions, newest first.
#[must_use]
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));
    recent.truncate(limit);
    recent
}

/// Derives everything the dashboard renders from one fetch join.
///
/// Runs the category reconciliation self-check as part of assembly; any
/// discrepancies land in the snapshot for the caller to surface.
#[must_use]
pub fn dashboard_snapshot(
    accounts: &[Account],
    transactions: &[Transaction],
    goals: &[Goal],
) -> DashboardSnapshot {
    let totals = aggregate_summary(accounts, transactions);

    let category_series = category_totals(transactions, &Category::ALL);
    let expected = category_sums(transactions);
    let displayed: BTreeMap<_, _> = category_series
        .iter()
        .map(|entry| (entry.category, entry.total))
        .collect();
    let discrepancies = reconcile(&expected, &displayed);

    DashboardSnapshot {
        totals,
        active_goals: goals.iter().filter(|g| g.is_active()).count(),
        overdue_goals: goals.iter().filter(|g| g.is_overdue()).count(),
        cash_flow: CashFlow {
            inflow: totals.total_income,
            outflow: totals.total_expense,
        },
        category_totals: category_series,
        discrepancies,
        recent_transactions: recent_transactions(transactions, RECENT_LIMIT),
    }
}

//! Aggregation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finpanel_shared::types::AccountId;

use crate::domain::{Category, Transaction};

/// Derived balance of a single account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The account.
    pub account_id: AccountId,
    /// Net balance over the account's completed transactions.
    pub balance: Decimal,
}

/// Aggregate totals across all accounts.
///
/// `total_income` and `total_expense` are independent passes over the same
/// completed-transaction set, not derived from `total_balance`, so
/// `total_balance == total_income - total_expense` is a checkable identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Sum of every account's balance.
    pub total_balance: Decimal,
    /// Sum of completed income amounts.
    pub total_income: Decimal,
    /// Sum of completed expense, transfer, and investment amounts.
    pub total_expense: Decimal,
}

/// Two-point inflow/outflow series for the dashboard bar chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Completed income ("Entrada").
    pub inflow: Decimal,
    /// Completed outflow ("Saída").
    pub outflow: Decimal,
}

/// Per-category total with a separate chart-magnitude channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category.
    pub category: Category,
    /// True total; this is the value to display.
    pub total: Decimal,
    /// Magnitude for proportional renderers: the true total, or a small
    /// epsilon when the total is zero so the slice stays visible.
    pub chart_value: Decimal,
}

/// A mismatch between two independently derived category aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// The category that diverged.
    pub category: Category,
    /// Value from the transaction-side pass.
    pub expected: Decimal,
    /// Value from the chart-side pass.
    pub displayed: Decimal,
}

/// Everything the dashboard renders, derived from one fetch join.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Aggregate totals.
    pub totals: AggregateSummary,
    /// Number of active goals.
    pub active_goals: usize,
    /// Number of overdue goals.
    pub overdue_goals: usize,
    /// Inflow/outflow series.
    pub cash_flow: CashFlow,
    /// Ordered category totals for the pie chart.
    pub category_totals: Vec<CategoryTotal>,
    /// Reconciliation mismatches; non-empty indicates a display-logic
    /// defect and is surfaced as a warning, never an error.
    pub discrepancies: Vec<Discrepancy>,
    /// Most recent transactions, newest first.
    pub recent_transactions: Vec<Transaction>,
}

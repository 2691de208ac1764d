//! Per-category aggregation with a chart-magnitude channel.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::{Category, Transaction};

use super::types::CategoryTotal;

/// Minimal positive magnitude substituted for a true zero in the chart
/// channel, so proportional renderers do not produce an invisible slice.
/// The displayed value stays the true zero.
pub const CHART_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 4); // 0.0001

/// Sums completed-transaction amounts per category.
///
/// Categories with no activity are absent from the map. This is the
/// transaction-side pass used as the reconciliation reference.
#[must_use]
pub fn category_sums(transactions: &[Transaction]) -> BTreeMap<Category, Decimal> {
    let mut sums = BTreeMap::new();
    for transaction in transactions.iter().filter(|t| t.is_effective()) {
        *sums.entry(transaction.category).or_insert(Decimal::ZERO) += transaction.amount;
    }
    sums
}

/// Builds the ordered category series for the pie chart.
///
/// Every category in `categories` appears, in the given order, so chart
/// legends stay stable; zero-activity categories report a true total of
/// zero and [`CHART_EPSILON`] in the chart channel.
#[must_use]
pub fn category_totals(transactions: &[Transaction], categories: &[Category]) -> Vec<CategoryTotal> {
    let sums = category_sums(transactions);
    categories
        .iter()
        .map(|&category| {
            let total = sums.get(&category).copied().unwrap_or(Decimal::ZERO);
            let chart_value = if total > Decimal::ZERO {
                total
            } else {
                CHART_EPSILON
            };
            CategoryTotal {
                category,
                total,
                chart_value,
            }
        })
        .collect()
}

//! Consistency check between independently derived category aggregates.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::Category;

use super::types::Discrepancy;

/// Maximum absolute difference treated as equal.
pub const RECONCILE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 4); // 0.0001

/// Compares two category aggregates expected to be equal.
///
/// `expected` is the transaction-side pass, `displayed` the chart-side
/// series. Emits one record per category whose values diverge by more than
/// [`RECONCILE_TOLERANCE`]. A non-empty result indicates a display-logic
/// defect; callers surface it as a warning rather than failing the load.
#[must_use]
pub fn reconcile(
    expected: &BTreeMap<Category, Decimal>,
    displayed: &BTreeMap<Category, Decimal>,
) -> Vec<Discrepancy> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let expected_value = expected.get(&category).copied().unwrap_or(Decimal::ZERO);
            let displayed_value = displayed.get(&category).copied().unwrap_or(Decimal::ZERO);
            let delta = (expected_value - displayed_value).abs();
            (delta > RECONCILE_TOLERANCE).then_some(Discrepancy {
                category,
                expected: expected_value,
                displayed: displayed_value,
            })
        })
        .collect()
}

//! Property tests for the aggregation engine.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use finpanel_shared::types::AccountId;

use crate::domain::{Account, Category, Transaction, TransactionSource, TransactionStatus};

use super::balance::{account_balance, aggregate_summary};
use super::category::{category_sums, category_totals, CHART_EPSILON};
use super::reconcile::reconcile;

const ACCOUNT_IDS: [i64; 3] = [1, 2, 3];

fn accounts() -> Vec<Account> {
    ACCOUNT_IDS
        .iter()
        .map(|&id| Account {
            id: Some(AccountId::from_raw(id)),
            bank: "Banco".into(),
            branch_number: "0001".into(),
            account_number: format!("{id}-0"),
            account_kind: "Corrente".into(),
            holder: "Ana".into(),
        })
        .collect()
}

/// Strategy for non-negative amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn status_strategy() -> impl Strategy<Value = TransactionStatus> {
    prop::sample::select(vec![
        TransactionStatus::Pending,
        TransactionStatus::Completed,
        TransactionStatus::Cancelled,
        TransactionStatus::Reversed,
    ])
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        prop::sample::select(ACCOUNT_IDS.to_vec()),
        category_strategy(),
        amount_strategy(),
        status_strategy(),
        1u32..=28,
    )
        .prop_map(|(account_id, category, amount, status, day)| Transaction {
            id: None,
            kind: category.kind(),
            amount,
            description: "generated".into(),
            category,
            occurred_on: NaiveDate::from_ymd_opt(2025, 7, day).expect("valid day"),
            status: Some(status),
            source: TransactionSource::Manual,
            notes: None,
            account_id: AccountId::from_raw(account_id),
            source_file: None,
            external_reference: None,
            balance_before: None,
            balance_after: None,
        })
}

fn transactions_strategy(max_len: usize) -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 0..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balance is a plain sum: any reordering of the input produces the
    /// same result.
    #[test]
    fn balance_is_order_invariant(
        (original, shuffled) in transactions_strategy(30)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        for &id in &ACCOUNT_IDS {
            let account_id = AccountId::from_raw(id);
            prop_assert_eq!(
                account_balance(&original, account_id),
                account_balance(&shuffled, account_id)
            );
        }
    }

    /// The aggregate identity: with every transaction owned by a listed
    /// account, total balance equals income minus expense even though the
    /// three totals are computed by independent passes.
    #[test]
    fn aggregate_identity_holds(transactions in transactions_strategy(40)) {
        let summary = aggregate_summary(&accounts(), &transactions);
        prop_assert_eq!(
            summary.total_balance,
            summary.total_income - summary.total_expense
        );
    }

    /// Income and expense totals only ever grow with more completed
    /// transactions, never shrink: both are sums of non-negative amounts.
    #[test]
    fn totals_are_non_negative(transactions in transactions_strategy(40)) {
        let summary = aggregate_summary(&accounts(), &transactions);
        prop_assert!(summary.total_income >= Decimal::ZERO);
        prop_assert!(summary.total_expense >= Decimal::ZERO);
    }

    /// The chart series always covers the requested legend, in order, and
    /// its true-value channel reconciles against the transaction-side pass
    /// with zero discrepancies.
    #[test]
    fn chart_series_reconciles(transactions in transactions_strategy(40)) {
        let series = category_totals(&transactions, &Category::ALL);
        prop_assert_eq!(series.len(), Category::ALL.len());

        let expected = category_sums(&transactions);
        let displayed = series
            .iter()
            .map(|entry| (entry.category, entry.total))
            .collect();
        prop_assert!(reconcile(&expected, &displayed).is_empty());
    }

    /// The chart-magnitude channel is never zero: true zeros are replaced
    /// by the epsilon, real totals pass through unchanged.
    #[test]
    fn chart_channel_is_never_degenerate(transactions in transactions_strategy(40)) {
        for entry in category_totals(&transactions, &Category::ALL) {
            prop_assert!(entry.chart_value > Decimal::ZERO);
            if entry.total > Decimal::ZERO {
                prop_assert_eq!(entry.chart_value, entry.total);
            } else {
                prop_assert_eq!(entry.chart_value, CHART_EPSILON);
            }
        }
    }

    /// The sum of all category totals equals completed income plus
    /// completed expense: the two decompositions cover the same set.
    #[test]
    fn category_totals_partition_the_flow(transactions in transactions_strategy(40)) {
        let summary = aggregate_summary(&accounts(), &transactions);
        let total: Decimal = category_totals(&transactions, &Category::ALL)
            .iter()
            .map(|entry| entry.total)
            .sum();
        prop_assert_eq!(total, summary.total_income + summary.total_expense);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Pagination over a generated list: every item appears on exactly one
    /// page and page boundaries respect the requested size.
    #[test]
    fn pagination_partitions_items(
        len in 0usize..120,
        page_size in 1usize..20,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let first = finpanel_shared::types::paginate(&items, page_size, 1);

        let mut seen = Vec::new();
        for page_number in 1..=first.total_pages {
            let page = finpanel_shared::types::paginate(&items, page_size, page_number);
            prop_assert!(page.items.len() <= page_size);
            seen.extend(page.items);
        }
        prop_assert_eq!(seen, items);
    }
}

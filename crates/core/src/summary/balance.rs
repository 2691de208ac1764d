//! Account balance and aggregate total computation.

use rust_decimal::Decimal;

use finpanel_shared::types::AccountId;

use crate::domain::{Account, Transaction, TransactionKind};

use super::types::{AccountBalance, AggregateSummary};

/// Computes the balance of one account.
///
/// Only completed transactions owned by `account_id` contribute; each one
/// adds its type-signed amount. A plain sum, so the result is invariant
/// under reordering of the input. Zero when nothing matches.
#[must_use]
pub fn account_balance(transactions: &[Transaction], account_id: AccountId) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.account_id == account_id)
        .map(Transaction::signed_amount)
        .sum()
}

/// Computes the balance of every listed account.
#[must_use]
pub fn account_balances(accounts: &[Account], transactions: &[Transaction]) -> Vec<AccountBalance> {
    accounts
        .iter()
        .filter_map(|account| account.id)
        .map(|account_id| AccountBalance {
            account_id,
            balance: account_balance(transactions, account_id),
        })
        .collect()
}

/// Computes the dashboard's aggregate totals.
///
/// `total_balance` sums `account_balance` over all accounts; income and
/// expense are separate passes over the same completed-transaction set.
#[must_use]
pub fn aggregate_summary(accounts: &[Account], transactions: &[Transaction]) -> AggregateSummary {
    let total_balance = accounts
        .iter()
        .filter_map(|account| account.id)
        .map(|account_id| account_balance(transactions, account_id))
        .sum();

    let total_income = transactions
        .iter()
        .filter(|t| t.is_effective() && t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();

    let total_expense = transactions
        .iter()
        .filter(|t| {
            t.is_effective()
                && matches!(
                    t.kind,
                    TransactionKind::Expense
                        | TransactionKind::Transfer
                        | TransactionKind::Investment
                )
        })
        .map(|t| t.amount)
        .sum();

    AggregateSummary {
        total_balance,
        total_income,
        total_expense,
    }
}

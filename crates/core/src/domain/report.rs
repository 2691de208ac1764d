//! Transaction report records.
//!
//! The PDF renderer is an external collaborator: it receives the prepared
//! `ReportData` object (or the server-rendered blob) and produces a file.

use chrono::NaiveDate;
use finpanel_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};

/// Parameters for the report endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Account to report on.
    #[serde(rename = "contaId")]
    pub account_id: AccountId,
    /// Period start, inclusive.
    #[serde(
        rename = "dataInicio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    /// Period end, inclusive.
    #[serde(rename = "dataFim", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Restrict to a single transaction kind.
    #[serde(
        rename = "tipoMovimentacao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<TransactionKind>,
    /// Report title.
    #[serde(
        rename = "tituloRelatorio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Whether to include the aggregate summary block.
    #[serde(
        rename = "incluirResumo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub include_summary: Option<bool>,
}

/// Condensed account identification for report headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Bank name.
    #[serde(rename = "banco")]
    pub bank: String,
    /// Branch number.
    #[serde(rename = "numeroAgencia")]
    pub branch_number: String,
    /// Account number.
    #[serde(rename = "numeroConta")]
    pub account_number: String,
    /// Responsible party.
    #[serde(rename = "responsavel")]
    pub holder: String,
}

/// Pre-aggregated report data, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// Report title.
    #[serde(rename = "tituloRelatorio")]
    pub title: String,
    /// Account header.
    #[serde(rename = "conta")]
    pub account: AccountSummary,
    /// Generation timestamp, as formatted by the server.
    #[serde(rename = "dataGeracao")]
    pub generated_at: String,
    /// Transactions in the reported period.
    #[serde(rename = "movimentacoes")]
    pub transactions: Vec<Transaction>,
    /// Sum of completed income.
    #[serde(rename = "totalReceitas")]
    pub total_income: Decimal,
    /// Sum of completed expenses.
    #[serde(rename = "totalDespesas")]
    pub total_expense: Decimal,
    /// Net amount over the period.
    #[serde(rename = "saldoLiquido")]
    pub net_amount: Decimal,
    /// Account balance at generation time.
    #[serde(rename = "saldoAtual")]
    pub current_balance: Decimal,
    /// Period start echo.
    #[serde(
        rename = "dataInicio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    /// Period end echo.
    #[serde(rename = "dataFim", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Kind filter echo.
    #[serde(
        rename = "tipoMovimentacao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<TransactionKind>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn request_omits_absent_filters() {
        let request = ReportRequest {
            account_id: AccountId::from_raw(1),
            start_date: None,
            end_date: None,
            kind: None,
            title: None,
            include_summary: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"contaId": 1}));
    }

    #[test]
    fn report_data_decodes_string_amounts() {
        let json = serde_json::json!({
            "tituloRelatorio": "Extrato",
            "conta": {
                "banco": "Itaú",
                "numeroAgencia": "0001",
                "numeroConta": "1234-5",
                "responsavel": "Ana"
            },
            "dataGeracao": "2025-08-01 10:00",
            "movimentacoes": [],
            "totalReceitas": "1000.00",
            "totalDespesas": "250.00",
            "saldoLiquido": "750.00",
            "saldoAtual": "750.00"
        });
        let data: ReportData = serde_json::from_value(json).unwrap();
        assert_eq!(data.total_income, dec!(1000.00));
        assert_eq!(data.net_amount, dec!(750.00));
        assert!(data.transactions.is_empty());
    }
}

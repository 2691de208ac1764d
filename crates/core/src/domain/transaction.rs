//! Financial transaction records and their fixed classification sets.

use chrono::NaiveDate;
use finpanel_shared::types::{AccountId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction type classification.
///
/// The type determines the sign of a transaction's contribution to an
/// account balance: income adds, everything else subtracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money coming in.
    #[serde(rename = "RECEITA")]
    Income,
    /// Money going out.
    #[serde(rename = "DESPESA")]
    Expense,
    /// Transfer to another account.
    #[serde(rename = "TRANSFERENCIA")]
    Transfer,
    /// Money moved into an investment.
    #[serde(rename = "INVESTIMENTO")]
    Investment,
}

impl TransactionKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 4] = [Self::Income, Self::Expense, Self::Transfer, Self::Investment];

    /// The signed factor applied to the amount in balance computations.
    #[must_use]
    pub fn sign_factor(self) -> Decimal {
        match self {
            Self::Income => Decimal::ONE,
            Self::Expense | Self::Transfer | Self::Investment => Decimal::NEGATIVE_ONE,
        }
    }

    /// The name used on the wire and in URL path segments.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Income => "RECEITA",
            Self::Expense => "DESPESA",
            Self::Transfer => "TRANSFERENCIA",
            Self::Investment => "INVESTIMENTO",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Receita",
            Self::Expense => "Despesa",
            Self::Transfer => "Transferência",
            Self::Investment => "Investimento",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Transaction status.
///
/// Only completed transactions count toward balances and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Recorded but not yet settled.
    #[serde(rename = "PENDENTE")]
    Pending,
    /// Settled; the only status that affects balances.
    #[serde(rename = "CONCLUIDA")]
    Completed,
    /// Cancelled before settling.
    #[serde(rename = "CANCELADA")]
    Cancelled,
    /// Reversed after settling.
    #[serde(rename = "ESTORNADA")]
    Reversed,
}

impl TransactionStatus {
    /// Returns true if this status contributes to balance computations.
    #[must_use]
    pub fn counts_toward_balance(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Completed => "Concluída",
            Self::Cancelled => "Cancelada",
            Self::Reversed => "Estornada",
        }
    }
}

/// How a transaction entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionSource {
    /// Entered by hand.
    #[serde(rename = "MANUAL")]
    Manual,
    /// Imported from a file.
    #[serde(rename = "IMPORTACAO_ARQUIVO")]
    FileImport,
    /// Pulled from a bank API.
    #[serde(rename = "API_BANCARIA")]
    BankApi,
    /// Created by an automatic transfer.
    #[serde(rename = "TRANSFERENCIA_AUTOMATICA")]
    AutoTransfer,
}

/// Fixed category set, keyed by transaction kind.
///
/// Declaration order is the chart legend order: income categories first,
/// then expenses, transfers, and investments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    // Income
    /// Salary.
    #[serde(rename = "SALARIO")]
    Salary,
    /// Sales.
    #[serde(rename = "VENDAS")]
    Sales,
    /// Investment yields.
    #[serde(rename = "INVESTIMENTOS_RENDIMENTOS")]
    InvestmentYields,
    /// Loans received.
    #[serde(rename = "EMPRESTIMOS_RECEBIDOS")]
    LoansReceived,
    /// Other income.
    #[serde(rename = "OUTRAS_RECEITAS")]
    OtherIncome,
    // Expenses
    /// Food.
    #[serde(rename = "ALIMENTACAO")]
    Food,
    /// Transport.
    #[serde(rename = "TRANSPORTE")]
    Transport,
    /// Housing.
    #[serde(rename = "MORADIA")]
    Housing,
    /// Health.
    #[serde(rename = "SAUDE")]
    Health,
    /// Education.
    #[serde(rename = "EDUCACAO")]
    Education,
    /// Leisure.
    #[serde(rename = "LAZER")]
    Leisure,
    /// Utilities.
    #[serde(rename = "UTILIDADES")]
    Utilities,
    /// Shopping.
    #[serde(rename = "COMPRAS")]
    Shopping,
    /// Services.
    #[serde(rename = "SERVICOS")]
    Services,
    /// Money applied to investments, recorded as an expense.
    #[serde(rename = "INVESTIMENTOS_APLICADOS")]
    InvestmentsApplied,
    /// Loan payments.
    #[serde(rename = "EMPRESTIMOS_PAGOS")]
    LoansPaid,
    /// Other expenses.
    #[serde(rename = "OUTRAS_DESPESAS")]
    OtherExpenses,
    // Transfers
    /// Transfer between own accounts.
    #[serde(rename = "TRANSFERENCIA_ENTRE_CONTAS")]
    AccountTransfer,
    // Investments
    /// Savings account.
    #[serde(rename = "POUPANCA")]
    Savings,
    /// Bank deposit certificate.
    #[serde(rename = "CDB")]
    BankDeposit,
    /// Investment funds.
    #[serde(rename = "FUNDOS")]
    Funds,
    /// Stocks.
    #[serde(rename = "ACOES")]
    Stocks,
    /// Cryptocurrency.
    #[serde(rename = "CRIPTOMOEDAS")]
    Crypto,
}

impl Category {
    /// All categories, in chart legend order.
    pub const ALL: [Self; 23] = [
        Self::Salary,
        Self::Sales,
        Self::InvestmentYields,
        Self::LoansReceived,
        Self::OtherIncome,
        Self::Food,
        Self::Transport,
        Self::Housing,
        Self::Health,
        Self::Education,
        Self::Leisure,
        Self::Utilities,
        Self::Shopping,
        Self::Services,
        Self::InvestmentsApplied,
        Self::LoansPaid,
        Self::OtherExpenses,
        Self::AccountTransfer,
        Self::Savings,
        Self::BankDeposit,
        Self::Funds,
        Self::Stocks,
        Self::Crypto,
    ];

    /// The transaction kind this category belongs to.
    #[must_use]
    pub const fn kind(self) -> TransactionKind {
        match self {
            Self::Salary
            | Self::Sales
            | Self::InvestmentYields
            | Self::LoansReceived
            | Self::OtherIncome => TransactionKind::Income,
            Self::Food
            | Self::Transport
            | Self::Housing
            | Self::Health
            | Self::Education
            | Self::Leisure
            | Self::Utilities
            | Self::Shopping
            | Self::Services
            | Self::InvestmentsApplied
            | Self::LoansPaid
            | Self::OtherExpenses => TransactionKind::Expense,
            Self::AccountTransfer => TransactionKind::Transfer,
            Self::Savings | Self::BankDeposit | Self::Funds | Self::Stocks | Self::Crypto => {
                TransactionKind::Investment
            }
        }
    }

    /// All categories belonging to a kind, in legend order.
    #[must_use]
    pub fn for_kind(kind: TransactionKind) -> Vec<Self> {
        Self::ALL.iter().copied().filter(|c| c.kind() == kind).collect()
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Salary => "Salário",
            Self::Sales => "Vendas",
            Self::InvestmentYields => "Investimentos/Rendimentos",
            Self::LoansReceived => "Empréstimos Recebidos",
            Self::OtherIncome => "Outras Receitas",
            Self::Food => "Alimentação",
            Self::Transport => "Transporte",
            Self::Housing => "Moradia",
            Self::Health => "Saúde",
            Self::Education => "Educação",
            Self::Leisure => "Lazer",
            Self::Utilities => "Utilidades",
            Self::Shopping => "Compras",
            Self::Services => "Serviços",
            Self::InvestmentsApplied => "Investimentos Aplicados",
            Self::LoansPaid => "Empréstimos Pagos",
            Self::OtherExpenses => "Outras Despesas",
            Self::AccountTransfer => "Transferência entre Contas",
            Self::Savings => "Poupança",
            Self::BankDeposit => "CDB",
            Self::Funds => "Fundos",
            Self::Stocks => "Ações",
            Self::Crypto => "Criptomoedas",
        }
    }
}

/// A financial transaction, as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier; absent when creating a new transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransactionId>,
    /// Transaction type.
    #[serde(rename = "tipoMovimentacao")]
    pub kind: TransactionKind,
    /// Monetary amount; non-negative by contract.
    #[serde(rename = "valor")]
    pub amount: Decimal,
    /// Description shown in listings.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Category, drawn from the fixed set keyed by kind.
    #[serde(rename = "categoria")]
    pub category: Category,
    /// Occurrence date.
    #[serde(rename = "dataMovimentacao")]
    pub occurred_on: NaiveDate,
    /// Status; the backend defaults new transactions to pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// How the transaction entered the system.
    #[serde(rename = "fonteMovimentacao")]
    pub source: TransactionSource,
    /// Free-form notes.
    #[serde(
        rename = "observacoes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    /// Owning account.
    #[serde(rename = "contaId")]
    pub account_id: AccountId,
    /// Name of the imported file, for file-import transactions.
    #[serde(
        rename = "arquivoOrigem",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_file: Option<String>,
    /// External identifier, for bank-API transactions.
    #[serde(
        rename = "identificadorExterno",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_reference: Option<String>,
    /// Balance snapshot before this transaction, when the server provides it.
    #[serde(
        rename = "saldoAnterior",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub balance_before: Option<Decimal>,
    /// Balance snapshot after this transaction, when the server provides it.
    #[serde(
        rename = "saldoAtual",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub balance_after: Option<Decimal>,
}

impl Transaction {
    /// Returns true if this transaction counts toward balances.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.status.is_some_and(TransactionStatus::counts_toward_balance)
    }

    /// The signed contribution of this transaction to its account balance.
    ///
    /// Zero unless the transaction is completed.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        if self.is_effective() {
            self.kind.sign_factor() * self.amount
        } else {
            Decimal::ZERO
        }
    }
}

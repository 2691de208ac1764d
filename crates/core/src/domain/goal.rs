//! Savings goal records.

use chrono::NaiveDate;
use finpanel_shared::types::{AccountId, GoalId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Goal type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalKind {
    /// Monthly savings target.
    #[serde(rename = "ECONOMIA_MENSAL")]
    MonthlySavings,
    /// Yearly savings target.
    #[serde(rename = "ECONOMIA_ANUAL")]
    YearlySavings,
    /// Emergency fund.
    #[serde(rename = "RESERVA_EMERGENCIA")]
    EmergencyFund,
    /// A specific investment.
    #[serde(rename = "INVESTIMENTO_ESPECIFICO")]
    SpecificInvestment,
    /// Saving up for a purchase.
    #[serde(rename = "COMPRA_OBJETO")]
    Purchase,
    /// Travel.
    #[serde(rename = "VIAGEM")]
    Travel,
    /// Education.
    #[serde(rename = "EDUCACAO")]
    Education,
    /// Health.
    #[serde(rename = "SAUDE")]
    Health,
    /// Anything else.
    #[serde(rename = "OUTROS")]
    Other,
}

/// Goal lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalStatus {
    /// In progress.
    #[serde(rename = "ATIVA")]
    Active,
    /// Target reached.
    #[serde(rename = "CONCLUIDA")]
    Completed,
    /// Paused by the user.
    #[serde(rename = "PAUSADA")]
    Paused,
    /// Cancelled by the user.
    #[serde(rename = "CANCELADA")]
    Cancelled,
    /// End date passed without reaching the target.
    #[serde(rename = "VENCIDA")]
    Overdue,
}

/// A savings goal, as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Identifier; absent when creating a new goal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GoalId>,
    /// Goal name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Optional description.
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Goal type.
    #[serde(rename = "tipoMeta")]
    pub kind: GoalKind,
    /// Target amount; strictly positive.
    #[serde(rename = "valorMeta")]
    pub target_amount: Decimal,
    /// Accumulated progress.
    #[serde(rename = "valorAtual", default, skip_serializing_if = "Option::is_none")]
    pub current_amount: Option<Decimal>,
    /// Start date.
    #[serde(rename = "dataInicio")]
    pub start_date: NaiveDate,
    /// End date; must be strictly after the start date.
    #[serde(rename = "dataFim")]
    pub end_date: NaiveDate,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
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
    /// Completion percentage as reported by the server.
    #[serde(
        rename = "percentualConcluido",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_percent: Option<Decimal>,
}

impl Goal {
    /// Completion percentage, capped at 100.
    ///
    /// Prefers the server-reported value; otherwise derives it from the
    /// progress and target amounts. Zero when the target is not positive.
    #[must_use]
    pub fn progress_percent(&self) -> Decimal {
        if let Some(reported) = self.completion_percent {
            return reported;
        }
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let current = self.current_amount.unwrap_or(Decimal::ZERO);
        (current * Decimal::ONE_HUNDRED / self.target_amount).min(Decimal::ONE_HUNDRED)
    }

    /// Returns true if the goal is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Some(GoalStatus::Active)
    }

    /// Returns true if the goal expired without completing.
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.status == Some(GoalStatus::Overdue)
    }
}

/// Body for the goal progress endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// Amount to add to the goal's progress; strictly positive.
    #[serde(rename = "valorAdicionado")]
    pub amount_added: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn goal(target: Decimal, current: Option<Decimal>) -> Goal {
        Goal {
            id: Some(GoalId::from_raw(4)),
            name: "Reserva".into(),
            description: None,
            kind: GoalKind::EmergencyFund,
            target_amount: target,
            current_amount: current,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            status: Some(GoalStatus::Active),
            notes: None,
            account_id: AccountId::from_raw(1),
            completion_percent: None,
        }
    }

    #[test]
    fn derives_progress_percent() {
        assert_eq!(goal(dec!(1000), Some(dec!(250))).progress_percent(), dec!(25));
        assert_eq!(goal(dec!(1000), None).progress_percent(), dec!(0));
    }

    #[test]
    fn progress_percent_caps_at_hundred() {
        assert_eq!(goal(dec!(100), Some(dec!(250))).progress_percent(), dec!(100));
    }

    #[test]
    fn progress_percent_handles_degenerate_target() {
        assert_eq!(goal(dec!(0), Some(dec!(50))).progress_percent(), dec!(0));
    }

    #[test]
    fn prefers_server_reported_percent() {
        let mut g = goal(dec!(1000), Some(dec!(250)));
        g.completion_percent = Some(dec!(30));
        assert_eq!(g.progress_percent(), dec!(30));
    }

    #[test]
    fn wire_roundtrip() {
        let json = serde_json::json!({
            "id": 4,
            "nome": "Reserva",
            "tipoMeta": "RESERVA_EMERGENCIA",
            "valorMeta": "1000",
            "valorAtual": "250",
            "dataInicio": "2025-01-01",
            "dataFim": "2025-12-31",
            "status": "ATIVA",
            "contaId": 1
        });
        let g: Goal = serde_json::from_value(json).unwrap();
        assert_eq!(g, goal(dec!(1000), Some(dec!(250))));
        assert!(g.is_active());
        assert!(!g.is_overdue());
    }
}

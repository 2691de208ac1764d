//! Form validation schemas.
//!
//! Each entity form runs through its schema before a request is issued;
//! failures carry the field name so they can be surfaced inline. Messages
//! are user-facing and match the product's language.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{Account, Credentials, Goal, ProgressUpdate, RegisterRequest, Transaction};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// User-facing message.
    pub message: String,
}

/// All failures for one submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.errors))]
pub struct ValidationErrors {
    /// One entry per failed rule.
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Returns the first message recorded against `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

fn limit(errors: &mut Vec<FieldError>, field: &'static str, value: &str, max: usize, label: &str) {
    if value.chars().count() > max {
        errors.push(FieldError {
            field,
            message: format!("{label} deve ter no máximo {max} caracteres"),
        });
    }
}

fn limit_opt(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<&str>,
    max: usize,
    label: &str,
) {
    if let Some(value) = value {
        limit(errors, field, value, max, label);
    }
}

fn positive(errors: &mut Vec<FieldError>, field: &'static str, value: Decimal, message: &str) {
    if value <= Decimal::ZERO {
        errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

fn valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

fn email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    require(errors, field, value, "Email é obrigatório");
    if !value.trim().is_empty() && !valid_email(value) {
        errors.push(FieldError {
            field,
            message: "Email inválido".to_string(),
        });
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

/// Validates an account form.
pub fn validate_account(account: &Account) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    require(&mut errors, "banco", &account.bank, "Banco é obrigatório");
    limit(&mut errors, "banco", &account.bank, 255, "Banco");
    require(
        &mut errors,
        "numeroAgencia",
        &account.branch_number,
        "Número da agência é obrigatório",
    );
    limit(
        &mut errors,
        "numeroAgencia",
        &account.branch_number,
        255,
        "Número da agência",
    );
    require(
        &mut errors,
        "numeroConta",
        &account.account_number,
        "Número da conta é obrigatório",
    );
    limit(
        &mut errors,
        "numeroConta",
        &account.account_number,
        255,
        "Número da conta",
    );
    require(
        &mut errors,
        "tipoConta",
        &account.account_kind,
        "Tipo de conta é obrigatório",
    );
    limit(
        &mut errors,
        "tipoConta",
        &account.account_kind,
        255,
        "Tipo de conta",
    );
    require(&mut errors, "responsavel", &account.holder, "Responsável é obrigatório");
    limit(&mut errors, "responsavel", &account.holder, 255, "Responsável");
    finish(errors)
}

/// Validates a transaction form.
pub fn validate_transaction(transaction: &Transaction) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    positive(
        &mut errors,
        "valor",
        transaction.amount,
        "Valor deve ser maior que zero",
    );
    require(
        &mut errors,
        "descricao",
        &transaction.description,
        "Descrição é obrigatória",
    );
    limit(
        &mut errors,
        "descricao",
        &transaction.description,
        500,
        "Descrição",
    );
    if transaction.category.kind() != transaction.kind {
        errors.push(FieldError {
            field: "categoria",
            message: "Categoria não corresponde ao tipo de movimentação".to_string(),
        });
    }
    limit_opt(
        &mut errors,
        "observacoes",
        transaction.notes.as_deref(),
        1000,
        "Observações",
    );
    if transaction.account_id.into_inner() <= 0 {
        errors.push(FieldError {
            field: "contaId",
            message: "Conta inválida".to_string(),
        });
    }
    limit_opt(
        &mut errors,
        "arquivoOrigem",
        transaction.source_file.as_deref(),
        100,
        "Arquivo de origem",
    );
    limit_opt(
        &mut errors,
        "identificadorExterno",
        transaction.external_reference.as_deref(),
        50,
        "Identificador externo",
    );
    finish(errors)
}

/// Validates a goal form.
pub fn validate_goal(goal: &Goal) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    require(&mut errors, "nome", &goal.name, "Nome é obrigatório");
    limit(&mut errors, "nome", &goal.name, 200, "Nome");
    limit_opt(
        &mut errors,
        "descricao",
        goal.description.as_deref(),
        1000,
        "Descrição",
    );
    positive(
        &mut errors,
        "valorMeta",
        goal.target_amount,
        "Valor da meta deve ser maior que zero",
    );
    if let Some(current) = goal.current_amount {
        if current < Decimal::ZERO {
            errors.push(FieldError {
                field: "valorAtual",
                message: "Valor atual não pode ser negativo".to_string(),
            });
        }
    }
    if goal.end_date <= goal.start_date {
        errors.push(FieldError {
            field: "dataFim",
            message: "Data de fim deve ser posterior à data de início".to_string(),
        });
    }
    limit_opt(
        &mut errors,
        "observacoes",
        goal.notes.as_deref(),
        1000,
        "Observações",
    );
    if goal.account_id.into_inner() <= 0 {
        errors.push(FieldError {
            field: "contaId",
            message: "Conta inválida".to_string(),
        });
    }
    finish(errors)
}

/// Validates a registration form.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    require(&mut errors, "nome", &request.name, "Nome é obrigatório");
    email(&mut errors, "email", &request.email);
    require(&mut errors, "senha", &request.password, "Senha é obrigatória");
    finish(errors)
}

/// Validates a login form.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    email(&mut errors, "email", &credentials.email);
    require(&mut errors, "senha", &credentials.password, "Senha é obrigatória");
    finish(errors)
}

/// Validates a goal progress update.
pub fn validate_progress_update(update: &ProgressUpdate) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    positive(
        &mut errors,
        "valorAdicionado",
        update.amount_added,
        "Valor deve ser maior que zero",
    );
    finish(errors)
}

//! Bank account records.

use finpanel_shared::types::AccountId;
use serde::{Deserialize, Serialize};

/// A bank account, as exchanged with the backend.
///
/// The balance is derived client-side from the account's completed
/// transactions and is never persisted, so it is not a field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identifier; absent when creating a new account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AccountId>,
    /// Bank name.
    #[serde(rename = "banco")]
    pub bank: String,
    /// Branch number.
    #[serde(rename = "numeroAgencia")]
    pub branch_number: String,
    /// Account number.
    #[serde(rename = "numeroConta")]
    pub account_number: String,
    /// Account type, a free-form label (e.g. "Corrente", "Poupança").
    #[serde(rename = "tipoConta")]
    pub account_kind: String,
    /// Name of the responsible party.
    #[serde(rename = "responsavel")]
    pub holder: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_roundtrip() {
        let json = serde_json::json!({
            "id": 1,
            "banco": "Banco do Brasil",
            "numeroAgencia": "1234",
            "numeroConta": "56789-0",
            "tipoConta": "Corrente",
            "responsavel": "Ana Souza"
        });
        let account: Account = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(account.bank, "Banco do Brasil");
        assert_eq!(account.id.map(AccountId::into_inner), Some(1));

        let back = serde_json::to_value(&account).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn new_account_omits_id() {
        let account = Account {
            id: None,
            bank: "Nubank".into(),
            branch_number: "0001".into(),
            account_number: "123".into(),
            account_kind: "Corrente".into(),
            holder: "Bruno".into(),
        };
        let value = serde_json::to_value(&account).unwrap();
        assert!(value.get("id").is_none());
    }
}

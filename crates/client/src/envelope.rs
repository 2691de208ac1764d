//! Explicit enveloped-vs-bare response decoding.
//!
//! The backend answers either with the payload directly or wrapped in a
//! `{sucesso, mensagem, dados}` envelope. Decoding through [`Payload`]
//! resolves the shape once, in one place, instead of probing fields at
//! every call site.

use serde::Deserialize;

use finpanel_shared::{ApiError, ApiResult};

/// The `{sucesso, mensagem, dados}` wrapper some endpoints use.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the server considers the operation successful.
    #[serde(rename = "sucesso")]
    pub succeeded: bool,
    /// Human-readable server message.
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
    /// The wrapped payload; may be absent on failures and empty lists.
    #[serde(rename = "dados", default)]
    pub data: Option<T>,
    /// Item count, present on some list responses.
    #[serde(default)]
    pub total: Option<u64>,
    /// Server timestamp; a number on v1 endpoints, a string on AI ones.
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
}

/// A response body in either shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    /// Wrapped in the envelope.
    Enveloped(Envelope<T>),
    /// The payload directly.
    Bare(T),
}

impl<T> Payload<T> {
    /// Unwraps the payload, treating an envelope without data as a
    /// server-reported failure.
    pub fn into_result(self) -> ApiResult<T> {
        match self {
            Self::Bare(value) => Ok(value),
            Self::Enveloped(Envelope {
                data: Some(value), ..
            }) => Ok(value),
            Self::Enveloped(Envelope { message, .. }) => Err(ApiError::Rejected(
                message.unwrap_or_else(|| "Resposta sem dados".to_string()),
            )),
        }
    }

    /// Unwraps the payload, mapping an envelope without data to `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Bare(value) => Some(value),
            Self::Enveloped(envelope) => envelope.data,
        }
    }
}

impl<T> Payload<Vec<T>> {
    /// Unwraps a list payload; an envelope without data is an empty list.
    #[must_use]
    pub fn into_list(self) -> Vec<T> {
        self.into_option().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finpanel_core::domain::Account;

    fn account_json() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "banco": "Itaú",
            "numeroAgencia": "0001",
            "numeroConta": "1234-5",
            "tipoConta": "Corrente",
            "responsavel": "Ana"
        })
    }

    #[test]
    fn bare_entity_decodes() {
        let payload: Payload<Account> = serde_json::from_value(account_json()).unwrap();
        let account = payload.into_result().unwrap();
        assert_eq!(account.bank, "Itaú");
    }

    #[test]
    fn enveloped_entity_decodes_to_same_value() {
        let wrapped = serde_json::json!({
            "sucesso": true,
            "mensagem": "OK",
            "dados": account_json(),
            "timestamp": 1_722_500_000_000u64
        });
        let payload: Payload<Account> = serde_json::from_value(wrapped).unwrap();
        let account = payload.into_result().unwrap();

        let bare: Payload<Account> = serde_json::from_value(account_json()).unwrap();
        assert_eq!(account, bare.into_result().unwrap());
    }

    #[test]
    fn bare_list_decodes() {
        let payload: Payload<Vec<Account>> =
            serde_json::from_value(serde_json::json!([account_json()])).unwrap();
        assert_eq!(payload.into_list().len(), 1);
    }

    #[test]
    fn enveloped_list_decodes() {
        let wrapped = serde_json::json!({
            "sucesso": true,
            "mensagem": "OK",
            "dados": [account_json(), account_json()],
            "total": 2
        });
        let payload: Payload<Vec<Account>> = serde_json::from_value(wrapped).unwrap();
        assert_eq!(payload.into_list().len(), 2);
    }

    #[test]
    fn envelope_without_data_is_empty_list() {
        let wrapped = serde_json::json!({"sucesso": true, "mensagem": "Nenhum registro"});
        let payload: Payload<Vec<Account>> = serde_json::from_value(wrapped).unwrap();
        assert!(payload.into_list().is_empty());
    }

    #[test]
    fn envelope_without_data_is_a_rejection_for_entities() {
        let wrapped = serde_json::json!({"sucesso": false, "mensagem": "Conta não encontrada"});
        let payload: Payload<Account> = serde_json::from_value(wrapped).unwrap();
        match payload.into_result() {
            Err(finpanel_shared::ApiError::Rejected(message)) => {
                assert_eq!(message, "Conta não encontrada");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn string_payload_maps_missing_data_to_none() {
        let wrapped = serde_json::json!({"sucesso": true, "mensagem": "OK"});
        let payload: Payload<String> = serde_json::from_value(wrapped).unwrap();
        assert_eq!(payload.into_option(), None);
    }
}

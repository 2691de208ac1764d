//! Typed IDs for type-safe entity references.
//!
//! The backend keys every entity with a numeric identifier. Wrapping them
//! prevents accidentally passing an `AccountId` where a `GoalId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw backend key.
            #[must_use]
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw backend key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

typed_id!(UserId, "Unique identifier for a user.");
typed_id!(AccountId, "Unique identifier for a bank account.");
typed_id!(TransactionId, "Unique identifier for a financial transaction.");
typed_id!(GoalId, "Unique identifier for a savings goal.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_transparently() {
        assert_eq!(serde_json::to_string(&AccountId::from_raw(42)).unwrap(), "42");
        let id: TransactionId = serde_json::from_str("7").unwrap();
        assert_eq!(id.into_inner(), 7);
    }

    #[test]
    fn displays_raw_key() {
        assert_eq!(GoalId::from_raw(99).to_string(), "99");
    }
}

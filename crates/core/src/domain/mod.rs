//! Wire records exchanged with the backend.
//!
//! Field names on the wire are the backend's Portuguese names; Rust fields
//! are English and map via serde renames. Monetary amounts are `Decimal`,
//! never floats.

pub mod account;
pub mod assistant;
pub mod goal;
pub mod report;
pub mod transaction;
pub mod user;

pub use account::Account;
pub use assistant::{AssistantPayload, PromptRequest};
pub use goal::{Goal, GoalKind, GoalStatus, ProgressUpdate};
pub use report::{AccountSummary, ReportData, ReportRequest};
pub use transaction::{
    Category, Transaction, TransactionKind, TransactionSource, TransactionStatus,
};
pub use user::{Credentials, LoginResponse, RegisterRequest};

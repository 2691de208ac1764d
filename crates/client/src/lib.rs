//! HTTP resource clients for the Finpanel backend.
//!
//! Every client is a thin, typed wrapper over one REST resource: it issues
//! the call with the session's bearer token, normalizes the enveloped or
//! bare response shape, and returns domain records. Assistant calls
//! additionally run under a bounded retry with exponential backoff.
//!
//! # Modules
//!
//! - `http` - The shared request/response plumbing
//! - `envelope` - Explicit enveloped-vs-bare response decoding
//! - `retry` - Retry-with-backoff combinator for transient failures
//! - `accounts`, `transactions`, `goals`, `auth`, `assistant` - One client
//!   per resource
//! - `dashboard` - Concurrent fetch join + aggregation

pub mod accounts;
pub mod assistant;
pub mod auth;
pub mod dashboard;
pub mod envelope;
pub mod goals;
pub mod http;
pub mod retry;
pub mod transactions;

pub use accounts::AccountsClient;
pub use assistant::{AssistantClient, ChatMessage, ChatRole, ChatSession};
pub use auth::AuthClient;
pub use dashboard::DashboardService;
pub use envelope::{Envelope, Payload};
pub use goals::GoalsClient;
pub use http::ApiClient;
pub use retry::retry_with_backoff;
pub use transactions::TransactionsClient;

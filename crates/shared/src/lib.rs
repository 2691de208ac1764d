//! Shared types, errors, and configuration for Finpanel.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Pagination types with page-number clamping
//! - The client-side error taxonomy
//! - Configuration management
//! - The explicit session context

pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use session::{Role, Session, UserProfile};

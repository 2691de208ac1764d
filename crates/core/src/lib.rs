//! Core business logic for Finpanel.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain records, validation rules, and aggregation live here.
//!
//! # Modules
//!
//! - `domain` - Wire records for accounts, transactions, goals, users,
//!   reports, and the assistant
//! - `summary` - Balance and dashboard aggregation over fetched snapshots
//! - `validation` - Form validation schemas for the four entities

pub mod domain;
pub mod summary;
pub mod validation;

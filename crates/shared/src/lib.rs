//! Shared types, errors, and configuration for Finsight.
//!
//! This crate provides common types used across all other crates:
//! - Money types and decimal helpers
//! - Typed IDs for type-safe entity references
//! - Calendar months, date ranges and month arithmetic
//! - Application-wide error types
//! - Configuration management

pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

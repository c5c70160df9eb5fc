//! Shared types, errors, and configuration for Kontor.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Locale-aware money and number formatting for display
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod format;
pub mod types;

pub use config::{AppConfig, BillingConfig, NumberingConfig};
pub use error::{AppError, AppResult};

//! Shared types and configuration for Contadom.
//!
//! This crate provides common pieces used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::ExpenseId;

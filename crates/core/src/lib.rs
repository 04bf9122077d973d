//! Core business logic for Contadom.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `expense` - Expense records, categories, and filtering
//! - `fiscal` - Dominican fiscal rules: ITBIS, DGII codes, NCF, filing periods
//! - `report606` - DGII Report 606 (purchases and expenses) generation

pub mod expense;
pub mod fiscal;
pub mod report606;

//! Expense records, categories, and filtering.

pub mod filter;
pub mod types;

pub use filter::ExpenseFilter;
pub use types::{ExpenseCategory, ExpenseRecord, ExpenseStatus, SupplierRef};

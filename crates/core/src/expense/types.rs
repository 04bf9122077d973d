//! Expense domain types.

use chrono::NaiveDate;
use contadom_shared::ExpenseId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::codes::{DocumentKind, PaymentMethod};

/// Lifecycle status of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Settled with the supplier.
    Paid,
    /// Recorded but not yet settled.
    Pending,
    /// Voided; kept for the record.
    Cancelled,
}

/// Expense classification used for ITBIS applicability.
///
/// The taxable set is a regulatory constant. Names outside the set fall back
/// to `Other`, which is treated as exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    /// Purchased goods.
    Goods,
    /// Contracted services.
    Services,
    /// Rent and leasing.
    Rent,
    /// Imported goods.
    Imports,
    /// Telecommunications services.
    Telecommunications,
    /// Electricity service.
    Electricity,
    /// Water service.
    Water,
    /// Any category outside the taxable set.
    Other,
}

impl ExpenseCategory {
    /// Looks up a category by name.
    ///
    /// "Telecom" is accepted as shorthand for `Telecommunications`. Names
    /// outside the set map to [`ExpenseCategory::Other`]. Total function, no
    /// error case.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Goods" => Self::Goods,
            "Services" => Self::Services,
            "Rent" => Self::Rent,
            "Imports" => Self::Imports,
            "Telecommunications" | "Telecom" => Self::Telecommunications,
            "Electricity" => Self::Electricity,
            "Water" => Self::Water,
            _ => Self::Other,
        }
    }

    /// Returns the canonical category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Goods => "Goods",
            Self::Services => "Services",
            Self::Rent => "Rent",
            Self::Imports => "Imports",
            Self::Telecommunications => "Telecommunications",
            Self::Electricity => "Electricity",
            Self::Water => "Water",
            Self::Other => "Other",
        }
    }

    /// Returns true if purchases in this category carry ITBIS.
    #[must_use]
    pub const fn is_itbis_taxable(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl From<String> for ExpenseCategory {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ExpenseCategory> for String {
    fn from(category: ExpenseCategory) -> Self {
        category.name().to_string()
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Supplier reference embedded in an expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRef {
    /// Supplier display name.
    pub name: String,
    /// Supplier RNC (taxpayer registry number), if known.
    #[serde(default)]
    pub tax_id: Option<String>,
}

/// A recorded business expense, as handed over by the caller.
///
/// The engine never mutates records; they are read, transformed into report
/// lines, and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Opaque identifier assigned by the system that recorded the expense.
    pub id: ExpenseId,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Supplier, if recorded.
    #[serde(default)]
    pub supplier: Option<SupplierRef>,
    /// Expense category.
    pub category: ExpenseCategory,
    /// Total monetary amount, non-negative in valid data.
    pub amount: Decimal,
    /// Fiscal document type, if recorded.
    #[serde(default)]
    pub document_type: Option<DocumentKind>,
    /// NCF printed on the document, if any.
    #[serde(default)]
    pub ncf: Option<String>,
    /// NCF of the prior document this one corrects or voids, if any.
    #[serde(default)]
    pub ncf_modified: Option<String>,
    /// Whether `amount` already contains ITBIS. Defaults to true.
    #[serde(default = "default_itbis_included")]
    pub itbis_included: bool,
    /// Payment method, if recorded.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// Lifecycle status.
    pub status: ExpenseStatus,
}

fn default_itbis_included() -> bool {
    true
}

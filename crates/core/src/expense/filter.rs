//! Expense filtering for report requests.
//!
//! Filtering happens before report generation: the engine itself never
//! drops a record it is handed.

use serde::{Deserialize, Serialize};

use super::types::{ExpenseCategory, ExpenseRecord, ExpenseStatus};
use crate::fiscal::codes::{DocumentKind, PaymentMethod};

/// Filter narrowing the expense records included in a report.
///
/// Every populated field must match. An empty filter matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Keep only expenses in this category.
    #[serde(default)]
    pub category: Option<ExpenseCategory>,
    /// Keep only expenses with this document type.
    #[serde(default)]
    pub document_type: Option<DocumentKind>,
    /// Keep only expenses paid with this method.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// Keep only expenses from the supplier with this RNC.
    #[serde(default)]
    pub supplier_tax_id: Option<String>,
    /// Keep only expenses in this status.
    #[serde(default)]
    pub status: Option<ExpenseStatus>,
}

impl ExpenseFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.document_type.is_none()
            && self.payment_method.is_none()
            && self.supplier_tax_id.is_none()
            && self.status.is_none()
    }

    /// Returns true if the record satisfies every populated field.
    #[must_use]
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        self.category.is_none_or(|c| record.category == c)
            && self
                .document_type
                .is_none_or(|d| record.document_type == Some(d))
            && self
                .payment_method
                .is_none_or(|m| record.payment_method == Some(m))
            && self.supplier_tax_id.as_deref().is_none_or(|tax_id| {
                record.supplier.as_ref().and_then(|s| s.tax_id.as_deref()) == Some(tax_id)
            })
            && self.status.is_none_or(|s| record.status == s)
    }
}

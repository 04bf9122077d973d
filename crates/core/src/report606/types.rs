//! Report 606 data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Marker rendered in place of absent optional fields.
pub const PLACEHOLDER: &str = "-";

/// One Report 606 line, derived 1:1 from an expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report606Entry {
    /// 1-based position in the report. Stable for identical input.
    pub line: usize,
    /// Document date. Serializes as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Supplier RNC, or "-" when unknown.
    pub tax_id: String,
    /// Supplier name, or "-" when unknown.
    pub supplier_name: String,
    /// Two-digit DGII document type code.
    pub doc_type_code: String,
    /// Two-digit DGII payment method code.
    pub payment_method_code: String,
    /// NCF of the document, or "-".
    pub ncf: String,
    /// NCF of the corrected prior document, or "-".
    pub ncf_modified: String,
    /// Taxable base amount.
    pub base_amount: Decimal,
    /// ITBIS amount.
    pub itbis_amount: Decimal,
    /// Base plus ITBIS.
    pub total_amount: Decimal,
}

/// Period totals for a Report 606 filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report606Summary {
    /// Number of report lines.
    pub total_records: usize,
    /// Sum of per-line base amounts.
    pub total_base_amount: Decimal,
    /// Sum of per-line ITBIS amounts.
    pub total_itbis_amount: Decimal,
    /// Sum of per-line totals.
    pub total_amount: Decimal,
    /// Caller-supplied period label (e.g. "202501").
    pub period: String,
    /// First day of the reported range, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the reported range, inclusive.
    pub end_date: NaiveDate,
}

/// A computed Report 606: line entries plus the period summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report606 {
    /// Report lines, one per input expense, in input order.
    pub entries: Vec<Report606Entry>,
    /// Period totals.
    pub summary: Report606Summary,
}

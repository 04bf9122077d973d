//! Report 606 generation.

use rust_decimal::Decimal;

use crate::expense::ExpenseRecord;
use crate::fiscal::codes::{DocumentKind, PaymentMethod};
use crate::fiscal::itbis;
use crate::fiscal::period::DateRange;

use super::types::{PLACEHOLDER, Report606, Report606Entry, Report606Summary};

/// Engine deriving DGII Report 606 lines and period totals from expenses.
///
/// Pure and stateless: each invocation reads its input slice and produces a
/// fresh report. Safe to call concurrently.
pub struct Report606Engine;

impl Report606Engine {
    /// Builds report lines, one per expense, in input order.
    ///
    /// Nothing is dropped or reordered; a zero-amount record still produces
    /// a zero-valued line. Absent supplier, NCF, document type, and payment
    /// method degrade to placeholders and the default code, never an error.
    #[must_use]
    pub fn build_entries(expenses: &[ExpenseRecord]) -> Vec<Report606Entry> {
        expenses
            .iter()
            .enumerate()
            .map(|(index, expense)| Self::build_entry(index + 1, expense))
            .collect()
    }

    fn build_entry(line: usize, expense: &ExpenseRecord) -> Report606Entry {
        let tax_applicable = expense.category.is_itbis_taxable();
        let breakdown =
            itbis::extract_base_and_tax(expense.amount, expense.itbis_included, tax_applicable);

        let supplier = expense.supplier.as_ref();

        Report606Entry {
            line,
            date: expense.date,
            tax_id: supplier
                .and_then(|s| s.tax_id.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            supplier_name: supplier
                .map(|s| s.name.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            doc_type_code: expense
                .document_type
                .unwrap_or(DocumentKind::Other)
                .code()
                .to_string(),
            payment_method_code: expense
                .payment_method
                .unwrap_or(PaymentMethod::Other)
                .code()
                .to_string(),
            ncf: expense
                .ncf
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            ncf_modified: expense
                .ncf_modified
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            base_amount: breakdown.base_amount,
            itbis_amount: breakdown.itbis_amount,
            total_amount: breakdown.total(),
        }
    }

    /// Reduces report lines into the period summary.
    ///
    /// Totals are the exact sums of the already-rounded per-line values,
    /// never an independent recomputation from the raw amounts. An empty
    /// report yields a zeroed summary tagged with the requested period.
    #[must_use]
    pub fn summarize(
        entries: &[Report606Entry],
        period: &str,
        range: DateRange,
    ) -> Report606Summary {
        let total_base_amount: Decimal = entries.iter().map(|e| e.base_amount).sum();
        let total_itbis_amount: Decimal = entries.iter().map(|e| e.itbis_amount).sum();

        Report606Summary {
            total_records: entries.len(),
            total_base_amount,
            total_itbis_amount,
            total_amount: total_base_amount + total_itbis_amount,
            period: period.to_string(),
            start_date: range.start,
            end_date: range.end,
        }
    }

    /// Builds the full report: lines plus summary.
    #[must_use]
    pub fn generate(expenses: &[ExpenseRecord], period: &str, range: DateRange) -> Report606 {
        let entries = Self::build_entries(expenses);
        let summary = Self::summarize(&entries, period, range);
        Report606 { entries, summary }
    }
}

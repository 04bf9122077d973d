//! Input validation and pre-submission checks for Report 606.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::expense::ExpenseRecord;
use crate::fiscal::ncf::Ncf;

use super::types::{PLACEHOLDER, Report606};

/// Input-contract violations rejected before report generation.
#[derive(Debug, Error)]
pub enum Report606Error {
    /// An expense amount is negative. Zero is legal: a zero-amount expense
    /// still produces a report line.
    #[error("Expense at index {index} has a negative amount: {amount}")]
    NegativeAmount {
        /// Zero-based position of the offending record.
        index: usize,
        /// The rejected amount.
        amount: Decimal,
    },
}

impl Report606Error {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::NegativeAmount { .. } => 400,
        }
    }
}

/// Validates that expense records satisfy the engine's input contract.
///
/// # Errors
///
/// Returns an error if any record carries a negative amount.
pub fn validate_records(records: &[ExpenseRecord]) -> Result<(), Report606Error> {
    for (index, record) in records.iter().enumerate() {
        if record.amount < Decimal::ZERO {
            return Err(Report606Error::NegativeAmount {
                index,
                amount: record.amount,
            });
        }
    }

    Ok(())
}

/// Kinds of pre-submission issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionIssueKind {
    /// Supplier RNC is missing.
    MissingTaxId,
    /// NCF is missing.
    MissingNcf,
    /// An NCF is present but not structurally valid.
    InvalidNcf,
}

/// A non-blocking problem found in a computed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionIssue {
    /// Report line the issue refers to.
    pub line: usize,
    /// Issue classification.
    pub kind: SubmissionIssueKind,
    /// Human-readable explanation.
    pub message: String,
}

/// Scans a computed report for problems DGII commonly rejects filings over.
///
/// Issues are advisory. They never block generation and are reported
/// alongside the output for the caller to resolve before filing.
#[must_use]
pub fn submission_issues(report: &Report606) -> Vec<SubmissionIssue> {
    let mut issues = Vec::new();

    for entry in &report.entries {
        if entry.tax_id == PLACEHOLDER {
            issues.push(SubmissionIssue {
                line: entry.line,
                kind: SubmissionIssueKind::MissingTaxId,
                message: "supplier RNC is missing".to_string(),
            });
        }

        if entry.ncf == PLACEHOLDER {
            issues.push(SubmissionIssue {
                line: entry.line,
                kind: SubmissionIssueKind::MissingNcf,
                message: "fiscal document number (NCF) is missing".to_string(),
            });
        } else if let Err(err) = Ncf::parse(&entry.ncf) {
            issues.push(SubmissionIssue {
                line: entry.line,
                kind: SubmissionIssueKind::InvalidNcf,
                message: err.to_string(),
            });
        }

        if entry.ncf_modified != PLACEHOLDER {
            if let Err(err) = Ncf::parse(&entry.ncf_modified) {
                issues.push(SubmissionIssue {
                    line: entry.line,
                    kind: SubmissionIssueKind::InvalidNcf,
                    message: format!("modified NCF: {err}"),
                });
            }
        }
    }

    issues
}

//! DGII Report 606 (purchases and expenses) generation.
//!
//! This module turns recorded expenses into the regulation-shaped report:
//! one line per expense with classification codes and the base/ITBIS split,
//! plus period totals. Generation never fails; input-contract checks and
//! pre-submission advice live in [`validation`].

pub mod engine;
pub mod types;
pub mod validation;


pub use engine::Report606Engine;
pub use types::{PLACEHOLDER, Report606, Report606Entry, Report606Summary};
pub use validation::{
    Report606Error, SubmissionIssue, SubmissionIssueKind, submission_issues, validate_records,
};

//! Dominican fiscal rules.
//!
//! ITBIS extraction, DGII classification code tables, NCF structural
//! parsing, and filing periods.

pub mod codes;
pub mod itbis;
pub mod ncf;
pub mod period;

pub use codes::{DocumentKind, PaymentMethod};
pub use itbis::{ITBIS_RATE, ItbisBreakdown, extract_base_and_tax, round_amount};
pub use ncf::{Ncf, NcfError, NcfSeries};
pub use period::{DateRange, FilingPeriod, FilingPeriodError, InvalidDateRange};

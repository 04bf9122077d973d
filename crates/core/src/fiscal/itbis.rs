//! ITBIS extraction for purchase documents.
//!
//! CRITICAL: Rounding rules for regulatory acceptance:
//! - Always round to 2 decimal places
//! - Use banker's rounding (round half to even)
//! - When the tax is included in the total, the tax is the residual against
//!   the original total, never an independent multiplication, so that
//!   base + tax reconstructs the charged amount after rounding

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Standard ITBIS rate (18%).
pub const ITBIS_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Rounds a monetary amount to 2 decimal places.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Base and tax portions extracted from a document total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItbisBreakdown {
    /// Taxable base amount.
    pub base_amount: Decimal,
    /// ITBIS portion.
    pub itbis_amount: Decimal,
}

impl ItbisBreakdown {
    /// Returns base plus tax.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.base_amount + self.itbis_amount
    }
}

/// Splits a document total into taxable base and ITBIS.
///
/// For a tax-included total the base is the rounded pre-tax value and the
/// tax is the remainder against the original total. For a pre-tax total the
/// tax is computed directly on it and the base passes through unrounded.
/// Non-taxable documents pass through whole, with zero tax.
#[must_use]
pub fn extract_base_and_tax(
    total_amount: Decimal,
    tax_included: bool,
    tax_applicable: bool,
) -> ItbisBreakdown {
    if !tax_applicable {
        return ItbisBreakdown {
            base_amount: total_amount,
            itbis_amount: Decimal::ZERO,
        };
    }

    if tax_included {
        let base_amount = round_amount(total_amount / (Decimal::ONE + ITBIS_RATE));
        let itbis_amount = round_amount(total_amount - base_amount);
        ItbisBreakdown {
            base_amount,
            itbis_amount,
        }
    } else {
        let itbis_amount = round_amount(total_amount * ITBIS_RATE);
        ItbisBreakdown {
            base_amount: total_amount,
            itbis_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_constant() {
        assert_eq!(ITBIS_RATE, dec!(0.18));
    }

    #[test]
    fn test_bankers_rounding() {
        // Round half to even: 2.005 stays at 2.00, 15.255 goes up to 15.26
        assert_eq!(round_amount(dec!(2.005)), dec!(2.00));
        assert_eq!(round_amount(dec!(15.255)), dec!(15.26));
        assert_eq!(round_amount(dec!(2.345)), dec!(2.34));
        assert_eq!(round_amount(dec!(2.355)), dec!(2.36));
    }

    #[test]
    fn test_round_leaves_two_decimals_alone() {
        assert_eq!(round_amount(dec!(10.25)), dec!(10.25));
        assert_eq!(round_amount(dec!(0)), dec!(0));
    }

    #[test]
    fn test_included_tax_is_residual() {
        // 1180 / 1.18 = 1000 exactly
        let breakdown = extract_base_and_tax(dec!(1180), true, true);
        assert_eq!(breakdown.base_amount, dec!(1000.00));
        assert_eq!(breakdown.itbis_amount, dec!(180.00));
        assert_eq!(breakdown.total(), dec!(1180.00));

        // 100 / 1.18 = 84.7457... -> base 84.75, residual 15.25
        let breakdown = extract_base_and_tax(dec!(100), true, true);
        assert_eq!(breakdown.base_amount, dec!(84.75));
        assert_eq!(breakdown.itbis_amount, dec!(15.25));
        assert_eq!(breakdown.total(), dec!(100.00));
    }

    #[test]
    fn test_excluded_tax_is_direct_multiplication() {
        let breakdown = extract_base_and_tax(dec!(1000), false, true);
        assert_eq!(breakdown.base_amount, dec!(1000));
        assert_eq!(breakdown.itbis_amount, dec!(180.00));
        assert_eq!(breakdown.total(), dec!(1180.00));

        // 84.75 * 0.18 = 15.255 -> 15.26; the included split of 100 gave
        // 15.25 for the same base, the two branches are deliberately not
        // inverses of each other
        let breakdown = extract_base_and_tax(dec!(84.75), false, true);
        assert_eq!(breakdown.base_amount, dec!(84.75));
        assert_eq!(breakdown.itbis_amount, dec!(15.26));
    }

    #[test]
    fn test_not_applicable_passes_through() {
        let breakdown = extract_base_and_tax(dec!(500), true, false);
        assert_eq!(breakdown.base_amount, dec!(500));
        assert_eq!(breakdown.itbis_amount, dec!(0));
        assert_eq!(breakdown.total(), dec!(500));

        // The flag wins over tax_included in both positions
        let breakdown = extract_base_and_tax(dec!(500), false, false);
        assert_eq!(breakdown.base_amount, dec!(500));
        assert_eq!(breakdown.itbis_amount, dec!(0));
    }

    #[test]
    fn test_zero_amount() {
        let breakdown = extract_base_and_tax(dec!(0), true, true);
        assert_eq!(breakdown.base_amount, dec!(0.00));
        assert_eq!(breakdown.itbis_amount, dec!(0.00));
    }

    #[test]
    fn test_included_split_reconstructs_awkward_totals() {
        // 2.3659 / 1.18 = 2.0050... -> base 2.00 (half to even), residual
        // 0.3659 -> 0.37
        let breakdown = extract_base_and_tax(dec!(2.3659), true, true);
        assert_eq!(breakdown.base_amount, dec!(2.00));
        assert_eq!(breakdown.itbis_amount, dec!(0.37));
        assert_eq!(breakdown.total(), round_amount(dec!(2.3659)));
    }
}

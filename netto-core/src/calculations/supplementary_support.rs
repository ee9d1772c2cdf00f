//! Trattamento integrativo: cash support for low incomes whose deductions
//! exceed gross IRPEF.
//!
//! * taxable base above the cap: nothing.
//! * at or below the threshold: the full amount when gross tax exceeds the
//!   standard deduction alone, otherwise nothing.
//! * between threshold and cap: the shortfall of gross tax against standard
//!   deduction plus track B credit, capped at the full amount.

use rust_decimal::Decimal;

use crate::SupplementarySupportRules;

/// Support amount, unrounded.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netto_core::FiscalConstants;
/// use netto_core::calculations::supplementary_support::supplementary_support;
///
/// let rules = FiscalConstants::milan_2026().supplementary_support;
///
/// // Low band: gross tax above the deduction earns the full amount.
/// let support = supplementary_support(&rules, dec!(10897.20), dec!(2506.356), dec!(1955), dec!(0));
/// assert_eq!(support, dec!(1200));
/// ```
pub fn supplementary_support(
    rules: &SupplementarySupportRules,
    taxable_base: Decimal,
    gross_tax: Decimal,
    standard_deduction: Decimal,
    credit_relief: Decimal,
) -> Decimal {
    if taxable_base > rules.max_income {
        return Decimal::ZERO;
    }

    if taxable_base <= rules.threshold {
        return if gross_tax > standard_deduction {
            rules.amount
        } else {
            Decimal::ZERO
        };
    }

    let total_deductions = standard_deduction + credit_relief;
    if total_deductions > gross_tax {
        rules.amount.min(total_deductions - gross_tax)
    } else {
        Decimal::ZERO
    }
}

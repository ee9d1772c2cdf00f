//! Taxable base, progressive IRPEF and net IRPEF.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::IncomeTaxBrackets;
use crate::calculations::common::{marginal_slices, max};

/// Tax owed on each IRPEF bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxSlices(pub [Decimal; 3]);

impl IncomeTaxSlices {
    pub fn total(&self) -> Decimal {
        self.0.iter().sum()
    }
}

/// Gross salary minus social-security contribution (imponibile).
pub fn taxable_base(
    gross_salary: Decimal,
    contribution: Decimal,
) -> Decimal {
    gross_salary - contribution
}

/// Splits the tax on `taxable_base` across the three brackets.
pub fn income_tax_slices(
    brackets: &IncomeTaxBrackets,
    taxable_base: Decimal,
) -> IncomeTaxSlices {
    IncomeTaxSlices(marginal_slices(
        taxable_base,
        &brackets.limits,
        &brackets.rates,
    ))
}

/// IRPEF before deductions.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netto_core::FiscalConstants;
/// use netto_core::calculations::income_tax::gross_income_tax;
///
/// let brackets = FiscalConstants::milan_2026().income_tax;
///
/// // 28000 × 23% + 7000 × 33%
/// assert_eq!(gross_income_tax(&brackets, dec!(35000)), dec!(8750));
/// ```
pub fn gross_income_tax(
    brackets: &IncomeTaxBrackets,
    taxable_base: Decimal,
) -> Decimal {
    income_tax_slices(brackets, taxable_base).total()
}

/// Gross tax minus the standard deduction and the track B credit, floored at
/// zero. Deductions alone never produce a rebate.
pub fn net_income_tax(
    gross_tax: Decimal,
    standard_deduction: Decimal,
    credit_relief: Decimal,
) -> Decimal {
    max(gross_tax - standard_deduction - credit_relief, Decimal::ZERO)
}

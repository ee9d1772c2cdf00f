//! Cuneo fiscale: the two low-income relief tracks.
//!
//! * Track A is a tax-free bonus computed on **gross salary**. One tier rate
//!   applies to the whole salary (not marginal). It is added to net pay and
//!   never touches IRPEF.
//! * Track B is a tax credit computed on the **taxable base**. It is flat up
//!   to a limit, then tapers linearly to zero, and reduces gross IRPEF.
//!
//! The two tracks cover disjoint income ranges, so for any salary at most one
//! of them is non-zero. Neither function enforces that; the thresholds do.

use rust_decimal::Decimal;

use crate::{BonusReliefRules, CreditReliefRules};

/// Track A bonus for `gross_salary`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netto_core::FiscalConstants;
/// use netto_core::calculations::relief::bonus_relief;
///
/// let rules = FiscalConstants::milan_2026().bonus_relief;
///
/// assert_eq!(bonus_relief(&rules, dec!(12000)), dec!(636));
/// assert_eq!(bonus_relief(&rules, dec!(20001)), dec!(0));
/// ```
pub fn bonus_relief(
    rules: &BonusReliefRules,
    gross_salary: Decimal,
) -> Decimal {
    rules
        .thresholds
        .iter()
        .zip(rules.rates)
        .find(|(threshold, _)| gross_salary <= **threshold)
        .map_or(Decimal::ZERO, |(_, rate)| gross_salary * rate)
}

/// Track B credit for `taxable_base`.
pub fn credit_relief(
    rules: &CreditReliefRules,
    taxable_base: Decimal,
) -> Decimal {
    if taxable_base < rules.min_income {
        Decimal::ZERO
    } else if taxable_base <= rules.flat_limit {
        rules.amount
    } else if taxable_base <= rules.max_income {
        rules.amount * ((rules.max_income - taxable_base) / rules.taper_width())
    } else {
        Decimal::ZERO
    }
}

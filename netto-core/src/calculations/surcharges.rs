//! Regional and municipal income surcharges (addizionali), both levied on
//! the taxable base.
//!
//! The regional surcharge is a four-bracket marginal schedule and is
//! continuous in the taxable base. The municipal surcharge is a flat rate on
//! the whole taxable base with a full exemption at or below a ceiling, so it
//! jumps from zero to `ceiling × rate` just above the ceiling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::marginal_slices;
use crate::{MunicipalSurchargeRules, RegionalSurchargeBrackets};

/// Regional and municipal surcharges, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surcharges {
    pub regional: Decimal,
    pub municipal: Decimal,
}

impl Surcharges {
    pub fn total(&self) -> Decimal {
        self.regional + self.municipal
    }
}

/// Regional surcharge owed on each bracket.
pub fn regional_surcharge_slices(
    brackets: &RegionalSurchargeBrackets,
    taxable_base: Decimal,
) -> [Decimal; 4] {
    marginal_slices(taxable_base, &brackets.limits, &brackets.rates)
}

pub fn regional_surcharge(
    brackets: &RegionalSurchargeBrackets,
    taxable_base: Decimal,
) -> Decimal {
    regional_surcharge_slices(brackets, taxable_base)
        .iter()
        .sum()
}

pub fn municipal_surcharge(
    rules: &MunicipalSurchargeRules,
    taxable_base: Decimal,
) -> Decimal {
    if taxable_base <= rules.exemption_ceiling {
        Decimal::ZERO
    } else {
        taxable_base * rules.rate
    }
}

/// Both surcharges for `taxable_base`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netto_core::FiscalConstants;
/// use netto_core::calculations::surcharges::surcharges;
///
/// let c = FiscalConstants::milan_2026();
/// let s = surcharges(&c.regional_surcharge, &c.municipal_surcharge, dec!(20000));
///
/// // 15000 × 1.23% + 5000 × 1.58%, exempt from the municipal surcharge
/// assert_eq!(s.regional, dec!(263.5));
/// assert_eq!(s.municipal, dec!(0));
/// ```
pub fn surcharges(
    regional: &RegionalSurchargeBrackets,
    municipal: &MunicipalSurchargeRules,
    taxable_base: Decimal,
) -> Surcharges {
    Surcharges {
        regional: regional_surcharge(regional, taxable_base),
        municipal: municipal_surcharge(municipal, taxable_base),
    }
}

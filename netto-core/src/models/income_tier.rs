use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::FiscalConstants;

/// The band a gross salary falls into, from the point of view of which
/// reliefs and brackets are active.
///
/// Classification compares the gross salary against the profile thresholds.
/// It is a reading aid; the calculation itself never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeTier {
    /// Deduction covers the tax; trattamento integrativo can apply.
    NoTaxArea,
    /// Cuneo fiscale track A bonus.
    BonusRelief,
    /// First IRPEF bracket, no relief track.
    FirstBracket,
    /// Crossing into the second bracket with the flat track B credit.
    FlatCreditRelief,
    /// Second bracket with the track B credit tapering off.
    TaperedCreditRelief,
    SecondBracket,
    TopBracket,
}

impl IncomeTier {
    pub fn classify(
        gross_salary: Decimal,
        constants: &FiscalConstants,
    ) -> Self {
        let det = &constants.employee_deduction;
        let irpef = &constants.income_tax;
        let credit = &constants.credit_relief;

        if gross_salary <= det.limits[0] {
            Self::NoTaxArea
        } else if gross_salary <= constants.bonus_relief.thresholds[2] {
            Self::BonusRelief
        } else if gross_salary <= irpef.limits[0] {
            Self::FirstBracket
        } else if gross_salary <= credit.flat_limit {
            Self::FlatCreditRelief
        } else if gross_salary <= credit.max_income {
            Self::TaperedCreditRelief
        } else if gross_salary <= irpef.limits[1] {
            Self::SecondBracket
        } else {
            Self::TopBracket
        }
    }

    /// Italian label shown next to the salary input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoTaxArea => "No-tax area · Trattamento integrativo attivo",
            Self::BonusRelief => "Cuneo fiscale A · bonus esente da IRPEF attivo",
            Self::FirstBracket => "Scaglione IRPEF 23%",
            Self::FlatCreditRelief => "Scaglione IRPEF 23%–33% · cuneo B 1.000 €",
            Self::TaperedCreditRelief => "Scaglione IRPEF 33% · cuneo B in riduzione",
            Self::SecondBracket => "Scaglione IRPEF 33%",
            Self::TopBracket => "Scaglione IRPEF 43%",
        }
    }
}

impl fmt::Display for IncomeTier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn tier(gross: Decimal) -> IncomeTier {
        IncomeTier::classify(gross, &FiscalConstants::milan_2026())
    }

    #[test]
    fn boundaries_belong_to_the_lower_tier() {
        assert_eq!(tier(dec!(15000)), IncomeTier::NoTaxArea);
        assert_eq!(tier(dec!(20000)), IncomeTier::BonusRelief);
        assert_eq!(tier(dec!(28000)), IncomeTier::FirstBracket);
        assert_eq!(tier(dec!(32000)), IncomeTier::FlatCreditRelief);
        assert_eq!(tier(dec!(40000)), IncomeTier::TaperedCreditRelief);
        assert_eq!(tier(dec!(50000)), IncomeTier::SecondBracket);
    }

    #[test]
    fn one_euro_above_moves_up() {
        assert_eq!(tier(dec!(15001)), IncomeTier::BonusRelief);
        assert_eq!(tier(dec!(20001)), IncomeTier::FirstBracket);
        assert_eq!(tier(dec!(50001)), IncomeTier::TopBracket);
    }

    #[test]
    fn zero_is_no_tax_area() {
        assert_eq!(tier(Decimal::ZERO), IncomeTier::NoTaxArea);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(IncomeTier::TopBracket.to_string(), "Scaglione IRPEF 43%");
    }
}

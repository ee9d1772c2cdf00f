use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Output of a full net-salary calculation for one gross salary.
///
/// Every currency field is rounded to two decimal places; the pipeline keeps
/// full precision until this record is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Gross annual salary (RAL).
    pub gross_salary: Decimal,
    /// Employee INPS contribution.
    pub social_security_contribution: Decimal,
    /// Gross salary minus the contribution (imponibile).
    pub taxable_base: Decimal,
    /// IRPEF before deductions.
    pub gross_tax: Decimal,
    /// Art. 13 TUIR deduction, including the mid-range bonus.
    pub standard_deduction: Decimal,
    /// Cuneo fiscale track A; added to net pay, never reduces tax.
    pub bonus_relief: Decimal,
    /// Cuneo fiscale track B; reduces gross tax.
    pub credit_relief: Decimal,
    /// Trattamento integrativo.
    pub supplementary_support: Decimal,
    /// IRPEF after deductions, never negative.
    pub net_tax: Decimal,
    pub regional_surcharge: Decimal,
    pub municipal_surcharge: Decimal,
    pub total_surcharges: Decimal,
    pub net_annual_salary: Decimal,
    pub net_monthly_salary: Decimal,
    /// Contribution plus net tax plus surcharges.
    pub total_withheld: Decimal,
    /// `total_withheld / gross_salary × 100`; `None` when gross salary is zero.
    pub effective_rate: Option<Decimal>,
}

/// Share of the gross salary taken by each part of the breakdown, in percent
/// with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingShares {
    pub net: Decimal,
    /// Net tax plus surcharges.
    pub taxes: Decimal,
    pub social_security: Decimal,
}

impl CalculationResult {
    /// Percentages of gross salary for the stacked net / taxes / INPS view.
    ///
    /// Returns `None` when gross salary is zero.
    pub fn shares(&self) -> Option<WithholdingShares> {
        if self.gross_salary.is_zero() {
            return None;
        }
        let pct = |part: Decimal| {
            (part / self.gross_salary * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        };
        Some(WithholdingShares {
            net: pct(self.net_annual_salary),
            taxes: pct(self.net_tax + self.total_surcharges),
            social_security: pct(self.social_security_contribution),
        })
    }

    /// True when track A or the supplementary support add money to net pay.
    pub fn has_integrations(&self) -> bool {
        self.bonus_relief > Decimal::ZERO || self.supplementary_support > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample() -> CalculationResult {
        CalculationResult {
            gross_salary: dec!(30000.00),
            social_security_contribution: dec!(2757.00),
            taxable_base: dec!(27243.00),
            gross_tax: dec!(6265.89),
            standard_deduction: dec!(2044.29),
            bonus_relief: dec!(0.00),
            credit_relief: dec!(1000.00),
            supplementary_support: dec!(0.00),
            net_tax: dec!(3221.60),
            regional_surcharge: dec!(377.94),
            municipal_surcharge: dec!(217.94),
            total_surcharges: dec!(595.88),
            net_annual_salary: dec!(23425.52),
            net_monthly_salary: dec!(1801.96),
            total_withheld: dec!(6574.48),
            effective_rate: Some(dec!(21.91)),
        }
    }

    #[test]
    fn shares_are_percentages_of_gross() {
        let shares = sample().shares().unwrap();

        assert_eq!(shares.net, dec!(78.1));
        assert_eq!(shares.taxes, dec!(12.7));
        assert_eq!(shares.social_security, dec!(9.2));
    }

    #[test]
    fn shares_undefined_for_zero_gross() {
        let mut result = sample();
        result.gross_salary = Decimal::ZERO;

        assert_eq!(result.shares(), None);
    }

    #[test]
    fn integrations_absent_for_middle_income() {
        assert!(!sample().has_integrations());
    }

    #[test]
    fn integrations_present_with_bonus() {
        let mut result = sample();
        result.bonus_relief = dec!(960.00);

        assert!(result.has_integrations());
    }
}

//! Fiscal constants for one tax year.
//!
//! Every threshold, rate and fixed amount used by the net-salary pipeline
//! lives here, grouped by the calculation step that consumes it. A different
//! fiscal year is supported by building (or loading) a different
//! [`FiscalConstants`] value; no calculation code embeds a literal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`FiscalConstants::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FiscalConstantsError {
    /// A rate lies outside `[0, 1]`.
    #[error("rate '{field}' must be between 0 and 1, got {value}")]
    InvalidRate { field: &'static str, value: Decimal },

    /// An amount or threshold is negative.
    #[error("amount '{field}' must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// An ordered sequence of boundaries is not strictly increasing.
    #[error("boundaries '{field}' must be strictly increasing")]
    NonIncreasingBoundaries { field: &'static str },

    /// The salary is paid in zero instalments.
    #[error("payments per year must be positive")]
    NoPayments,
}

/// Employee social-security (INPS) contribution parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityRates {
    /// Rate applied to the whole gross salary (9.19% IVS, private sector).
    pub base_rate: Decimal,
    /// Extra rate applied only to the salary above `additional_threshold`.
    pub additional_rate: Decimal,
    /// First pensionable band limit; the extra rate starts strictly above it.
    pub additional_threshold: Decimal,
    /// Annual contribution ceiling (massimale). Not enforced by the pipeline.
    pub max_contribution_base: Decimal,
}

/// Progressive income tax (IRPEF) brackets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBrackets {
    /// Upper limits of the first two brackets.
    pub limits: [Decimal; 2],
    /// Marginal rates of the three brackets.
    pub rates: [Decimal; 3],
}

/// Employee work-income deduction (detrazione lavoro dipendente, art. 13 TUIR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDeductionRules {
    /// Band limits: full amount up to the first, zero above the third.
    pub limits: [Decimal; 3],
    /// Deduction for taxable base at or below the first limit.
    pub full_amount: Decimal,
    /// Deduction at the second limit (top of band 2, bottom of band 3).
    pub band_two_base: Decimal,
    /// Extra deduction across band 2, largest at the first limit.
    pub band_two_range: Decimal,
    /// Fixed bonus for taxable base inside `bonus_window` (inclusive).
    pub bonus_amount: Decimal,
    pub bonus_window: [Decimal; 2],
}

impl EmployeeDeductionRules {
    /// Width of band 2 (second limit minus first limit).
    pub fn band_two_width(&self) -> Decimal {
        self.limits[1] - self.limits[0]
    }

    /// Width of band 3 (third limit minus second limit).
    pub fn band_three_width(&self) -> Decimal {
        self.limits[2] - self.limits[1]
    }
}

/// Cuneo fiscale track A: tax-free bonus indexed on gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusReliefRules {
    /// Gross-salary ceilings of the three tiers.
    pub thresholds: [Decimal; 3],
    /// Rate of each tier, applied to the whole gross salary.
    pub rates: [Decimal; 3],
}

/// Cuneo fiscale track B: tax credit indexed on taxable base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditReliefRules {
    /// Smallest taxable base that earns the credit.
    pub min_income: Decimal,
    /// Upper end of the flat zone.
    pub flat_limit: Decimal,
    /// Taxable base at which the tapered credit reaches zero.
    pub max_income: Decimal,
    /// Credit in the flat zone.
    pub amount: Decimal,
}

impl CreditReliefRules {
    pub fn taper_width(&self) -> Decimal {
        self.max_income - self.flat_limit
    }
}

/// Trattamento integrativo (DL 3/2020).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementarySupportRules {
    /// Taxable base above which no support is paid.
    pub max_income: Decimal,
    /// Taxable base at or below which the support is all-or-nothing.
    pub threshold: Decimal,
    /// Annual support amount (and cap in the upper band).
    pub amount: Decimal,
}

/// Regional surcharge (addizionale regionale) schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalSurchargeBrackets {
    /// Upper limits of the first three brackets.
    pub limits: [Decimal; 3],
    /// Marginal rates of the four brackets.
    pub rates: [Decimal; 4],
}

/// Municipal surcharge (addizionale comunale).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalSurchargeRules {
    /// Flat rate applied to the whole taxable base.
    pub rate: Decimal,
    /// Taxable base at or below which no surcharge is due.
    pub exemption_ceiling: Decimal,
}

/// Complete fiscal profile for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalConstants {
    pub tax_year: i32,
    pub payments_per_year: u32,
    pub social_security: SocialSecurityRates,
    pub income_tax: IncomeTaxBrackets,
    pub employee_deduction: EmployeeDeductionRules,
    pub bonus_relief: BonusReliefRules,
    pub credit_relief: CreditReliefRules,
    pub supplementary_support: SupplementarySupportRules,
    pub regional_surcharge: RegionalSurchargeBrackets,
    pub municipal_surcharge: MunicipalSurchargeRules,
}

impl FiscalConstants {
    /// The 2026 profile: private-sector permanent employee resident in Milan.
    ///
    /// Sources: INPS circolare 6/2026, L. 199/2025, L. 207/2024, art. 13 TUIR,
    /// DL 3/2020, Lombardy and Milan surcharge resolutions.
    pub fn milan_2026() -> Self {
        Self {
            tax_year: 2026,
            payments_per_year: 13,
            social_security: SocialSecurityRates {
                base_rate: dec!(0.0919),
                additional_rate: dec!(0.01),
                additional_threshold: dec!(56224),
                max_contribution_base: dec!(122295),
            },
            income_tax: IncomeTaxBrackets {
                limits: [dec!(28000), dec!(50000)],
                rates: [dec!(0.23), dec!(0.33), dec!(0.43)],
            },
            employee_deduction: EmployeeDeductionRules {
                limits: [dec!(15000), dec!(28000), dec!(50000)],
                full_amount: dec!(1955),
                band_two_base: dec!(1910),
                band_two_range: dec!(1190),
                bonus_amount: dec!(65),
                bonus_window: [dec!(25001), dec!(35000)],
            },
            bonus_relief: BonusReliefRules {
                thresholds: [dec!(8500), dec!(15000), dec!(20000)],
                rates: [dec!(0.071), dec!(0.053), dec!(0.048)],
            },
            credit_relief: CreditReliefRules {
                min_income: dec!(20001),
                flat_limit: dec!(32000),
                max_income: dec!(40000),
                amount: dec!(1000),
            },
            supplementary_support: SupplementarySupportRules {
                max_income: dec!(28000),
                threshold: dec!(15000),
                amount: dec!(1200),
            },
            regional_surcharge: RegionalSurchargeBrackets {
                limits: [dec!(15000), dec!(28000), dec!(50000)],
                rates: [dec!(0.0123), dec!(0.0158), dec!(0.0172), dec!(0.0173)],
            },
            municipal_surcharge: MunicipalSurchargeRules {
                rate: dec!(0.008),
                exemption_ceiling: dec!(23000),
            },
        }
    }

    /// Returns the built-in profile for `tax_year`, if one exists.
    pub fn for_year(tax_year: i32) -> Option<Self> {
        match tax_year {
            2026 => Some(Self::milan_2026()),
            _ => None,
        }
    }

    /// Checks rates, amounts and boundary ordering.
    ///
    /// # Errors
    ///
    /// Returns the first [`FiscalConstantsError`] found.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use netto_core::{FiscalConstants, FiscalConstantsError};
    ///
    /// let mut constants = FiscalConstants::milan_2026();
    /// constants.income_tax.limits = [dec!(50000), dec!(28000)];
    ///
    /// assert_eq!(
    ///     constants.validate(),
    ///     Err(FiscalConstantsError::NonIncreasingBoundaries { field: "income_tax.limits" })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), FiscalConstantsError> {
        if self.payments_per_year == 0 {
            return Err(FiscalConstantsError::NoPayments);
        }

        let ss = &self.social_security;
        check_rate("social_security.base_rate", ss.base_rate)?;
        check_rate("social_security.additional_rate", ss.additional_rate)?;
        check_increasing(
            "social_security.thresholds",
            &[ss.additional_threshold, ss.max_contribution_base],
        )?;

        check_rates("income_tax.rates", &self.income_tax.rates)?;
        check_increasing("income_tax.limits", &self.income_tax.limits)?;

        let det = &self.employee_deduction;
        check_increasing("employee_deduction.limits", &det.limits)?;
        check_increasing("employee_deduction.bonus_window", &det.bonus_window)?;
        check_amount("employee_deduction.full_amount", det.full_amount)?;
        check_amount("employee_deduction.band_two_base", det.band_two_base)?;
        check_amount("employee_deduction.band_two_range", det.band_two_range)?;
        check_amount("employee_deduction.bonus_amount", det.bonus_amount)?;

        check_increasing("bonus_relief.thresholds", &self.bonus_relief.thresholds)?;
        check_rates("bonus_relief.rates", &self.bonus_relief.rates)?;

        let cb = &self.credit_relief;
        check_increasing(
            "credit_relief.boundaries",
            &[cb.min_income, cb.flat_limit, cb.max_income],
        )?;
        check_amount("credit_relief.amount", cb.amount)?;

        let ti = &self.supplementary_support;
        check_increasing(
            "supplementary_support.boundaries",
            &[ti.threshold, ti.max_income],
        )?;
        check_amount("supplementary_support.amount", ti.amount)?;

        check_increasing(
            "regional_surcharge.limits",
            &self.regional_surcharge.limits,
        )?;
        check_rates("regional_surcharge.rates", &self.regional_surcharge.rates)?;

        check_rate("municipal_surcharge.rate", self.municipal_surcharge.rate)?;
        check_amount(
            "municipal_surcharge.exemption_ceiling",
            self.municipal_surcharge.exemption_ceiling,
        )?;

        Ok(())
    }
}

impl Default for FiscalConstants {
    fn default() -> Self {
        Self::milan_2026()
    }
}

fn check_rate(
    field: &'static str,
    value: Decimal,
) -> Result<(), FiscalConstantsError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(FiscalConstantsError::InvalidRate { field, value });
    }
    Ok(())
}

fn check_rates(
    field: &'static str,
    values: &[Decimal],
) -> Result<(), FiscalConstantsError> {
    values.iter().try_for_each(|v| check_rate(field, *v))
}

fn check_amount(
    field: &'static str,
    value: Decimal,
) -> Result<(), FiscalConstantsError> {
    if value < Decimal::ZERO {
        return Err(FiscalConstantsError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Non-negative and strictly increasing.
fn check_increasing(
    field: &'static str,
    values: &[Decimal],
) -> Result<(), FiscalConstantsError> {
    if let Some(first) = values.first() {
        check_amount(field, *first)?;
    }
    if values.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(FiscalConstantsError::NonIncreasingBoundaries { field });
    }
    Ok(())
}

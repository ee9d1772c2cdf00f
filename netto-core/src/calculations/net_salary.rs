//! Net salary pipeline: gross annual salary (RAL) to net annual and monthly
//! pay.
//!
//! # Pipeline
//!
//! | Step | Value                         | Input                                |
//! |------|-------------------------------|--------------------------------------|
//! | 1    | INPS contribution             | gross salary                         |
//! | 2    | Taxable base (imponibile)     | gross salary, contribution           |
//! | 3    | Gross IRPEF                   | taxable base                         |
//! | 4    | Standard deduction            | taxable base                         |
//! | 5a   | Cuneo track A bonus           | **gross salary**                     |
//! | 5b   | Cuneo track B credit          | taxable base                         |
//! | 6    | Trattamento integrativo       | taxable base, steps 3, 4, 5b         |
//! | 7    | Net IRPEF                     | steps 3, 4, 5b                       |
//! | 8    | Regional / municipal surcharge| taxable base                         |
//! | 9    | Net annual salary             | gross salary, steps 1, 5a, 6, 7, 8   |
//! | 10   | Net monthly salary            | step 9, payments per year            |
//!
//! All steps run at full decimal precision. Each field is rounded to two
//! decimals only when the [`CalculationResult`] is assembled.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use netto_core::{FiscalConstants, NetSalaryCalculator};
//!
//! let calculator = NetSalaryCalculator::new(FiscalConstants::milan_2026()).unwrap();
//! let result = calculator.calculate(dec!(30000)).unwrap();
//!
//! assert_eq!(result.taxable_base, dec!(27243.00));
//! assert_eq!(result.net_annual_salary, dec!(23425.52));
//! assert_eq!(result.net_monthly_salary, dec!(1801.96));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, trace};

use crate::calculations::common::round_half_up;
use crate::calculations::{
    employee_deduction, income_tax, relief, social_security, supplementary_support, surcharges,
};
use crate::{CalculationResult, FiscalConstants, FiscalConstantsError, IncomeTier};

/// Errors reported by [`NetSalaryCalculator`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetSalaryError {
    /// The fiscal profile failed validation.
    #[error("invalid fiscal constants: {0}")]
    InvalidConstants(#[from] FiscalConstantsError),

    /// Gross salary must be zero or positive.
    #[error("gross salary must be non-negative, got {0}")]
    NegativeGrossSalary(Decimal),
}

/// Net salary calculator for one fiscal profile.
///
/// Holds an immutable, validated [`FiscalConstants`]. Calculations do not
/// mutate it, so one calculator can serve any number of threads.
#[derive(Debug, Clone)]
pub struct NetSalaryCalculator {
    constants: FiscalConstants,
}

impl NetSalaryCalculator {
    /// Validates `constants` and builds a calculator around them.
    ///
    /// # Errors
    ///
    /// Returns [`NetSalaryError::InvalidConstants`] if validation fails.
    pub fn new(constants: FiscalConstants) -> Result<Self, NetSalaryError> {
        constants.validate()?;
        debug!(tax_year = constants.tax_year, "fiscal constants validated");
        Ok(Self { constants })
    }

    pub fn constants(&self) -> &FiscalConstants {
        &self.constants
    }

    /// Band of `gross_salary` under this calculator's profile.
    pub fn tier(
        &self,
        gross_salary: Decimal,
    ) -> IncomeTier {
        IncomeTier::classify(gross_salary, &self.constants)
    }

    /// Runs the full pipeline for `gross_salary`.
    ///
    /// A zero salary is valid and yields an all-zero result with
    /// `effective_rate` set to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`NetSalaryError::NegativeGrossSalary`] for negative input.
    pub fn calculate(
        &self,
        gross_salary: Decimal,
    ) -> Result<CalculationResult, NetSalaryError> {
        if gross_salary < Decimal::ZERO {
            return Err(NetSalaryError::NegativeGrossSalary(gross_salary));
        }
        let c = &self.constants;

        // Steps 1-2
        let contribution = social_security::contribution(&c.social_security, gross_salary);
        let taxable_base = income_tax::taxable_base(gross_salary, contribution);
        trace!(%gross_salary, %contribution, %taxable_base, "taxable base");

        // Steps 3-4
        let gross_tax = income_tax::gross_income_tax(&c.income_tax, taxable_base);
        let standard_deduction =
            employee_deduction::standard_deduction(&c.employee_deduction, taxable_base);
        trace!(%gross_tax, %standard_deduction, "gross tax and deduction");

        // Step 5: track A on gross salary, track B on taxable base
        let bonus_relief = relief::bonus_relief(&c.bonus_relief, gross_salary);
        let credit_relief = relief::credit_relief(&c.credit_relief, taxable_base);
        trace!(%bonus_relief, %credit_relief, "cuneo fiscale");

        // Step 6
        let supplementary_support = supplementary_support::supplementary_support(
            &c.supplementary_support,
            taxable_base,
            gross_tax,
            standard_deduction,
            credit_relief,
        );

        // Step 7
        let net_tax = income_tax::net_income_tax(gross_tax, standard_deduction, credit_relief);
        trace!(%supplementary_support, %net_tax, "net tax");

        // Step 8
        let surcharges = surcharges::surcharges(
            &c.regional_surcharge,
            &c.municipal_surcharge,
            taxable_base,
        );
        let total_surcharges = surcharges.total();

        // Steps 9-10
        let net_annual_salary = gross_salary - contribution - net_tax - total_surcharges
            + supplementary_support
            + bonus_relief;
        let net_monthly_salary = net_annual_salary / Decimal::from(c.payments_per_year);

        let total_withheld = contribution + net_tax + total_surcharges;
        let effective_rate = if gross_salary.is_zero() {
            None
        } else {
            Some(round_half_up(
                total_withheld / gross_salary * Decimal::ONE_HUNDRED,
            ))
        };

        debug!(%gross_salary, %net_annual_salary, "net salary calculated");

        Ok(CalculationResult {
            gross_salary: round_half_up(gross_salary),
            social_security_contribution: round_half_up(contribution),
            taxable_base: round_half_up(taxable_base),
            gross_tax: round_half_up(gross_tax),
            standard_deduction: round_half_up(standard_deduction),
            bonus_relief: round_half_up(bonus_relief),
            credit_relief: round_half_up(credit_relief),
            supplementary_support: round_half_up(supplementary_support),
            net_tax: round_half_up(net_tax),
            regional_surcharge: round_half_up(surcharges.regional),
            municipal_surcharge: round_half_up(surcharges.municipal),
            total_surcharges: round_half_up(total_surcharges),
            net_annual_salary: round_half_up(net_annual_salary),
            net_monthly_salary: round_half_up(net_monthly_salary),
            total_withheld: round_half_up(total_withheld),
            effective_rate,
        })
    }
}

impl Default for NetSalaryCalculator {
    fn default() -> Self {
        Self {
            constants: FiscalConstants::milan_2026(),
        }
    }
}

//! Employee social-security (INPS) contribution.
//!
//! The base rate applies to the whole gross salary. Above the additional
//! threshold the excess alone is charged the base rate plus the additional
//! rate; at exactly the threshold nothing extra is due.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use netto_core::FiscalConstants;
//! use netto_core::calculations::social_security::contribution;
//!
//! let rates = FiscalConstants::milan_2026().social_security;
//!
//! assert_eq!(contribution(&rates, dec!(30000)), dec!(2757.0000));
//! ```

use rust_decimal::Decimal;

use crate::SocialSecurityRates;

/// Contribution withheld from `gross_salary`, unrounded.
///
/// The annual ceiling (`max_contribution_base`) is not applied.
pub fn contribution(
    rates: &SocialSecurityRates,
    gross_salary: Decimal,
) -> Decimal {
    if gross_salary <= rates.additional_threshold {
        return gross_salary * rates.base_rate;
    }

    let excess = gross_salary - rates.additional_threshold;
    rates.additional_threshold * rates.base_rate
        + excess * (rates.base_rate + rates.additional_rate)
}

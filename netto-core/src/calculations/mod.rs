//! Net salary calculation steps for an Italian employee.
//!
//! Each step is a plain function over its slice of [`crate::FiscalConstants`]
//! and the values produced by earlier steps, so it can be tested with literal
//! inputs. [`NetSalaryCalculator`] composes them in order.

pub mod common;
pub mod employee_deduction;
pub mod income_tax;
pub mod net_salary;
pub mod relief;
pub mod social_security;
pub mod supplementary_support;
pub mod surcharges;

pub use income_tax::IncomeTaxSlices;
pub use net_salary::{NetSalaryCalculator, NetSalaryError};
pub use surcharges::Surcharges;

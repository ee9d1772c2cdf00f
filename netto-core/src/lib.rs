pub mod calculations;
pub mod models;

pub use calculations::{NetSalaryCalculator, NetSalaryError};
pub use models::*;

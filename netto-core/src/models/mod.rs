mod calculation_result;
mod fiscal_constants;
mod income_tier;

pub use calculation_result::{CalculationResult, WithholdingShares};
pub use fiscal_constants::{
    BonusReliefRules, CreditReliefRules, EmployeeDeductionRules, FiscalConstants,
    FiscalConstantsError, IncomeTaxBrackets, MunicipalSurchargeRules, RegionalSurchargeBrackets,
    SocialSecurityRates, SupplementarySupportRules,
};
pub use income_tier::IncomeTier;

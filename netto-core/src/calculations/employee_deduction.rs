//! Employee work-income deduction (detrazione lavoro dipendente, art. 13 TUIR).
//!
//! Computed on the taxable base, not on gross salary.
//!
//! | Taxable base          | Deduction                                   |
//! |-----------------------|---------------------------------------------|
//! | ≤ limit 1             | full amount                                 |
//! | limit 1 – limit 2     | base + range × (limit 2 − x) / band 2 width |
//! | limit 2 – limit 3     | base × (limit 3 − x) / band 3 width         |
//! | > limit 3             | 0                                           |
//!
//! The mid-range bonus is added on top whenever the taxable base falls inside
//! the bonus window, bounds included.

use rust_decimal::Decimal;
use tracing::trace;

use crate::EmployeeDeductionRules;
use crate::calculations::common::max;

/// Deduction for `taxable_base`, unrounded.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netto_core::FiscalConstants;
/// use netto_core::calculations::employee_deduction::standard_deduction;
///
/// let rules = FiscalConstants::milan_2026().employee_deduction;
///
/// assert_eq!(standard_deduction(&rules, dec!(12000)), dec!(1955));
/// // 1910 at the second limit, plus the 65 bonus inside its window
/// assert_eq!(standard_deduction(&rules, dec!(28000)), dec!(1975));
/// assert_eq!(standard_deduction(&rules, dec!(60000)), dec!(0));
/// ```
pub fn standard_deduction(
    rules: &EmployeeDeductionRules,
    taxable_base: Decimal,
) -> Decimal {
    let [limit_1, limit_2, limit_3] = rules.limits;

    let mut deduction = if taxable_base <= limit_1 {
        rules.full_amount
    } else if taxable_base <= limit_2 {
        rules.band_two_base
            + rules.band_two_range * ((limit_2 - taxable_base) / rules.band_two_width())
    } else if taxable_base <= limit_3 {
        rules.band_two_base * ((limit_3 - taxable_base) / rules.band_three_width())
    } else {
        Decimal::ZERO
    };

    let [bonus_min, bonus_max] = rules.bonus_window;
    if taxable_base >= bonus_min && taxable_base <= bonus_max {
        trace!(%taxable_base, bonus = %rules.bonus_amount, "deduction bonus window");
        deduction += rules.bonus_amount;
    }

    max(deduction, Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::FiscalConstants;
    use crate::calculations::common::round_half_up;

    fn rules() -> EmployeeDeductionRules {
        FiscalConstants::milan_2026().employee_deduction
    }

    #[test]
    fn full_amount_up_to_first_limit() {
        assert_eq!(standard_deduction(&rules(), Decimal::ZERO), dec!(1955));
        assert_eq!(standard_deduction(&rules(), dec!(15000)), dec!(1955));
    }

    #[test]
    fn band_two_starts_at_base_plus_range() {
        // Just above limit 1 the linear term is almost the whole range.
        let result = standard_deduction(&rules(), dec!(15000.01));

        assert_eq!(round_half_up(result), dec!(3100.00));
    }

    #[test]
    fn band_two_decreases_linearly() {
        // 1910 + 1190 × (28000 − 18162) / 13000
        let result = standard_deduction(&rules(), dec!(18162));

        assert_eq!(round_half_up(result), dec!(2810.56));
    }

    #[test]
    fn second_limit_includes_window_bonus() {
        assert_eq!(standard_deduction(&rules(), dec!(28000)), dec!(1975));
    }

    #[test]
    fn band_two_meets_band_three_at_second_limit() {
        let mut no_bonus = rules();
        no_bonus.bonus_amount = Decimal::ZERO;

        let at = standard_deduction(&no_bonus, dec!(28000));
        let above = standard_deduction(&no_bonus, dec!(28000.01));

        assert_eq!(at, dec!(1910));
        assert!((at - above).abs() < dec!(0.01));
    }

    #[test]
    fn band_three_tapers_to_zero() {
        // 1910 × (50000 − 39000) / 22000
        assert_eq!(standard_deduction(&rules(), dec!(39000)), dec!(955));
        assert_eq!(standard_deduction(&rules(), dec!(50000)), Decimal::ZERO);
    }

    #[test]
    fn bonus_added_inside_window_including_bounds() {
        let r = rules();
        let without = |x: Decimal| {
            let mut no_bonus = r.clone();
            no_bonus.bonus_amount = Decimal::ZERO;
            standard_deduction(&no_bonus, x)
        };

        for x in [dec!(25001), dec!(30000), dec!(35000)] {
            assert_eq!(standard_deduction(&r, x) - without(x), dec!(65), "at {x}");
        }
    }

    #[test]
    fn bonus_not_added_outside_window() {
        let r = rules();
        let mut no_bonus = r.clone();
        no_bonus.bonus_amount = Decimal::ZERO;

        for x in [dec!(25000), dec!(35000.01)] {
            assert_eq!(
                standard_deduction(&r, x),
                standard_deduction(&no_bonus, x),
                "at {x}"
            );
        }
    }

    #[test]
    fn above_third_limit_is_zero() {
        assert_eq!(standard_deduction(&rules(), dec!(90372.24)), Decimal::ZERO);
    }
}

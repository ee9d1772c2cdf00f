//! End-to-end properties of the net salary pipeline under the 2026 Milan
//! profile.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use netto_core::calculations::income_tax::income_tax_slices;
use netto_core::calculations::relief::{bonus_relief, credit_relief};
use netto_core::calculations::social_security::contribution;
use netto_core::calculations::surcharges::regional_surcharge_slices;
use netto_core::{CalculationResult, FiscalConstants, NetSalaryCalculator};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("netto_core=trace")
        .try_init();
}

fn calculate(gross: Decimal) -> CalculationResult {
    init_tracing();
    NetSalaryCalculator::default()
        .calculate(gross)
        .expect("non-negative salary")
}

/// 0, 250, 500, … 150 000
fn salary_sweep() -> impl Iterator<Item = Decimal> {
    (0..=600).map(|step| Decimal::from(step * 250))
}

// =============================================================================
// invariants
// =============================================================================

#[test]
fn net_tax_never_negative() {
    for gross in salary_sweep() {
        assert!(calculate(gross).net_tax >= Decimal::ZERO, "at {gross}");
    }
}

#[test]
fn net_annual_identity_holds_to_rounding() {
    for gross in salary_sweep() {
        let r = calculate(gross);
        let expected = r.gross_salary - r.social_security_contribution - r.net_tax
            - r.total_surcharges
            + r.supplementary_support
            + r.bonus_relief;

        assert!(
            (r.net_annual_salary - expected).abs() <= dec!(0.05),
            "at {gross}: {} vs {expected}",
            r.net_annual_salary
        );
    }
}

#[test]
fn net_monthly_is_thirteenth_of_annual() {
    for gross in salary_sweep() {
        let r = calculate(gross);
        let diff = r.net_monthly_salary - r.net_annual_salary / dec!(13);

        assert!(diff.abs() < Decimal::ONE, "at {gross}");
    }
}

#[test]
fn total_withheld_adds_up() {
    for gross in salary_sweep() {
        let r = calculate(gross);
        let expected = r.social_security_contribution + r.net_tax + r.total_surcharges;

        assert!((r.total_withheld - expected).abs() <= dec!(0.03), "at {gross}");
    }
}

#[test]
fn contribution_strictly_increasing() {
    let rates = FiscalConstants::milan_2026().social_security;
    let sweep: Vec<_> = salary_sweep().collect();

    for pair in sweep.windows(2) {
        assert!(contribution(&rates, pair[1]) > contribution(&rates, pair[0]));
    }
}

#[test]
fn relief_tracks_never_overlap() {
    for gross in salary_sweep() {
        let r = calculate(gross);

        assert!(
            r.bonus_relief.is_zero() || r.credit_relief.is_zero(),
            "both tracks active at {gross}"
        );
        if gross <= dec!(20000) {
            assert_eq!(r.credit_relief, Decimal::ZERO, "track B at {gross}");
        } else {
            assert_eq!(r.bonus_relief, Decimal::ZERO, "track A at {gross}");
        }
    }
}

#[test]
fn municipal_surcharge_is_a_cliff_at_the_ceiling() {
    let ceiling = FiscalConstants::milan_2026()
        .municipal_surcharge
        .exemption_ceiling;

    for gross in salary_sweep() {
        let r = calculate(gross);
        if r.taxable_base <= ceiling {
            assert_eq!(r.municipal_surcharge, Decimal::ZERO, "at {gross}");
        } else {
            assert!(r.municipal_surcharge >= dec!(184), "at {gross}");
        }
    }
}

#[test]
fn regional_surcharge_non_decreasing_in_salary() {
    let mut previous = Decimal::ZERO;

    for gross in salary_sweep() {
        let current = calculate(gross).regional_surcharge;
        assert!(current >= previous, "at {gross}");
        previous = current;
    }
}

#[test]
fn repeated_calls_are_identical() {
    let calculator = NetSalaryCalculator::default();

    for gross in [dec!(0), dec!(17999.99), dec!(56225), dec!(250000)] {
        assert_eq!(
            calculator.calculate(gross).unwrap(),
            calculator.calculate(gross).unwrap()
        );
    }
}

#[test]
fn calculator_shared_across_threads() {
    let calculator = NetSalaryCalculator::default();
    let expected = calculator.calculate(dec!(30000)).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| calculator.calculate(dec!(30000)).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// =============================================================================
// scenarios
// =============================================================================

#[test]
fn no_tax_area_boundary_gets_bonus_and_support() {
    let r = calculate(dec!(15000));

    assert_eq!(r.bonus_relief, dec!(795.00));
    assert_eq!(r.supplementary_support, dec!(1200.00));
    assert_eq!(r.net_annual_salary, dec!(14271.01));
}

#[test]
fn full_subsidy_can_exceed_gross() {
    let r = calculate(dec!(12000));

    assert!(r.net_annual_salary > r.gross_salary);
}

#[test]
fn track_a_active_at_its_ceiling() {
    let r = calculate(dec!(20000));

    assert_eq!(r.bonus_relief, dec!(960.00));
    assert_eq!(r.credit_relief, Decimal::ZERO);
    assert_eq!(r.net_annual_salary, dec!(17520.84));
}

#[test]
fn one_euro_above_track_a_ceiling() {
    let c = FiscalConstants::milan_2026();

    // Track A reads gross salary, track B reads taxable base.
    assert_eq!(bonus_relief(&c.bonus_relief, dec!(20001)), Decimal::ZERO);
    assert_eq!(credit_relief(&c.credit_relief, dec!(20001)), dec!(1000));

    // Through the pipeline, a gross of 20001 leaves a taxable base below the
    // track B minimum, so neither track applies.
    let r = calculate(dec!(20001));
    assert_eq!(r.taxable_base, dec!(18162.91));
    assert_eq!(r.bonus_relief, Decimal::ZERO);
    assert_eq!(r.credit_relief, Decimal::ZERO);
}

#[test]
fn social_security_threshold_delta_is_one_euro_at_combined_rate() {
    let at = calculate(dec!(56224));
    let above = calculate(dec!(56225));

    assert_eq!(at.social_security_contribution, dec!(5166.99));
    assert_eq!(above.social_security_contribution, dec!(5167.09));

    let rates = FiscalConstants::milan_2026().social_security;
    assert_eq!(
        contribution(&rates, dec!(56225)) - contribution(&rates, dec!(56224)),
        rates.base_rate + rates.additional_rate
    );
}

#[test]
fn exempt_from_municipal_surcharge_below_ceiling() {
    let r = calculate(dec!(25000));

    assert_eq!(r.taxable_base, dec!(22702.50));
    assert_eq!(r.municipal_surcharge, Decimal::ZERO);
    assert_eq!(r.regional_surcharge, dec!(306.20));
}

#[test]
fn top_bracket_fills_every_slice() {
    let c = FiscalConstants::milan_2026();
    let r = calculate(dec!(100000));

    let irpef = income_tax_slices(&c.income_tax, r.taxable_base);
    let regional = regional_surcharge_slices(&c.regional_surcharge, r.taxable_base);

    assert!(irpef.0.iter().all(|s| *s > Decimal::ZERO));
    assert!(regional.iter().all(|s| *s > Decimal::ZERO));
    assert_eq!(r.gross_tax, dec!(31060.06));
    assert_eq!(r.net_annual_salary, dec!(57122.46));
    assert_eq!(r.effective_rate, Some(dec!(42.88)));
}

#[test]
fn zero_salary_serialises_effective_rate_as_null() {
    let r = calculate(Decimal::ZERO);
    let json = serde_json::to_value(&r).unwrap();

    assert!(json["effective_rate"].is_null());
}

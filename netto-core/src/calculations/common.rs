//! Helpers shared by the pipeline steps: final rounding and marginal
//! bracket arithmetic.

use rust_decimal::Decimal;

/// Rounds to two decimal places, halves away from zero.
///
/// Used once per field when the final [`crate::CalculationResult`] is
/// assembled, never between steps.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netto_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1838.005)), dec!(1838.01));
/// assert_eq!(round_half_up(dec!(1838.0049)), dec!(1838.00));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Portion of `value` that falls inside the band `(lower, upper]`.
///
/// `upper = None` means the band is open-ended. The result is never negative,
/// so summing `band_slice(x, l_i, l_{i+1}) × rate_i` over consecutive bands
/// gives the usual marginal-bracket tax.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netto_core::calculations::common::band_slice;
///
/// assert_eq!(band_slice(dec!(35000), dec!(28000), Some(dec!(50000))), dec!(7000));
/// assert_eq!(band_slice(dec!(20000), dec!(28000), Some(dec!(50000))), dec!(0));
/// assert_eq!(band_slice(dec!(60000), dec!(50000), None), dec!(10000));
/// ```
pub fn band_slice(
    value: Decimal,
    lower: Decimal,
    upper: Option<Decimal>,
) -> Decimal {
    let capped = match upper {
        Some(upper) => value.min(upper),
        None => value,
    };
    max(capped - lower, Decimal::ZERO)
}

/// Tax owed on each band of a schedule with `limits.len() + 1` bands.
///
/// `rates[i]` applies to the band ending at `limits[i]`; the last rate applies
/// above the last limit.
pub(crate) fn marginal_slices<const N: usize>(
    value: Decimal,
    limits: &[Decimal],
    rates: &[Decimal; N],
) -> [Decimal; N] {
    debug_assert_eq!(limits.len() + 1, N);

    std::array::from_fn(|i| {
        let lower = if i == 0 { Decimal::ZERO } else { limits[i - 1] };
        let upper = limits.get(i).copied();
        band_slice(value, lower, upper) * rates[i]
    })
}

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use thiserror::Error;

/// Largest salary accepted from user input.
pub const SALARY_MAX: Decimal = dec!(500000);

/// Below this the salary is treated as not entered.
pub const SALARY_MIN: Decimal = dec!(1000);

/// Integer part with optional `.`/`,` thousands groups, then an optional
/// one- or two-digit decimal part.
static SALARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<int>\d+|\d{1,3}(?:[.,]\d{3})+)(?:[.,](?<frac>\d{1,2}))?$")
        .expect("salary pattern is a valid regex")
});

/// Error returned when salary text cannot be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSalaryError {
    #[error("no salary given")]
    Empty,

    #[error("invalid salary '{0}'")]
    Invalid(String),
}

/// Strips currency symbols and all whitespace, including non-breaking spaces.
fn normalize_salary_input(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '€' && !c.is_whitespace())
        .collect()
}

/// Parses salary text such as `"30000"`, `"30.000"`, `"€ 30 000"` or
/// `"30.000,50"` and clamps it to `[0, SALARY_MAX]`.
///
/// Returns an error and logs when the text is not a number.
pub fn parse_salary(s: &str) -> Result<Decimal, ParseSalaryError> {
    let normalized = normalize_salary_input(s);
    if normalized.is_empty() {
        return Err(ParseSalaryError::Empty);
    }
    if normalized.starts_with('-') {
        tracing::warn!(input = %s, "negative salary clamped to 0");
        return Ok(Decimal::ZERO);
    }

    let Some(caps) = SALARY_PATTERN.captures(&normalized) else {
        tracing::error!(input = %s, "invalid salary");
        return Err(ParseSalaryError::Invalid(s.to_string()));
    };

    let int: String = caps["int"].chars().filter(char::is_ascii_digit).collect();
    let text = match caps.name("frac") {
        Some(frac) => format!("{int}.{}", frac.as_str()),
        None => int,
    };
    // The pattern only admits digits, so a parse failure means the value
    // overflows `Decimal` and is far above the maximum.
    let Ok(value) = text.parse::<Decimal>() else {
        tracing::warn!(input = %s, max = %SALARY_MAX, "salary clamped");
        return Ok(SALARY_MAX);
    };

    if value > SALARY_MAX {
        tracing::warn!(%value, max = %SALARY_MAX, "salary clamped");
        return Ok(SALARY_MAX);
    }
    Ok(value)
}

/// Whether `salary` is large enough to be worth calculating.
pub fn is_salary_entered(salary: Decimal) -> bool {
    salary >= SALARY_MIN
}

/// Formats an amount Italian style, rounded to whole euros: `1.795 €`.
pub fn format_eur(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{grouped} €")
}

/// Formats a percentage with one decimal and a comma: `21,9%`.
pub fn format_pct(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%").replace('.', ",")
}

/// Formats an optional percentage, using "—" when `None`.
pub fn opt_pct_display(value: Option<Decimal>) -> String {
    value.map(format_pct).unwrap_or_else(|| "—".to_string())
}

/// Formats a rate (`0.0123`) as a percentage without trailing zeros: `1,23%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize()).replace('.', ",")
}

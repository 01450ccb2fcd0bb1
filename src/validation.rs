//! Parsing of raw console text into validated numbers.
//!
//! Both parsers are pure: they never prompt, retry or print. The session
//! decides whether a failure re-prompts or returns to the menu.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Field label used when integer text is rejected.
pub const INTEGER_FIELD: &str = "positive integer";

/// Field label used when decimal text is rejected.
pub const DECIMAL_FIELD: &str = "non-negative amount";

/// Field label used when an amount times a count does not fit.
pub const TOTAL_PAY_FIELD: &str = "total pay";

/// The largest amount that still renders with two decimals.
///
/// ```
/// use payroll_console::validation::max_amount;
///
/// assert_eq!(max_amount().to_string(), "792281625142643375935439503.35");
/// ```
pub fn max_amount() -> Decimal {
    Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, 2)
}

/// Parses text made only of ASCII decimal digits.
///
/// Empty text, any non-digit character (signs and whitespace included) and
/// values that do not fit in a `u32` are rejected with
/// [`PayrollError::InvalidFormat`].
///
/// # Examples
///
/// ```
/// use payroll_console::validation::parse_positive_integer;
///
/// assert_eq!(parse_positive_integer("0042").unwrap(), 42);
/// assert!(parse_positive_integer("-1").is_err());
/// assert!(parse_positive_integer("").is_err());
/// ```
pub fn parse_positive_integer(text: &str) -> PayrollResult<u32> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(PayrollError::invalid_format(INTEGER_FIELD, text));
    }

    // All digits, so the only remaining failure is overflow.
    text.parse::<u32>()
        .map_err(|_| PayrollError::invalid_format(INTEGER_FIELD, text))
}

/// Parses digits with at most one `.` separator into a [`Decimal`].
///
/// Either side of the separator may be empty (`"5."`, `".5"`), but the text
/// may not be empty or exactly `"."`. Amounts above [`max_amount`] are
/// rejected.
///
/// # Examples
///
/// ```
/// use payroll_console::validation::parse_non_negative_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_non_negative_decimal("15.5").unwrap(), Decimal::new(155, 1));
/// assert!(parse_non_negative_decimal(".").is_err());
/// assert!(parse_non_negative_decimal("1.2.3").is_err());
/// ```
pub fn parse_non_negative_decimal(text: &str) -> PayrollResult<Decimal> {
    let reject = || PayrollError::invalid_format(DECIMAL_FIELD, text);

    if text.is_empty() || text == "." {
        return Err(reject());
    }

    let mut dots = 0;
    for c in text.chars() {
        match c {
            '.' => {
                dots += 1;
                if dots > 1 {
                    return Err(reject());
                }
            }
            c if c.is_ascii_digit() => {}
            _ => return Err(reject()),
        }
    }

    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    };

    Decimal::from_str(&normalized)
        .ok()
        .filter(|value| *value <= max_amount())
        .ok_or_else(reject)
}

/// Multiplies an amount by a whole count, rejecting totals above
/// [`max_amount`].
///
/// # Examples
///
/// ```
/// use payroll_console::validation::{checked_total, max_amount};
/// use rust_decimal::Decimal;
///
/// assert_eq!(checked_total(Decimal::new(155, 1), 40).unwrap(), Decimal::new(620, 0));
/// assert!(checked_total(max_amount(), 2).is_err());
/// ```
pub fn checked_total(amount: Decimal, count: u32) -> PayrollResult<Decimal> {
    amount
        .checked_mul(Decimal::from(count))
        .filter(|total| *total <= max_amount())
        .ok_or_else(|| {
            PayrollError::invalid_format(TOTAL_PAY_FIELD, &format!("{} x {}", amount, count))
        })
}

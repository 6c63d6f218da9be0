//! Currency display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use super::risk::parse_float;

/// What every non-finite amount renders as.
pub const ZERO_DISPLAY: &str = "$0.00";

/// Format an amount as dollars with two decimals and thousands separators.
///
/// Non-finite values render as [`ZERO_DISPLAY`]. Rounding is half away from
/// zero on the exact binary value, so `1.005` (stored just below 1.005)
/// becomes `$1.00`.
///
/// ```
/// use traderisk::domain::format_money;
///
/// assert_eq!(format_money(1234.5), "$1,234.50");
/// assert_eq!(format_money(f64::NAN), "$0.00");
/// ```
#[must_use]
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return ZERO_DISPLAY.to_string();
    }

    // Normalize -0.0
    let value = if value == 0.0 { 0.0 } else { value };
    let fixed = to_fixed_2(value);

    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("${sign}{}.{fraction}", group_thousands(whole))
}

/// Format the hint for a saved default capital.
///
/// The stored text is parsed leniently; anything unparseable shows as zero.
#[must_use]
pub fn format_default_capital(raw: &str) -> String {
    let value = parse_float(raw);
    format_money(if value.is_nan() { 0.0 } else { value })
}

fn to_fixed_2(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        // Outside Decimal's range; fall back to float formatting.
        None => format!("{value:.2}"),
    }
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

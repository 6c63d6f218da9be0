//! Risk and margin calculation.
//!
//! ```
//! use traderisk::domain::compute;
//!
//! let out = compute("2", "10", "1000");
//! assert_eq!(out.risk_amount, 100.0);
//! assert_eq!(out.margin_amount, 5000.0);
//! ```

use serde::Serialize;

/// Raw calculator inputs, as typed into the three fields.
///
/// Each field holds sanitized text: digits and at most one `.`. Empty
/// fields are allowed and parse to `NaN`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskInputs {
    /// Stop-loss distance as a percentage of entry price.
    pub stop_loss_pct: String,
    /// Share of capital the trader is willing to lose, in percent.
    pub risk_pct: String,
    /// Account capital in currency units.
    pub capital: String,
}

impl RiskInputs {
    #[must_use]
    pub fn new(
        stop_loss_pct: impl Into<String>,
        risk_pct: impl Into<String>,
        capital: impl Into<String>,
    ) -> Self {
        Self {
            stop_loss_pct: stop_loss_pct.into(),
            risk_pct: risk_pct.into(),
            capital: capital.into(),
        }
    }

    /// Run the calculation over these inputs.
    #[must_use]
    pub fn compute(&self) -> RiskOutputs {
        compute(&self.stop_loss_pct, &self.risk_pct, &self.capital)
    }
}

/// Derived amounts. Never persisted; either value may be non-finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskOutputs {
    /// Currency amount lost if the stop is hit.
    pub risk_amount: f64,
    /// Position size that loses exactly `risk_amount` at the stop.
    pub margin_amount: f64,
}

/// Compute risk and margin from the three raw field values.
///
/// `risk = capital * risk% / 100` and `margin = risk / (stop% / 100)`.
/// A stop-loss that parses to zero or `NaN` uses a divisor of `1`, so
/// margin equals risk instead of going infinite.
#[must_use]
pub fn compute(stop_loss_pct: &str, risk_pct: &str, capital: &str) -> RiskOutputs {
    let stop_loss = parse_float(stop_loss_pct);
    let risk_pct = parse_float(risk_pct);
    let capital = parse_float(capital);

    let risk_amount = capital * (risk_pct / 100.0);
    let ratio = stop_loss / 100.0;
    let divisor = if ratio == 0.0 || ratio.is_nan() {
        1.0
    } else {
        ratio
    };

    RiskOutputs {
        risk_amount,
        margin_amount: risk_amount / divisor,
    }
}

/// Parse the longest leading float literal, `NaN` when there is none.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12abc"`
/// is `12.0`, `".5"` is `0.5` and `"5."` is `5.0`.
#[must_use]
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if s[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let fraction = j - (end + 1);
        if digits > 0 || fraction > 0 {
            digits += fraction;
            end = j;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

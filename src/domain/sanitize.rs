//! Keystroke sanitization for numeric input fields.
//!
//! Every field in the calculator accepts free text but stores only a
//! numeric prefix: ASCII digits and at most one decimal point.

/// Restrict raw input to digits and a single decimal point.
///
/// Everything that is not an ASCII digit or `.` is dropped. When more than
/// one `.` survives, the first one is kept and the digit groups after it are
/// joined into a single fractional part (`"1.2.3"` becomes `"1.23"`).
///
/// The result is always valid for [`sanitize`] again, unchanged.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match cleaned.split_once('.') {
        Some((whole, rest)) if rest.contains('.') => {
            let mut out = String::with_capacity(cleaned.len());
            out.push_str(whole);
            out.push('.');
            out.extend(rest.chars().filter(|c| *c != '.'));
            out
        }
        _ => cleaned,
    }
}

/// Render a percent field the way it is shown while editing (`"2.5%"`).
#[must_use]
pub fn percent_display(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{value}%")
    }
}

/// Render a capital field the way it is shown while editing (`"$1000"`).
#[must_use]
pub fn capital_display(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("${value}")
    }
}

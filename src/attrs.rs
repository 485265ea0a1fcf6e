//! Numeric `data-*` attribute parsing.
//!
//! Page authors write these attributes by hand, so every parser here has an
//! explicit fallback instead of an error path: a missing or malformed value
//! reads as zero.

#[cfg(test)]
#[path = "attrs_test.rs"]
mod attrs_test;

/// Parse the leading base-10 integer of `raw`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit, so `"150px"` reads as 150. Returns `None` when no digit follows.
/// Values beyond `i64` saturate.
#[must_use]
pub fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(byte - b'0'));
    }
    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Counter target from `data-target`. Missing, malformed, or negative reads as 0.
#[must_use]
pub fn counter_target(raw: Option<&str>) -> u64 {
    match raw.and_then(leading_int) {
        Some(v) if v > 0 => v.unsigned_abs(),
        _ => 0,
    }
}

/// Reveal delay from `data-aos-delay`, in milliseconds. Missing, malformed,
/// or negative reads as no delay.
#[must_use]
pub fn delay_ms(raw: Option<&str>) -> u32 {
    match raw.and_then(leading_int) {
        Some(v) if v > 0 => u32::try_from(v).unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// Percentage from `data-width`, clamped to `[0, 100]`. A trailing `%` is
/// tolerated. Missing or malformed reads as 0.
#[must_use]
pub fn percent(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match raw.trim().trim_end_matches('%').trim_end().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.min(100.0),
        _ => 0.0,
    }
}

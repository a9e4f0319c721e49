//! Compound duration literals such as `300ms`, `1h30m` or `-1.5s`.
//!
//! Grammar: an optional sign, then one or more groups of a decimal number
//! (with an optional fraction) followed by a unit. Units are `ns`, `us`
//! (also `µs` and `μs`), `ms`, `s`, `m` and `h`. The bare literal `0` needs
//! no unit. Values must fit a signed 64-bit nanosecond count.

use chrono::Duration;
use thiserror::Error;

/// 2^63, the magnitude of the most negative representable duration.
const LIMIT: u64 = 1 << 63;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(60 * 60 * 1_000_000_000),
        _ => None,
    }
}

/// Parse a duration literal.
pub fn parse(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let mut s = input;
    let mut neg = false;
    if let Some(rest) = s.strip_prefix('-') {
        neg = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }
    if s == "0" {
        return Ok(Duration::zero());
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let first = s.as_bytes()[0];
        if first != b'.' && !first.is_ascii_digit() {
            return Err(invalid());
        }

        let (whole, rest) = leading_int(s).ok_or_else(overflow)?;
        let had_whole = rest.len() != s.len();
        s = rest;

        let mut frac = 0u64;
        let mut scale = 1.0f64;
        let mut had_frac = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (f, sc, after) = leading_fraction(rest);
            had_frac = after.len() != rest.len();
            frac = f;
            scale = sc;
            s = after;
        }
        if !had_whole && !had_frac {
            return Err(invalid());
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        let per_unit = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        if whole > LIMIT / per_unit {
            return Err(overflow());
        }
        let mut v = whole * per_unit;
        if frac > 0 {
            // Fraction digits past u64 precision were dropped by
            // `leading_fraction`; the float product is truncated.
            v += (frac as f64 * (per_unit as f64 / scale)) as u64;
            if v > LIMIT {
                return Err(overflow());
            }
        }
        total = total.checked_add(v).ok_or_else(overflow)?;
        if total > LIMIT {
            return Err(overflow());
        }
    }

    if neg {
        // total <= 2^63, which wraps to i64::MIN and negates to itself.
        return Ok(Duration::nanoseconds((total as i64).wrapping_neg()));
    }
    if total > i64::MAX as u64 {
        return Err(overflow());
    }
    Ok(Duration::nanoseconds(total as i64))
}

/// Consume leading ASCII digits. `None` when the number exceeds 2^63.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    let mut x: u64 = 0;
    for b in s[..end].bytes() {
        if x > LIMIT / 10 {
            return None;
        }
        x = x * 10 + u64::from(b - b'0');
        if x > LIMIT {
            return None;
        }
    }
    Some((x, &s[end..]))
}

/// Consume fraction digits, keeping as many as fit and returning the
/// power-of-ten scale of the kept digits.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    let mut x: u64 = 0;
    let mut scale = 1.0f64;
    let mut saturated = false;
    for b in s[..end].bytes() {
        if saturated {
            continue;
        }
        if x > (LIMIT - 1) / 10 {
            saturated = true;
            continue;
        }
        let y = x * 10 + u64::from(b - b'0');
        if y > LIMIT {
            saturated = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale, &s[end..])
}

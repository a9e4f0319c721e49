use chrono::Duration;

use crate::duration;

/// A type an environment value can be parsed into.
///
/// `parse_env` is the one place that decides what counts as well-formed, and
/// both access modes of the resolver go through it.
pub trait FromEnvValue: Sized {
    /// Short name used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Value returned alongside `found == false`.
    fn zero() -> Self;

    /// Parse a raw value, or `None` when it is malformed.
    fn parse_env(raw: &str) -> Option<Self>;
}

impl FromEnvValue for String {
    const TYPE_NAME: &'static str = "string";

    fn zero() -> Self {
        String::new()
    }

    fn parse_env(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Existing callers depend on exactly this literal set:
/// `1 t T TRUE true True` and `0 f F FALSE false False`. Anything else,
/// including `yes`/`no` and the empty string, is malformed.
impl FromEnvValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn zero() -> Self {
        false
    }

    fn parse_env(raw: &str) -> Option<Self> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
            _ => None,
        }
    }
}

/// Base-10, optionally signed, native width.
impl FromEnvValue for isize {
    const TYPE_NAME: &'static str = "int";

    fn zero() -> Self {
        0
    }

    fn parse_env(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromEnvValue for f64 {
    const TYPE_NAME: &'static str = "float64";

    fn zero() -> Self {
        0.0
    }

    fn parse_env(raw: &str) -> Option<Self> {
        parse_f64(raw)
    }
}

/// Parsed at 64-bit precision, then narrowed. Parsing straight to `f32`
/// rounds differently for long literals.
impl FromEnvValue for f32 {
    const TYPE_NAME: &'static str = "float32";

    fn zero() -> Self {
        0.0
    }

    fn parse_env(raw: &str) -> Option<Self> {
        parse_f64(raw).map(|v| v as f32)
    }
}

impl FromEnvValue for Duration {
    const TYPE_NAME: &'static str = "duration";

    fn zero() -> Self {
        Duration::zero()
    }

    fn parse_env(raw: &str) -> Option<Self> {
        duration::parse(raw).ok()
    }
}

/// Decimal and scientific notation plus `inf`/`infinity`/`nan` in any case.
/// A finite literal too large for `f64` is malformed rather than infinite.
fn parse_f64(raw: &str) -> Option<f64> {
    let v: f64 = raw.parse().ok()?;
    if v.is_infinite() && !is_infinity_literal(raw) {
        return None;
    }
    Some(v)
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_literals() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(bool::parse_env(raw), Some(true), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(bool::parse_env(raw), Some(false), "{raw}");
        }
        for raw in ["yes", "no", "tRUE", "", " true", "2"] {
            assert_eq!(bool::parse_env(raw), None, "{raw}");
        }
    }

    #[test]
    fn test_int_grammar() {
        assert_eq!(isize::parse_env("42"), Some(42));
        assert_eq!(isize::parse_env("-7"), Some(-7));
        assert_eq!(isize::parse_env("+7"), Some(7));
        assert_eq!(isize::parse_env("3.5"), None);
        assert_eq!(isize::parse_env("0x10"), None);
        assert_eq!(isize::parse_env("1_000"), None);
        assert_eq!(isize::parse_env(" 1"), None);
        assert_eq!(isize::parse_env(""), None);
    }

    #[test]
    fn test_float_grammar() {
        assert_eq!(f64::parse_env("1.5"), Some(1.5));
        assert_eq!(f64::parse_env("-2.5e3"), Some(-2500.0));
        assert_eq!(f64::parse_env(".5"), Some(0.5));
        assert_eq!(f64::parse_env("5."), Some(5.0));
        assert_eq!(f64::parse_env("Inf"), Some(f64::INFINITY));
        assert_eq!(f64::parse_env("-infinity"), Some(f64::NEG_INFINITY));
        assert!(f64::parse_env("NaN").is_some_and(f64::is_nan));
        assert_eq!(f64::parse_env("1e400"), None);
        assert_eq!(f64::parse_env("abc"), None);
        assert_eq!(f64::parse_env(""), None);
    }

    #[test]
    fn test_float32_narrows_from_f64() {
        let raw = "3.14159265358979";
        let expected = raw.parse::<f64>().unwrap() as f32;
        let got = f32::parse_env(raw).unwrap();
        assert_eq!(got.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_float32_overflow_narrows_to_infinity() {
        assert_eq!(f32::parse_env("1e39"), Some(f32::INFINITY));
    }

    #[test]
    fn test_string_accepts_anything() {
        assert_eq!(String::parse_env(""), Some(String::new()));
        assert_eq!(String::parse_env(" x "), Some(" x ".to_string()));
    }
}

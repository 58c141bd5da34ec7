//! Duration strings such as `300ms`, `1.5h` or `2h45m`

use std::time::Duration;

/// Errors from [`parse_duration`]. Each variant carries the raw input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {raw:?}")]
    UnknownUnit { unit: String, raw: String },

    #[error("duration {0:?} overflows")]
    Overflow(String),

    #[error("negative duration {0:?}")]
    Negative(String),
}

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

// Fraction digits beyond this are below nanosecond resolution for every unit.
const MAX_FRACTION_DIGITS: usize = 19;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(60 * 60 * NANOS_PER_SEC),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

fn fraction_nanos(digits: &str, scale: u64) -> u64 {
    let mut numerator: u128 = 0;
    let mut denominator: u128 = 1;
    for b in digits.bytes().take(MAX_FRACTION_DIGITS) {
        numerator = numerator * 10 + u128::from(b - b'0');
        denominator *= 10;
    }
    // numerator < denominator, so the result is below `scale`
    (numerator * u128::from(scale) / denominator) as u64
}

/// Parse a duration string.
///
/// The grammar is a possibly signed sequence of decimal numbers, each with an
/// optional fraction and a mandatory unit suffix: `ns`, `us` (or `µs`), `ms`,
/// `s`, `m`, `h`. A lone `0` needs no unit. Negative durations other than
/// zero are rejected.
pub fn parse_duration(raw: &str) -> Result<Duration, DurationError> {
    let mut s = raw;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(DurationError::Invalid(raw.to_string()));
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(DurationError::Invalid(raw.to_string()));
        }

        let (whole_digits, rest) = split_digits(s);
        s = rest;
        let mut fraction_digits = "";
        if let Some(rest) = s.strip_prefix('.') {
            let (digits, rest) = split_digits(rest);
            fraction_digits = digits;
            s = rest;
        }
        if whole_digits.is_empty() && fraction_digits.is_empty() {
            return Err(DurationError::Invalid(raw.to_string()));
        }

        let unit_end = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        let (unit, rest) = s.split_at(unit_end);
        s = rest;
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(raw.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            raw: raw.to_string(),
        })?;

        let overflow = || DurationError::Overflow(raw.to_string());
        let whole: u64 = if whole_digits.is_empty() {
            0
        } else {
            // digits only, so the parse can fail on overflow alone
            whole_digits.parse().map_err(|_| overflow())?
        };
        let nanos = whole
            .checked_mul(scale)
            .and_then(|n| n.checked_add(fraction_nanos(fraction_digits, scale)))
            .ok_or_else(overflow)?;
        total = total.checked_add(nanos).ok_or_else(overflow)?;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative(raw.to_string()));
    }
    Ok(Duration::from_nanos(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(2 * 3600));
        assert_eq!(parse_duration("15m").unwrap(), Duration::from_secs(15 * 60));
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse_duration("42us").unwrap(), Duration::from_micros(42));
        assert_eq!(parse_duration("42µs").unwrap(), Duration::from_micros(42));
        assert_eq!(parse_duration("7ns").unwrap(), Duration::from_nanos(7));
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(
            parse_duration("1h30m").unwrap(),
            Duration::from_secs(90 * 60)
        );
        assert_eq!(
            parse_duration("2h45m10s500ms").unwrap(),
            Duration::from_millis(((2 * 60 + 45) * 60 + 10) * 1000 + 500)
        );
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("1.s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_duration("0.25h").unwrap(), Duration::from_secs(15 * 60));
    }

    #[test]
    fn test_parse_zero_and_signs() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("-0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_duration(""), Err(DurationError::Invalid(String::new())));
        assert_eq!(parse_duration("a"), Err(DurationError::Invalid("a".to_string())));
        assert_eq!(parse_duration("."), Err(DurationError::Invalid(".".to_string())));
        assert_eq!(parse_duration("-"), Err(DurationError::Invalid("-".to_string())));
        assert_eq!(
            parse_duration("5"),
            Err(DurationError::MissingUnit("5".to_string()))
        );
        assert_eq!(
            parse_duration("1h5"),
            Err(DurationError::MissingUnit("1h5".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_unit() {
        assert_eq!(
            parse_duration("5d"),
            Err(DurationError::UnknownUnit {
                unit: "d".to_string(),
                raw: "5d".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(
            parse_duration("-1s"),
            Err(DurationError::Negative("-1s".to_string()))
        );
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            parse_duration("99999999999h"),
            Err(DurationError::Overflow(_))
        ));
        assert!(matches!(
            parse_duration("99999999999999999999ns"),
            Err(DurationError::Overflow(_))
        ));
    }
}

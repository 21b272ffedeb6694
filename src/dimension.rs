// Dimension codec — parses the symbolic dimension grammars
// ("15ft", "3.5m", "4ft 3-1/2in") into a canonical f64, and formats a
// canonical value back into the grammar appropriate for the unit system.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FloorScriptError;
use crate::units::UnitSystem;

/// A dimension as authored in a config: either already-canonical numeric,
/// or a symbolic string to be parsed with `parse_dimension`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Dimension {
    Numeric(f64),
    Symbolic(String),
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Numeric(value)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Symbolic(value.to_string())
    }
}

static BARE_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").unwrap());

// Imperial grammars, tried most-specific first.
static IMPERIAL_FEET_FRACTION_INCHES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^(?P<feet>-?\d+(?:\.\d+)?)\s*(?:ft|')
        \s+
        (?P<whole>\d+)-(?P<num>\d+)/(?P<den>\d+)\s*(?:in|\")$
        ",
    )
    .unwrap()
});
static IMPERIAL_FEET_INCHES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^(?P<feet>-?\d+(?:\.\d+)?)\s*(?:ft|')
        \s+
        (?P<inches>\d+(?:\.\d+)?)\s*(?:in|")$
        "#,
    )
    .unwrap()
});
static IMPERIAL_FEET_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<value>-?\d+(?:\.\d+)?)\s*(?:ft|')$").unwrap());
static IMPERIAL_INCHES_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?P<value>-?\d+(?:\.\d+)?)\s*(?:in|")$"#).unwrap());
// `format_dimension`'s own output shape ("12'-6\""), accepted on input so
// a formatted value round-trips through `parse_dimension_str` without
// requiring callers to reformat with a space before re-parsing.
static IMPERIAL_FORMATTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?P<feet>-?\d+)'-(?P<inches>\d+)"$"#).unwrap());

// Metric grammars.
static METRIC_METERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<value>-?\d+(?:\.\d+)?)\s*m$").unwrap());
static METRIC_MILLIMETERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<value>-?\d+(?:\.\d+)?)\s*mm$").unwrap());

/// Parse a `Dimension` into a canonical scalar (feet for imperial, meters
/// for metric).
pub fn parse_dimension(dimension: &Dimension, units: UnitSystem) -> Result<f64, FloorScriptError> {
    match dimension {
        Dimension::Numeric(value) => Ok(*value),
        Dimension::Symbolic(raw) => parse_dimension_str(raw, units),
    }
}

/// Parse a raw symbolic dimension string into a canonical scalar.
pub fn parse_dimension_str(raw: &str, units: UnitSystem) -> Result<f64, FloorScriptError> {
    let trimmed = raw.trim();
    let invalid = || FloorScriptError::InvalidDimension {
        input: raw.to_string(),
        units,
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if BARE_DECIMAL.is_match(trimmed) {
        return trimmed.parse::<f64>().map_err(|_| invalid());
    }

    match units {
        UnitSystem::Imperial => {
            if let Some(caps) = IMPERIAL_FORMATTED.captures(trimmed) {
                let feet: f64 = caps["feet"].parse().map_err(|_| invalid())?;
                let inches: f64 = caps["inches"].parse().map_err(|_| invalid())?;
                let magnitude = feet.abs() + inches / 12.0;
                return Ok(if feet < 0.0 || trimmed.starts_with('-') { -magnitude } else { magnitude });
            }
            if let Some(caps) = IMPERIAL_FEET_FRACTION_INCHES.captures(trimmed) {
                let feet: f64 = caps["feet"].parse().map_err(|_| invalid())?;
                let whole: f64 = caps["whole"].parse().map_err(|_| invalid())?;
                let num: f64 = caps["num"].parse().map_err(|_| invalid())?;
                let den: f64 = caps["den"].parse().map_err(|_| invalid())?;
                if den == 0.0 {
                    return Err(invalid());
                }
                return Ok(feet + (whole + num / den) / 12.0);
            }
            if let Some(caps) = IMPERIAL_FEET_INCHES.captures(trimmed) {
                let feet: f64 = caps["feet"].parse().map_err(|_| invalid())?;
                let inches: f64 = caps["inches"].parse().map_err(|_| invalid())?;
                return Ok(feet + inches / 12.0);
            }
            if let Some(caps) = IMPERIAL_FEET_ONLY.captures(trimmed) {
                let value: f64 = caps["value"].parse().map_err(|_| invalid())?;
                return Ok(value);
            }
            if let Some(caps) = IMPERIAL_INCHES_ONLY.captures(trimmed) {
                let value: f64 = caps["value"].parse().map_err(|_| invalid())?;
                return Ok(value / 12.0);
            }
            Err(invalid())
        }
        UnitSystem::Metric => {
            if let Some(caps) = METRIC_MILLIMETERS.captures(trimmed) {
                let value: f64 = caps["value"].parse().map_err(|_| invalid())?;
                return Ok(value / 1000.0);
            }
            if let Some(caps) = METRIC_METERS.captures(trimmed) {
                let value: f64 = caps["value"].parse().map_err(|_| invalid())?;
                return Ok(value);
            }
            Err(invalid())
        }
    }
}

/// Format a canonical value back into the grammar for its unit system.
pub fn format_dimension(value: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Imperial => format_imperial(value),
        UnitSystem::Metric => format!("{:.2}m", value),
    }
}

fn format_imperial(value: f64) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();
    let mut feet = magnitude.floor();
    let mut inches = ((magnitude - feet) * 12.0).round();
    if inches >= 12.0 {
        inches -= 12.0;
        feet += 1.0;
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}{feet}'-{inches}\"", sign = sign, feet = feet as i64, inches = inches as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_decimal() {
        assert_eq!(parse_dimension_str("12.5", UnitSystem::Imperial).unwrap(), 12.5);
    }

    #[test]
    fn parses_feet() {
        assert_eq!(parse_dimension_str("15ft", UnitSystem::Imperial).unwrap(), 15.0);
        assert_eq!(parse_dimension_str("15'", UnitSystem::Imperial).unwrap(), 15.0);
    }

    #[test]
    fn parses_feet_and_inches() {
        let v = parse_dimension_str("4ft 6in", UnitSystem::Imperial).unwrap();
        assert!((v - 4.5).abs() < 1e-9);
    }

    #[test]
    fn parses_feet_and_fractional_inches() {
        let v = parse_dimension_str("4ft 3-1/2in", UnitSystem::Imperial).unwrap();
        assert!((v - (4.0 + 3.5 / 12.0)).abs() < 1e-9);
    }

    #[test]
    fn rejects_zero_denominator() {
        let err = parse_dimension_str("4ft 3-1/0in", UnitSystem::Imperial).unwrap_err();
        assert!(matches!(err, FloorScriptError::InvalidDimension { .. }));
    }

    #[test]
    fn parses_inches_only() {
        let v = parse_dimension_str("6in", UnitSystem::Imperial).unwrap();
        assert!((v - 0.5).abs() < 1e-9);
    }

    #[test]
    fn parses_metric_meters_and_millimeters() {
        assert_eq!(parse_dimension_str("3.5m", UnitSystem::Metric).unwrap(), 3.5);
        let v = parse_dimension_str("350mm", UnitSystem::Metric).unwrap();
        assert!((v - 0.35).abs() < 1e-9);
    }

    #[test]
    fn rejects_mismatched_grammar() {
        assert!(parse_dimension_str("15ft", UnitSystem::Metric).is_err());
        assert!(parse_dimension_str("3.5m", UnitSystem::Imperial).is_err());
    }

    #[test]
    fn formats_imperial_with_rounding_carry() {
        assert_eq!(format_dimension(12.5, UnitSystem::Imperial), "12'-6\"");
        assert_eq!(format_dimension(11.999, UnitSystem::Imperial), "12'-0\"");
    }

    #[test]
    fn formats_negative_imperial() {
        assert_eq!(format_dimension(-3.5, UnitSystem::Imperial), "-3'-6\"");
    }

    #[test]
    fn formats_metric() {
        assert_eq!(format_dimension(3.5, UnitSystem::Metric), "3.50m");
    }

    #[test]
    fn round_trip_within_tolerance_imperial() {
        for v in [1.0, 4.2917, 10.0, 0.5, 23.99] {
            let formatted = format_dimension(v, UnitSystem::Imperial);
            let parsed = parse_dimension_str(&formatted, UnitSystem::Imperial).unwrap();
            assert!((parsed - v).abs() < 1.0 / 24.0, "v={v} parsed={parsed}");
        }
    }

    #[test]
    fn round_trip_within_tolerance_metric() {
        for v in [1.0, 4.2917, 10.0, 0.5] {
            let formatted = format_dimension(v, UnitSystem::Metric);
            let parsed = parse_dimension_str(&formatted, UnitSystem::Metric).unwrap();
            assert!((parsed - v).abs() < 0.005, "v={v} parsed={parsed}");
        }
    }
}

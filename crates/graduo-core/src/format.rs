//! Value formatting for labels and panels
//!
//! Two families of notations share one [`Label`] output: time formats
//! (mixed, decimal, digital) and numeric notations (decimal, fraction,
//! mixed number).

use crate::{ConfigError, TimeParts, TimeUnit, normalize_value};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// NOTATIONS
// ============================================================================

/// Rendering mode for numeric lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Notation {
    #[default]
    Decimal,
    Fraction,
    MixedNumber,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Self::Decimal, Self::Fraction, Self::MixedNumber];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Fraction => "fraction",
            Self::MixedNumber => "mixedNumber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Decimal => "Décimale",
            Self::Fraction => "Fraction",
            Self::MixedNumber => "Nombre mixte",
        }
    }
}

impl FromStr for Notation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decimal" => Ok(Self::Decimal),
            "fraction" => Ok(Self::Fraction),
            "mixedNumber" | "mixed-number" => Ok(Self::MixedNumber),
            other => Err(ConfigError::UnknownNotation(other.to_string())),
        }
    }
}

/// Rendering mode for time lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    #[default]
    Mixed,
    Decimal,
    Digital,
}

impl TimeFormat {
    pub const ALL: [TimeFormat; 3] = [Self::Mixed, Self::Decimal, Self::Digital];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Decimal => "decimal",
            Self::Digital => "digital",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mixed => "Format mixte (1h 30min)",
            Self::Decimal => "Format décimal (1.5h)",
            Self::Digital => "Format digital (01:30:00)",
        }
    }
}

impl FromStr for TimeFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mixed" => Ok(Self::Mixed),
            "decimal" => Ok(Self::Decimal),
            "digital" => Ok(Self::Digital),
            other => Err(ConfigError::UnknownDisplayFormat(other.to_string())),
        }
    }
}

// ============================================================================
// LABEL
// ============================================================================

/// Text drawn above a graduation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// One or two stacked text lines
    Lines(Vec<String>),
    /// Numerator over a bar over denominator
    Fraction { numerator: i64, denominator: i64 },
    /// Whole part, a plus sign, then a fraction glyph
    Mixed { whole: i64, numerator: i64, denominator: i64 },
}

impl Label {
    pub fn text(line: impl Into<String>) -> Self {
        Self::Lines(vec![line.into()])
    }

    /// Single-line rendering for panels and accessibility text
    pub fn plain(&self) -> String {
        match self {
            Self::Lines(lines) => lines.join(" "),
            Self::Fraction { numerator, denominator } => format!("{numerator}/{denominator}"),
            Self::Mixed { whole, numerator, denominator } => {
                format!("{whole} {numerator}/{denominator}")
            }
        }
    }
}

/// Shortest decimal rendering of a value (`7.5`, `10`)
pub fn trim_number(value: f64) -> String {
    format!("{}", normalize_value(value))
}

/// Split `value` into a whole part and a rounded count of `per` sub-parts,
/// carrying when the rounding reaches a full unit.
fn split_rounded(value: f64, per: f64) -> (u64, u64) {
    let value = value.max(0.0);
    let mut whole = value.floor() as u64;
    let mut part = ((value - value.floor()) * per).round() as u64;
    if part >= per as u64 {
        whole += 1;
        part = 0;
    }
    (whole, part)
}

// ============================================================================
// TIME FORMATTING
// ============================================================================

/// Render a time value as one string, used by panels
pub fn format_time(value: f64, unit: TimeUnit, format: TimeFormat) -> String {
    match format {
        TimeFormat::Digital => format_digital(value, unit),
        TimeFormat::Decimal => format_decimal(value, unit),
        TimeFormat::Mixed => format_mixed(value, unit),
    }
}

/// `HH:MM:SS` with days folded into the hours field
pub fn format_digital(value: f64, unit: TimeUnit) -> String {
    let parts = TimeParts::decompose(value, unit);
    format!(
        "{:02}:{:02}:{:02}",
        parts.total_hours(),
        parts.minutes,
        parts.seconds
    )
}

/// Single number with a unit suffix
pub fn format_decimal(value: f64, unit: TimeUnit) -> String {
    match unit {
        TimeUnit::Second if value < 60.0 => format!("{value:.1}s"),
        TimeUnit::Second => format!("{:.2}min", value / 60.0),
        TimeUnit::Minute if value < 60.0 => format!("{value:.1}min"),
        TimeUnit::Minute => format!("{:.2}h", value / 60.0),
        TimeUnit::Hour => format!("{value:.2}h"),
        TimeUnit::Day => format!("{value:.2}j"),
    }
}

/// Non-zero components from days down to seconds, e.g. `1h 30min`
pub fn format_mixed(value: f64, unit: TimeUnit) -> String {
    let (mut days, mut hours, mut minutes, mut seconds, mut tenths) = (0, 0, 0, 0, 0);

    match unit {
        TimeUnit::Second => {
            let (whole, fraction) = split_rounded(value, 10.0);
            tenths = fraction;
            seconds = whole % 60;
            minutes = (whole / 60) % 60;
            hours = whole / 3_600;
        }
        TimeUnit::Minute => {
            let (whole, secs) = split_rounded(value, 60.0);
            seconds = secs;
            minutes = whole % 60;
            hours = (whole / 60) % 24;
            days = whole / 1_440;
        }
        TimeUnit::Hour => {
            let (whole, mins) = split_rounded(value, 60.0);
            minutes = mins;
            hours = whole % 24;
            days = whole / 24;
        }
        TimeUnit::Day => {
            let (whole, hrs) = split_rounded(value, 24.0);
            hours = hrs;
            days = whole;
        }
    }

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{days}j"));
    }
    if hours > 0 || (days > 0 && (minutes > 0 || seconds > 0)) {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || (hours > 0 && seconds > 0) {
        parts.push(format!("{minutes}min"));
    }
    if seconds > 0 || tenths > 0 || (unit == TimeUnit::Second && value < 60.0 && parts.is_empty()) {
        if tenths > 0 {
            parts.push(format!("{seconds},{tenths}s"));
        } else {
            parts.push(format!("{seconds}s"));
        }
    }

    if parts.is_empty() {
        return format!("0{}", unit.suffix());
    }
    parts.join(" ")
}

/// Label drawn above a time graduation
pub fn time_label(value: f64, unit: TimeUnit, format: TimeFormat) -> Label {
    match unit {
        TimeUnit::Second => sub_unit_label(value, format, ("min", "s")),
        TimeUnit::Minute => sub_unit_label(value, format, ("h", "min")),
        TimeUnit::Hour => {
            let (whole, minutes) = split_rounded(value, 60.0);
            match format {
                TimeFormat::Digital => Label::text(format!("{whole:02}:{minutes:02}")),
                TimeFormat::Decimal => Label::text(format!("{value:.1}h")),
                TimeFormat::Mixed => two_part_label(whole, "h", minutes, "min"),
            }
        }
        TimeUnit::Day => {
            let (whole, hours) = split_rounded(value, 24.0);
            match format {
                TimeFormat::Digital => Label::text(format!("{whole}j {hours:02}h")),
                TimeFormat::Decimal => Label::text(format!("{value:.1}j")),
                TimeFormat::Mixed => two_part_label(whole, "j", hours, "h"),
            }
        }
    }
}

/// Seconds and minutes share a base-60 layout with the next unit up.
fn sub_unit_label(value: f64, format: TimeFormat, (upper, own): (&str, &str)) -> Label {
    let total = value.max(0.0);
    let upper_count = (total / 60.0).floor() as u64;
    let remainder = (total % 60.0).floor() as u64;

    match format {
        TimeFormat::Digital => Label::text(format!("{upper_count:02}:{remainder:02}")),
        TimeFormat::Decimal if total < 60.0 => Label::text(format!("{}{own}", trim_number(total))),
        TimeFormat::Decimal => Label::text(format!("{:.1}{upper}", total / 60.0)),
        TimeFormat::Mixed if total < 60.0 => Label::text(format!("{}{own}", trim_number(total))),
        TimeFormat::Mixed if remainder == 0 => Label::text(format!("{upper_count}{upper}")),
        TimeFormat::Mixed => Label::Lines(vec![
            format!("{upper_count}{upper}"),
            format!("{remainder}{own}"),
        ]),
    }
}

fn two_part_label(whole: u64, whole_suffix: &str, part: u64, part_suffix: &str) -> Label {
    if part == 0 {
        Label::text(format!("{whole}{whole_suffix}"))
    } else if whole == 0 {
        Label::text(format!("{part}{part_suffix}"))
    } else {
        Label::Lines(vec![
            format!("{whole}{whole_suffix}"),
            format!("{part}{part_suffix}"),
        ])
    }
}

// ============================================================================
// NUMERIC FORMATTING
// ============================================================================

/// A value expressed against a fixed denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    /// Integers become `n/1`; anything else is rounded to `denominator` parts.
    pub fn from_value(value: f64, denominator: u32) -> Self {
        if is_integer(value) {
            return Self {
                numerator: value.round() as i64,
                denominator: 1,
            };
        }
        let denominator = i64::from(denominator.max(1));
        Self {
            numerator: (value * denominator as f64).round() as i64,
            denominator,
        }
    }
}

fn is_integer(value: f64) -> bool {
    (value - value.round()).abs() < 1e-9
}

/// Label drawn above a numeric graduation
pub fn numeric_label(value: f64, notation: Notation, denominator: u32) -> Label {
    let value = normalize_value(value);

    match notation {
        Notation::Decimal => {
            if is_integer(value) {
                Label::text(format!("{}", value.round() as i64))
            } else {
                Label::text(format!("{value:.1}"))
            }
        }
        Notation::Fraction => {
            let fraction = Fraction::from_value(value, denominator);
            if fraction.denominator == 1 {
                Label::text(fraction.numerator.to_string())
            } else {
                Label::Fraction {
                    numerator: fraction.numerator,
                    denominator: fraction.denominator,
                }
            }
        }
        Notation::MixedNumber => {
            let whole = value.floor();
            let remainder = value - whole;
            if is_integer(value) {
                return Label::text(format!("{}", value.round() as i64));
            }

            let fraction = Fraction::from_value(remainder, denominator);
            if fraction.numerator == fraction.denominator {
                return Label::text(format!("{}", whole as i64 + 1));
            }
            if whole == 0.0 {
                Label::Fraction {
                    numerator: fraction.numerator,
                    denominator: fraction.denominator,
                }
            } else {
                Label::Mixed {
                    whole: whole as i64,
                    numerator: fraction.numerator,
                    denominator: fraction.denominator,
                }
            }
        }
    }
}

/// Single-line numeric rendering for panels
pub fn format_numeric(value: f64, notation: Notation, denominator: u32) -> String {
    numeric_label(value, notation, denominator).plain()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mixed_time() {
        assert_eq!(format_mixed(90.0, TimeUnit::Minute), "1h 30min");
        assert_eq!(format_mixed(15.0, TimeUnit::Minute), "15min");
        assert_eq!(format_mixed(1.5, TimeUnit::Day), "1j 12h");
        assert_eq!(format_mixed(25.5, TimeUnit::Hour), "1j 1h 30min");
        assert_eq!(format_mixed(7.5, TimeUnit::Second), "7,5s");
        assert_eq!(format_mixed(3_725.0, TimeUnit::Second), "1h 2min 5s");
        assert_eq!(format_mixed(0.0, TimeUnit::Minute), "0min");
    }

    #[test]
    fn test_format_decimal_time() {
        assert_eq!(format_decimal(30.0, TimeUnit::Second), "30.0s");
        assert_eq!(format_decimal(90.0, TimeUnit::Second), "1.50min");
        assert_eq!(format_decimal(90.0, TimeUnit::Minute), "1.50h");
        assert_eq!(format_decimal(2.5, TimeUnit::Day), "2.50j");
    }

    #[test]
    fn test_format_digital_folds_days_into_hours() {
        assert_eq!(format_digital(1.5, TimeUnit::Hour), "01:30:00");
        assert_eq!(format_digital(2.0, TimeUnit::Day), "48:00:00");
        assert_eq!(format_digital(125.0, TimeUnit::Second), "00:02:05");
    }

    #[test]
    fn test_time_labels() {
        assert_eq!(
            time_label(75.0, TimeUnit::Minute, TimeFormat::Mixed),
            Label::Lines(vec!["1h".into(), "15min".into()])
        );
        assert_eq!(
            time_label(60.0, TimeUnit::Minute, TimeFormat::Mixed),
            Label::text("1h")
        );
        assert_eq!(
            time_label(25.0, TimeUnit::Minute, TimeFormat::Digital),
            Label::text("00:25")
        );
        assert_eq!(
            time_label(0.25, TimeUnit::Hour, TimeFormat::Mixed),
            Label::text("15min")
        );
        assert_eq!(
            time_label(1.25, TimeUnit::Day, TimeFormat::Digital),
            Label::text("1j 06h")
        );
        assert_eq!(
            time_label(7.5, TimeUnit::Second, TimeFormat::Decimal),
            Label::text("7.5s")
        );
    }

    #[test]
    fn test_numeric_labels() {
        assert_eq!(numeric_label(3.0, Notation::Decimal, 4), Label::text("3"));
        assert_eq!(numeric_label(0.1 + 0.2, Notation::Decimal, 4), Label::text("0.3"));
        assert_eq!(numeric_label(2.0, Notation::Fraction, 4), Label::text("2"));
        assert_eq!(
            numeric_label(1.25, Notation::Fraction, 4),
            Label::Fraction { numerator: 5, denominator: 4 }
        );
        assert_eq!(
            numeric_label(1.25, Notation::MixedNumber, 4),
            Label::Mixed { whole: 1, numerator: 1, denominator: 4 }
        );
        assert_eq!(
            numeric_label(0.75, Notation::MixedNumber, 4),
            Label::Fraction { numerator: 3, denominator: 4 }
        );
    }

    #[test]
    fn test_format_numeric_plain() {
        assert_eq!(format_numeric(1.25, Notation::MixedNumber, 4), "1 1/4");
        assert_eq!(format_numeric(1.25, Notation::Fraction, 4), "5/4");
    }

    #[test]
    fn test_parse_notations() {
        assert_eq!("mixedNumber".parse::<Notation>().unwrap(), Notation::MixedNumber);
        assert_eq!("digital".parse::<TimeFormat>().unwrap(), TimeFormat::Digital);
        assert!("roman".parse::<Notation>().is_err());
    }
}

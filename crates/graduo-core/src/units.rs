//! Time units and linear conversion through seconds

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const SECONDS_IN_MINUTE: f64 = 60.0;
pub const SECONDS_IN_HOUR: f64 = 3_600.0;
pub const SECONDS_IN_DAY: f64 = 86_400.0;

// ============================================================================
// TIME UNIT
// ============================================================================

/// Measurement unit of a time line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    #[default]
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [Self::Second, Self::Minute, Self::Hour, Self::Day];

    /// Seconds in one of this unit
    pub fn seconds(&self) -> f64 {
        match self {
            Self::Second => 1.0,
            Self::Minute => SECONDS_IN_MINUTE,
            Self::Hour => SECONDS_IN_HOUR,
            Self::Day => SECONDS_IN_DAY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }

    /// Plural label shown in panels
    pub fn label(&self) -> &'static str {
        match self {
            Self::Second => "Secondes",
            Self::Minute => "Minutes",
            Self::Hour => "Heures",
            Self::Day => "Jours",
        }
    }

    /// Short suffix used in formatted values
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
            Self::Day => "j",
        }
    }

    /// Steps offered between primary graduations
    pub fn allowed_steps(&self) -> &'static [f64] {
        match self {
            Self::Second | Self::Minute => &[1.0, 5.0, 10.0, 15.0, 30.0],
            Self::Hour => &[0.25, 0.5, 1.0, 2.0, 3.0, 6.0, 12.0],
            Self::Day => &[0.5, 1.0, 2.0, 7.0, 14.0],
        }
    }

    pub fn allows_step(&self, step: f64) -> bool {
        self.allowed_steps().iter().any(|s| (s - step).abs() < 1e-9)
    }

    /// Upper bound of the editable range
    pub fn max_interval(&self) -> f64 {
        match self {
            Self::Second | Self::Minute => 60.0,
            Self::Hour => 24.0,
            Self::Day => 30.0,
        }
    }

    /// Range selected when switching to this unit
    pub fn default_intervals(&self) -> (f64, f64) {
        match self {
            Self::Day => (1.0, self.max_interval()),
            _ => (0.0, self.max_interval()),
        }
    }

    pub fn default_step(&self) -> f64 {
        match self {
            Self::Second => 10.0,
            Self::Minute => 5.0,
            Self::Hour | Self::Day => 1.0,
        }
    }

    pub fn default_denominator(&self) -> u32 {
        match self {
            Self::Second => 10,
            Self::Minute | Self::Hour => 60,
            Self::Day => 24,
        }
    }

    /// Candidate subdivision counts that split a step along natural sub-units
    pub fn natural_subdivisions(&self) -> &'static [u32] {
        match self {
            Self::Second | Self::Minute => &[2, 4, 5, 6, 10, 12, 15, 20, 30],
            Self::Hour => &[2, 3, 4, 6, 8, 12, 24, 48],
            Self::Day => &[2, 4, 6, 7, 14, 28],
        }
    }

    /// Smallest sub-unit a natural subdivision may land on (quarter hour, quarter day)
    pub fn natural_grain(&self) -> f64 {
        match self {
            Self::Second | Self::Minute => 1.0,
            Self::Hour | Self::Day => 0.25,
        }
    }

    /// Subdivision count used when no natural candidate fits
    pub fn fallback_subdivisions(&self) -> u32 {
        match self {
            Self::Second | Self::Minute => 5,
            Self::Hour => 15,
            Self::Day => 6,
        }
    }

    /// Coarsest unit that still reads naturally for a duration expressed in `self`
    pub fn best_display_unit(&self, duration: f64) -> TimeUnit {
        match self {
            Self::Second if duration >= SECONDS_IN_HOUR => Self::Hour,
            Self::Second if duration >= SECONDS_IN_MINUTE => Self::Minute,
            Self::Minute if duration >= 1_440.0 => Self::Day,
            Self::Minute if duration >= 60.0 => Self::Hour,
            Self::Hour if duration >= 24.0 => Self::Day,
            unit => *unit,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "second" | "s" => Ok(Self::Second),
            "minute" | "min" => Ok(Self::Minute),
            "hour" | "h" => Ok(Self::Hour),
            "day" | "j" | "d" => Ok(Self::Day),
            other => Err(ConfigError::UnknownUnit(other.to_string())),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Rescale `value` from one unit to another through seconds
pub fn convert(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.seconds() / to.seconds()
}

/// A time value broken into calendar-like components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl TimeParts {
    /// Decompose a non-negative value expressed in `unit`
    pub fn decompose(value: f64, unit: TimeUnit) -> Self {
        let total = convert(value, unit, TimeUnit::Second).max(0.0);
        let mut millis = ((total - total.floor()) * 1000.0).round() as u64;
        let mut whole = total.floor() as u64;
        if millis >= 1000 {
            whole += 1;
            millis -= 1000;
        }

        Self {
            days: whole / 86_400,
            hours: (whole % 86_400) / 3_600,
            minutes: (whole % 3_600) / 60,
            seconds: whole % 60,
            millis,
        }
    }

    /// Hours with days folded in (digital clock display)
    pub fn total_hours(&self) -> u64 {
        self.days * 24 + self.hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_minutes_to_seconds() {
        assert_eq!(convert(15.0, TimeUnit::Minute, TimeUnit::Second), 900.0);
        assert_eq!(convert(90.0, TimeUnit::Minute, TimeUnit::Hour), 1.5);
        assert_eq!(convert(2.0, TimeUnit::Day, TimeUnit::Hour), 48.0);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("hour".parse::<TimeUnit>().unwrap(), TimeUnit::Hour);
        assert!(matches!(
            "fortnight".parse::<TimeUnit>(),
            Err(ConfigError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_allowed_steps() {
        assert!(TimeUnit::Minute.allows_step(15.0));
        assert!(!TimeUnit::Minute.allows_step(20.0));
        assert!(TimeUnit::Hour.allows_step(0.25));
        assert!(!TimeUnit::Day.allows_step(3.0));
    }

    #[test]
    fn test_best_display_unit() {
        assert_eq!(TimeUnit::Second.best_display_unit(4_000.0), TimeUnit::Hour);
        assert_eq!(TimeUnit::Second.best_display_unit(90.0), TimeUnit::Minute);
        assert_eq!(TimeUnit::Minute.best_display_unit(1_500.0), TimeUnit::Day);
        assert_eq!(TimeUnit::Hour.best_display_unit(5.0), TimeUnit::Hour);
        assert_eq!(TimeUnit::Day.best_display_unit(500.0), TimeUnit::Day);
    }

    #[test]
    fn test_decompose() {
        let parts = TimeParts::decompose(1.5, TimeUnit::Day);
        assert_eq!(parts.days, 1);
        assert_eq!(parts.hours, 12);
        assert_eq!(parts.total_hours(), 36);

        let parts = TimeParts::decompose(75.25, TimeUnit::Second);
        assert_eq!(parts.minutes, 1);
        assert_eq!(parts.seconds, 15);
        assert_eq!(parts.millis, 250);
    }
}

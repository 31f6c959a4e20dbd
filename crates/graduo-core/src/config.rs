//! Line configuration and the settings validator
//!
//! A [`Config`] is immutable: every control-panel edit produces a new value
//! that replaces the previous one wholesale.

use crate::{ConfigError, Notation, TimeFormat, TimeUnit};
use serde::{Deserialize, Serialize};

/// Bounds accepted for numeric lines
pub const NUMERIC_BOUNDS: (f64, f64) = (-100.0, 100.0);

/// Most primary graduations a line may carry; the full numeric range at step 0.1
pub const MAX_PRIMARIES: usize = 2001;

// ============================================================================
// INTERVAL
// ============================================================================

/// Visible domain range, `start < end` once validated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn range(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.start).min(self.end)
    }
}

/// Which end of the interval an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

// ============================================================================
// CONFIG
// ============================================================================

/// Measurement domain of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DomainKind {
    Numeric { notation: Notation },
    Time { unit: TimeUnit, format: TimeFormat },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub domain: DomainKind,
    pub intervals: Interval,
    /// Subdivision count for fraction-like notations
    pub denominator: u32,
    /// Spacing between primary graduations
    pub step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self::chronix_default()
    }
}

impl Config {
    /// Minutes over one hour, five-minute primaries
    pub fn chronix_default() -> Self {
        Self {
            domain: DomainKind::Time {
                unit: TimeUnit::Minute,
                format: TimeFormat::Mixed,
            },
            intervals: Interval::new(0.0, 60.0),
            denominator: 60,
            step: 5.0,
        }
    }

    /// Integers from 0 to 10 with quarter subdivisions for fractions
    pub fn natix_default() -> Self {
        Self {
            domain: DomainKind::Numeric {
                notation: Notation::Decimal,
            },
            intervals: Interval::new(0.0, 10.0),
            denominator: 4,
            step: 1.0,
        }
    }

    /// Parse the host-facing JSON shape
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let spec: ConfigSpec = serde_json::from_str(json)?;
        Self::try_from(spec)
    }

    pub fn time_unit(&self) -> Option<TimeUnit> {
        match self.domain {
            DomainKind::Time { unit, .. } => Some(unit),
            DomainKind::Numeric { .. } => None,
        }
    }

    pub fn range(&self) -> f64 {
        self.intervals.range()
    }

    /// Number of primary graduations in the visible range
    pub fn primary_count(&self) -> usize {
        if self.step <= 0.0 || self.range() < 0.0 {
            return 0;
        }
        (self.range() / self.step + 1e-9).floor() as usize + 1
    }

    /// Editable bounds for either end of the interval
    pub fn bounds(&self) -> (f64, f64) {
        match self.domain {
            DomainKind::Time { unit, .. } => (0.0, unit.max_interval()),
            DomainKind::Numeric { .. } => NUMERIC_BOUNDS,
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Report values the validator cannot correct on its own
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        let count = self.primary_count();
        if count > MAX_PRIMARIES {
            return Err(ConfigError::TooManyGraduations {
                count,
                max: MAX_PRIMARIES,
            });
        }
        if self.denominator == 0 {
            return Err(ConfigError::ZeroDenominator);
        }
        if let DomainKind::Time { unit, .. } = self.domain
            && !unit.allows_step(self.step)
        {
            return Err(ConfigError::StepNotAllowed {
                step: self.step,
                unit: unit.as_str(),
            });
        }
        Ok(())
    }

    /// Nudge the interval so that `end > start` within the editable bounds
    pub fn validated(mut self) -> Self {
        let (lower, upper) = self.bounds();
        let Interval { start, end } = self.intervals;
        if end > start {
            return self;
        }

        let nudged_start = start.min(end - 1.0).max(lower);
        let nudged_end = end.max(nudged_start + 1.0).min(upper.max(nudged_start + 1.0));
        tracing::info!(
            start,
            end,
            nudged_start,
            nudged_end,
            "Nudged interval to keep end above start"
        );
        self.intervals = Interval::new(nudged_start, nudged_end);
        self
    }

    // ========================================================================
    // Control-panel edits
    // ========================================================================

    /// Switch to a time unit, resetting range, step and denominator
    pub fn with_unit(&self, unit: TimeUnit) -> Self {
        let format = match self.domain {
            DomainKind::Time { format, .. } => format,
            DomainKind::Numeric { .. } => TimeFormat::default(),
        };
        let (start, end) = unit.default_intervals();
        Self {
            domain: DomainKind::Time { unit, format },
            intervals: Interval::new(start, end),
            denominator: unit.default_denominator(),
            step: unit.default_step(),
        }
    }

    /// Move one end of the interval; `None` when the edit would cross the other
    /// end or leave the line with too many graduations
    pub fn with_bound(&self, bound: Bound, value: f64) -> Option<Self> {
        let (lower, upper) = self.bounds();
        let value = value.max(lower).min(upper);
        let mut next = *self;

        match bound {
            Bound::Start if value >= self.intervals.end => return None,
            Bound::End if value <= self.intervals.start => return None,
            Bound::Start => next.intervals.start = value,
            Bound::End => next.intervals.end = value,
        }
        if let Err(err) = next.check() {
            tracing::warn!(?bound, value, %err, "Rejected interval edit");
            return None;
        }
        Some(next)
    }

    pub fn with_step(&self, step: f64) -> Result<Self, ConfigError> {
        let next = Self { step, ..*self };
        next.check()?;
        Ok(next)
    }

    pub fn with_denominator(&self, denominator: u32) -> Result<Self, ConfigError> {
        if denominator == 0 {
            return Err(ConfigError::ZeroDenominator);
        }
        Ok(Self {
            denominator,
            ..*self
        })
    }

    /// Change notation; a time line becomes numeric
    pub fn with_notation(&self, notation: Notation) -> Self {
        Self {
            domain: DomainKind::Numeric { notation },
            ..*self
        }
    }

    /// Change the time display format; numeric lines are left untouched
    pub fn with_format(&self, format: TimeFormat) -> Self {
        match self.domain {
            DomainKind::Time { unit, .. } => Self {
                domain: DomainKind::Time { unit, format },
                ..*self
            },
            DomainKind::Numeric { .. } => *self,
        }
    }
}

// ============================================================================
// HOST SHAPE
// ============================================================================

/// Configuration object as a host widget passes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_format: Option<String>,
    pub intervals: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator: Option<u32>,
    pub step: f64,
    #[serde(default, alias = "timeUnit", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl TryFrom<ConfigSpec> for Config {
    type Error = ConfigError;

    fn try_from(spec: ConfigSpec) -> Result<Self, Self::Error> {
        let is_time = spec.unit.is_some() || spec.display_format.is_some();

        let (domain, default_denominator) = if is_time {
            let unit = match spec.unit.as_deref() {
                Some(unit) => unit.parse::<TimeUnit>()?,
                None => TimeUnit::default(),
            };
            let format = match spec.display_format.as_deref() {
                Some(format) => format.parse::<TimeFormat>()?,
                None => TimeFormat::default(),
            };
            (DomainKind::Time { unit, format }, unit.default_denominator())
        } else {
            let notation = match spec.notation.as_deref() {
                Some(notation) => notation.parse::<Notation>()?,
                None => Notation::default(),
            };
            (DomainKind::Numeric { notation }, 4)
        };

        let config = Self {
            domain,
            intervals: Interval::new(spec.intervals[0], spec.intervals[1]),
            denominator: spec.denominator.unwrap_or(default_denominator),
            step: spec.step,
        };
        config.check()?;
        Ok(config.validated())
    }
}

impl From<&Config> for ConfigSpec {
    fn from(config: &Config) -> Self {
        let (notation, display_format, unit) = match config.domain {
            DomainKind::Numeric { notation } => (Some(notation.as_str().to_string()), None, None),
            DomainKind::Time { unit, format } => (
                None,
                Some(format.as_str().to_string()),
                Some(unit.as_str().to_string()),
            ),
        };
        Self {
            notation,
            display_format,
            intervals: [config.intervals.start, config.intervals.end],
            denominator: Some(config.denominator),
            step: config.step,
            unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_config() {
        let config = Config::from_json(
            r#"{"displayFormat":"digital","intervals":[0,24],"step":1,"unit":"hour"}"#,
        )
        .unwrap();
        assert_eq!(
            config.domain,
            DomainKind::Time {
                unit: TimeUnit::Hour,
                format: TimeFormat::Digital
            }
        );
        assert_eq!(config.denominator, 60);
        assert_eq!(config.primary_count(), 25);
    }

    #[test]
    fn test_parse_numeric_config() {
        let config = Config::from_json(
            r#"{"notation":"mixedNumber","intervals":[0,5],"denominator":3,"step":1}"#,
        )
        .unwrap();
        assert_eq!(
            config.domain,
            DomainKind::Numeric {
                notation: Notation::MixedNumber
            }
        );
        assert_eq!(config.denominator, 3);
    }

    #[test]
    fn test_time_unit_alias() {
        let config =
            Config::from_json(r#"{"timeUnit":"second","intervals":[0,60],"step":10}"#).unwrap();
        assert_eq!(config.time_unit(), Some(TimeUnit::Second));
    }

    #[test]
    fn test_rejects_bad_configs() {
        assert!(matches!(
            Config::from_json(r#"{"unit":"minute","intervals":[0,60],"step":7}"#),
            Err(ConfigError::StepNotAllowed { .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{"intervals":[0,10],"step":0}"#),
            Err(ConfigError::NonPositiveStep(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"intervals":[0,10],"step":1,"denominator":0}"#),
            Err(ConfigError::ZeroDenominator)
        ));
        assert!(matches!(
            Config::from_json(r#"{"intervals":"nope"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_validator_nudges_crossed_interval() {
        let mut config = Config::natix_default();
        config.intervals = Interval::new(8.0, 3.0);
        let fixed = config.validated();
        assert_eq!(fixed.intervals, Interval::new(2.0, 3.0));

        let mut config = Config::chronix_default();
        config.intervals = Interval::new(0.0, 0.0);
        let fixed = config.validated();
        assert_eq!(fixed.intervals, Interval::new(0.0, 1.0));
    }

    #[test]
    fn test_with_unit_resets_defaults() {
        let config = Config::chronix_default().with_unit(TimeUnit::Day);
        assert_eq!(config.intervals, Interval::new(1.0, 30.0));
        assert_eq!(config.step, 1.0);
        assert_eq!(config.denominator, 24);

        let config = Config::chronix_default().with_unit(TimeUnit::Second);
        assert_eq!(config.step, 10.0);
        assert_eq!(config.denominator, 10);
    }

    #[test]
    fn test_with_bound_clamps_and_rejects_crossing() {
        let config = Config::chronix_default();
        let wider = config.with_bound(Bound::End, 500.0).unwrap();
        assert_eq!(wider.intervals.end, 60.0);

        assert!(config.with_bound(Bound::Start, 60.0).is_none());

        let numeric = Config::natix_default().with_bound(Bound::Start, -250.0).unwrap();
        assert_eq!(numeric.intervals.start, -100.0);
    }

    #[test]
    fn test_with_step_allow_list() {
        let config = Config::chronix_default();
        assert!(config.with_step(15.0).is_ok());
        assert!(config.with_step(20.0).is_err());
        assert!(Config::natix_default().with_step(0.5).is_ok());
    }

    #[test]
    fn test_tiny_step_is_rejected() {
        let config = Config::natix_default()
            .with_bound(Bound::Start, -100.0)
            .and_then(|c| c.with_bound(Bound::End, 100.0))
            .unwrap();
        assert!(config.with_step(0.1).is_ok());
        assert!(matches!(
            config.with_step(0.0001),
            Err(ConfigError::TooManyGraduations { count, max: MAX_PRIMARIES }) if count > MAX_PRIMARIES
        ));

        let narrow = Config::natix_default()
            .with_bound(Bound::Start, 0.0)
            .and_then(|c| c.with_bound(Bound::End, 1.0))
            .and_then(|c| c.with_step(0.01).ok())
            .unwrap();
        assert!(narrow.with_bound(Bound::End, 100.0).is_none());
        assert!(narrow.with_bound(Bound::End, 10.0).is_some());
    }

    #[test]
    fn test_spec_round_trip() {
        let config = Config::chronix_default();
        let spec = ConfigSpec::from(&config);
        assert_eq!(Config::try_from(spec).unwrap(), config);
    }
}

//! Duration and arithmetic on selected values

use crate::{Config, TimeUnit, ValueSet, normalize_value, sorted_values, units};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Conversions at or above this are not worth displaying
pub const MAX_DISPLAY_CONVERSION: f64 = 1_000_000.0;

// ============================================================================
// DURATION
// ============================================================================

/// Distance between exactly two selected values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationSpan {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
}

impl DurationSpan {
    /// `None` unless exactly two values are given
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let [a, b] = values else {
            return None;
        };
        let (start, end) = if a <= b { (*a, *b) } else { (*b, *a) };
        Some(Self {
            start,
            end,
            duration: normalize_value(end - start),
        })
    }

    pub fn from_selection(selected: &ValueSet) -> Option<Self> {
        Self::from_values(&sorted_values(selected))
    }

    /// The duration in every unit, dropping degenerate or huge figures
    pub fn conversions(&self, unit: TimeUnit) -> Vec<(TimeUnit, f64)> {
        TimeUnit::ALL
            .into_iter()
            .map(|to| (to, units::convert(self.duration, unit, to)))
            .filter(|&(_, value)| value > 0.0 && value < MAX_DISPLAY_CONVERSION)
            .collect()
    }

    /// Share of half the visible range, as a percentage capped at 100
    pub fn proportion(&self, config: &Config) -> f64 {
        let half_range = config.range() * 0.5;
        if half_range <= 0.0 {
            return 0.0;
        }
        (self.duration / half_range * 100.0).min(100.0)
    }

    pub fn best_unit(&self, unit: TimeUnit) -> TimeUnit {
        unit.best_display_unit(self.duration)
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Add and subtract take an operand with a unit; the others a bare factor
    pub fn takes_unit(&self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

impl std::str::FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|op| op.as_str() == s).ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationRequest {
    pub operation: Operation,
    pub operand: f64,
    /// Unit the operand is expressed in, for add/subtract on time lines
    pub operand_unit: Option<TimeUnit>,
}

impl OperationRequest {
    pub fn new(operation: Operation, operand: f64) -> Self {
        Self {
            operation,
            operand,
            operand_unit: None,
        }
    }

    pub fn in_unit(mut self, unit: TimeUnit) -> Self {
        self.operand_unit = Some(unit);
        self
    }
}

/// Combine a reference value with an operand, clamped into the interval.
///
/// Division by zero and non-finite results are rejected with `None`.
pub fn apply_operation(reference: f64, request: &OperationRequest, config: &Config) -> Option<f64> {
    let operand = match (request.operation.takes_unit(), request.operand_unit, config.time_unit()) {
        (true, Some(from), Some(to)) => units::convert(request.operand, from, to),
        _ => request.operand,
    };

    let result = match request.operation {
        Operation::Add => reference + operand,
        Operation::Subtract => reference - operand,
        Operation::Multiply => reference * operand,
        Operation::Divide if operand == 0.0 => {
            warn!(reference, "Division by zero rejected");
            return None;
        }
        Operation::Divide => reference / operand,
    };

    if !result.is_finite() {
        warn!(reference, operand, "Non-finite operation result rejected");
        return None;
    }
    Some(normalize_value(config.intervals.clamp(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKey;

    #[test]
    fn test_duration_from_selection() {
        let selected: ValueSet = [25.0, 10.0].into_iter().map(ValueKey::new).collect();
        let span = DurationSpan::from_selection(&selected).unwrap();
        assert_eq!(span.start, 10.0);
        assert_eq!(span.end, 25.0);
        assert_eq!(span.duration, 15.0);
        assert_eq!(units::convert(span.duration, TimeUnit::Minute, TimeUnit::Second), 900.0);
    }

    #[test]
    fn test_duration_needs_exactly_two() {
        assert!(DurationSpan::from_values(&[]).is_none());
        assert!(DurationSpan::from_values(&[3.0]).is_none());
        assert!(DurationSpan::from_values(&[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_conversions_filter_extremes() {
        let span = DurationSpan::from_values(&[0.0, 15.0]).unwrap();
        let conversions = span.conversions(TimeUnit::Minute);
        assert!(conversions.contains(&(TimeUnit::Second, 900.0)));
        assert!(conversions.contains(&(TimeUnit::Hour, 0.25)));

        let span = DurationSpan::from_values(&[0.0, 30.0]).unwrap();
        let conversions = span.conversions(TimeUnit::Day);
        assert!(conversions.iter().all(|(unit, _)| *unit != TimeUnit::Second));
    }

    #[test]
    fn test_proportion_is_capped() {
        let config = Config::chronix_default();
        let span = DurationSpan::from_values(&[10.0, 25.0]).unwrap();
        assert_eq!(span.proportion(&config), 50.0);
        let span = DurationSpan::from_values(&[0.0, 45.0]).unwrap();
        assert_eq!(span.proportion(&config), 100.0);
    }

    #[test]
    fn test_add_converts_operand_unit() {
        let config = Config::chronix_default();
        let request = OperationRequest::new(Operation::Add, 120.0).in_unit(TimeUnit::Second);
        assert_eq!(apply_operation(10.0, &request, &config), Some(12.0));
    }

    #[test]
    fn test_results_are_clamped() {
        let config = Config::chronix_default();
        let request = OperationRequest::new(Operation::Multiply, 10.0);
        assert_eq!(apply_operation(10.0, &request, &config), Some(60.0));
        let request = OperationRequest::new(Operation::Subtract, 30.0);
        assert_eq!(apply_operation(10.0, &request, &config), Some(0.0));
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        let config = Config::chronix_default();
        let request = OperationRequest::new(Operation::Divide, 0.0);
        assert_eq!(apply_operation(10.0, &request, &config), None);
        let request = OperationRequest::new(Operation::Divide, 4.0);
        assert_eq!(apply_operation(10.0, &request, &config), Some(2.5));
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!("divide".parse::<Operation>(), Ok(Operation::Divide));
        assert!("modulo".parse::<Operation>().is_err());
    }
}

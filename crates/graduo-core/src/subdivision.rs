//! Secondary graduation planning
//!
//! The count of secondary graduations between two primaries follows the
//! unit's natural partitioning (quarters of an hour, not tenths) and thins
//! out as the number of visible primaries grows.

use crate::{Config, DomainKind, Notation, TimeUnit};

/// Above this many primaries the line only gets halves
pub const MAX_DENSE_PRIMARIES: usize = 20;

/// At or below this many primaries a natural subdivision is preferred
pub const SPARSE_PRIMARIES: usize = 5;

/// How each primary interval is split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubdivisionPlan {
    /// Number of equal parts per primary interval
    pub count: u32,
    /// Domain distance between two secondary graduations
    pub step: f64,
}

impl SubdivisionPlan {
    fn new(count: u32, primary_step: f64) -> Self {
        let count = count.max(1);
        Self {
            count,
            step: primary_step / f64::from(count),
        }
    }
}

/// Plan subdivisions for any configuration
pub fn plan(config: &Config) -> SubdivisionPlan {
    match config.domain {
        DomainKind::Time { unit, .. } => plan_time(unit, config.step, config.range()),
        DomainKind::Numeric { notation } => plan_numeric(notation, config.denominator, config.step),
    }
}

/// Adaptive plan for time lines
pub fn plan_time(unit: TimeUnit, step: f64, range: f64) -> SubdivisionPlan {
    if !(step > 0.0) || !(range >= 0.0) {
        return SubdivisionPlan::new(1, step);
    }

    let primaries = (range / step + 1e-9).floor() as usize + 1;
    let count = if primaries > MAX_DENSE_PRIMARIES {
        2
    } else if step.fract().abs() > 1e-9 {
        (1.0 / step).ceil() as u32
    } else if primaries <= SPARSE_PRIMARIES {
        natural_count(unit, step)
    } else {
        standard_count(unit, step)
    };

    SubdivisionPlan::new(count, step)
}

/// Fixed plan for numeric lines
pub fn plan_numeric(notation: Notation, denominator: u32, step: f64) -> SubdivisionPlan {
    let count = match notation {
        Notation::Fraction | Notation::MixedNumber => denominator,
        Notation::Decimal => 10,
    };
    SubdivisionPlan::new(count, step)
}

/// Largest candidate whose sub-step lands on the unit's grain
fn natural_count(unit: TimeUnit, step: f64) -> u32 {
    let grain = unit.natural_grain();
    unit.natural_subdivisions()
        .iter()
        .rev()
        .copied()
        .find(|&candidate| {
            let grains = step / f64::from(candidate) / grain;
            grains >= 1.0 - 1e-9 && (grains - grains.round()).abs() < 1e-9
        })
        .unwrap_or_else(|| unit.fallback_subdivisions())
}

/// Density table for six to twenty primaries
fn standard_count(unit: TimeUnit, step: f64) -> u32 {
    match unit {
        TimeUnit::Second | TimeUnit::Minute => {
            if step >= 30.0 {
                6
            } else if step >= 15.0 {
                3
            } else if step >= 5.0 {
                5
            } else {
                2
            }
        }
        TimeUnit::Hour => {
            if step >= 6.0 {
                6
            } else if step >= 1.0 {
                4
            } else {
                2
            }
        }
        TimeUnit::Day => {
            if step >= 7.0 {
                7
            } else if step >= 1.0 {
                4
            } else {
                2
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_hour_default() {
        let plan = plan(&Config::chronix_default());
        assert_eq!(plan.count, 5);
        assert_eq!(plan.step, 1.0);
    }

    #[test]
    fn test_dense_lines_only_get_halves() {
        let plan = plan_time(TimeUnit::Minute, 1.0, 60.0);
        assert_eq!(plan.count, 2);
        let plan = plan_time(TimeUnit::Hour, 0.25, 24.0);
        assert_eq!(plan.count, 2);
    }

    #[test]
    fn test_fractional_step_override() {
        let plan = plan_time(TimeUnit::Hour, 0.5, 3.0);
        assert_eq!(plan.count, 2);
        assert_eq!(plan.step, 0.25);
        let plan = plan_time(TimeUnit::Hour, 0.25, 2.0);
        assert_eq!(plan.count, 4);
    }

    #[test]
    fn test_natural_subdivision_for_sparse_lines() {
        // 4 primaries of one hour: quarter hours
        assert_eq!(plan_time(TimeUnit::Hour, 1.0, 3.0).count, 4);
        // 3 primaries of 30 minutes: whole minutes
        assert_eq!(plan_time(TimeUnit::Minute, 30.0, 60.0).count, 30);
        // 5 primaries of 7 days: whole days
        assert_eq!(plan_time(TimeUnit::Day, 7.0, 28.0).count, 28);
        // one-minute steps cannot be split into whole minutes
        assert_eq!(plan_time(TimeUnit::Minute, 1.0, 4.0).count, 5);
    }

    #[test]
    fn test_standard_table() {
        assert_eq!(plan_time(TimeUnit::Minute, 15.0, 120.0).count, 3);
        assert_eq!(plan_time(TimeUnit::Hour, 6.0, 60.0).count, 6);
        assert_eq!(plan_time(TimeUnit::Day, 7.0, 70.0).count, 7);
        assert_eq!(plan_time(TimeUnit::Day, 1.0, 10.0).count, 4);
    }

    #[test]
    fn test_numeric_plan() {
        assert_eq!(plan_numeric(Notation::Decimal, 4, 1.0).count, 10);
        let plan = plan_numeric(Notation::Fraction, 4, 1.0);
        assert_eq!(plan.count, 4);
        assert_eq!(plan.step, 0.25);
    }
}

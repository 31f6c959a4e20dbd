//! Snapping raw positions onto graduations
//!
//! Graduations form a grid anchored at `intervals.start`: primaries every
//! `step`, secondaries every `step / count` in between. The interval end
//! always closes the line with a primary, on the grid or not.

use crate::{Config, SubdivisionPlan, normalize_value, subdivision};

/// Distance under which a value counts as sitting on a primary graduation
pub const PRIMARY_EPSILON: f64 = 0.001;

/// Largest absolute distance at which a raw value snaps to a primary bound
pub const SNAP_TOLERANCE: f64 = 0.05;

/// Bound-snapping tolerance for a plan, kept under half a secondary spacing
pub fn snap_tolerance(plan: &SubdivisionPlan) -> f64 {
    SNAP_TOLERANCE.min(plan.step / 4.0)
}

/// Whether `value` is a primary graduation of `config`
pub fn is_primary(value: f64, config: &Config) -> bool {
    if config.step <= 0.0 {
        return false;
    }
    if (value - config.intervals.end).abs() < PRIMARY_EPSILON {
        return true;
    }
    let offset = (value - config.intervals.start) / config.step;
    (offset - offset.round()).abs() * config.step < PRIMARY_EPSILON
}

/// Every primary graduation in the visible range, ascending, ending at `intervals.end`
pub fn primary_values(config: &Config) -> Vec<f64> {
    let start = config.intervals.start;
    let end = config.intervals.end;
    let mut values: Vec<f64> = (0..config.primary_count())
        .map(|k| normalize_value(start + k as f64 * config.step))
        .filter(|&v| v <= end + PRIMARY_EPSILON)
        .collect();

    if values.last().is_some_and(|&last| last < end - PRIMARY_EPSILON) {
        values.push(normalize_value(end));
    }
    values
}

/// Every secondary graduation in the visible range, ascending
pub fn secondary_values(config: &Config, plan: &SubdivisionPlan) -> Vec<f64> {
    let end = config.intervals.end;
    let mut values = Vec::new();
    for primary in primary_values(config) {
        for j in 1..plan.count {
            let value = normalize_value(primary + f64::from(j) * plan.step);
            if value < end - PRIMARY_EPSILON {
                values.push(value);
            }
        }
    }
    values
}

/// Whether a raw value is close enough to the line to count as a click on it
pub fn in_click_range(raw: f64, config: &Config) -> bool {
    let tolerance = snap_tolerance(&subdivision::plan(config));
    raw >= config.intervals.start - tolerance && raw <= config.intervals.end + tolerance
}

/// Nearest graduation to `raw`, always inside `intervals`.
///
/// Ties between two secondaries round up. An off-grid end wins over the
/// grid when it is strictly closer.
pub fn snap(raw: f64, config: &Config) -> f64 {
    let plan = subdivision::plan(config);
    let interval = config.intervals;
    if config.step <= 0.0 || plan.step <= 0.0 {
        return interval.clamp(raw);
    }

    let on_grid = snap_to_grid(raw, config, &plan);
    let end = interval.end;
    if (raw - end).abs() < (raw - on_grid).abs() {
        return normalize_value(end);
    }
    on_grid
}

fn snap_to_grid(raw: f64, config: &Config, plan: &SubdivisionPlan) -> f64 {
    let start = config.intervals.start;
    let offset = (raw - start) / config.step;
    let nearest_primary = start + offset.round() * config.step;
    if (raw - nearest_primary).abs() < PRIMARY_EPSILON {
        return fit_to_grid(nearest_primary, plan.step, config);
    }

    let lower = start + offset.floor() * config.step;
    let upper = lower + config.step;
    let tolerance = snap_tolerance(plan);
    if raw - lower < tolerance {
        return fit_to_grid(lower, plan.step, config);
    }
    if upper - raw < tolerance {
        return fit_to_grid(upper, plan.step, config);
    }

    let k = ((raw - lower) / plan.step + 0.5).floor();
    fit_to_grid(lower + k * plan.step, plan.step, config)
}

/// Pull a grid value back inside the interval by whole secondary steps
fn fit_to_grid(value: f64, sub_step: f64, config: &Config) -> f64 {
    let interval = config.intervals;
    let mut value = value;
    if value > interval.end + PRIMARY_EPSILON {
        value -= ((value - interval.end) / sub_step - 1e-9).ceil() * sub_step;
    }
    if value < interval.start - PRIMARY_EPSILON {
        value += ((interval.start - value) / sub_step - 1e-9).ceil() * sub_step;
    }
    interval.clamp(normalize_value(value))
}

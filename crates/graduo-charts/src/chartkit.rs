//! # chartkit
//!
//! Core line primitives: the position↔value scale, pointer mapping from CSS
//! pixels to surface pixels, and tick layout.

use crate::LineDimensions;
use graduo_core::{ClickRegion, Config, SubdivisionPlan, primary_values, snap};

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to surface positions)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to surface x
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (surface x to domain)
    fn invert(&self, x: f64) -> f64;
}

// ============================================================================
// GRADUATION SCALE
// ============================================================================

/// Affine scale from the visible interval onto the drawable width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraduationScale {
    domain: (f64, f64),
    left: f64,
    draw_width: f64,
}

impl GraduationScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            left: 50.0,
            draw_width: 700.0,
        }
    }

    /// Scale for a configuration drawn on a surface of the given dimensions
    pub fn for_line(config: &Config, dims: &LineDimensions) -> Self {
        Self::new()
            .domain(config.intervals.start, config.intervals.end)
            .margin(dims.margin.left)
            .draw_width(dims.draw_width())
    }

    pub fn domain(mut self, start: f64, end: f64) -> Self {
        self.domain = (start, end);
        self
    }

    pub fn margin(mut self, left: f64) -> Self {
        self.left = left;
        self
    }

    pub fn draw_width(mut self, width: f64) -> Self {
        self.draw_width = width;
        self
    }

    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Surface pixels per domain unit; zero for an empty interval
    pub fn pixels_per_unit(&self) -> f64 {
        let (start, end) = self.domain;
        let range = end - start;
        if range.abs() < f64::EPSILON {
            return 0.0;
        }
        self.draw_width / range
    }

    /// Whole-pixel x for crisp tick strokes
    pub fn pixel_x(&self, value: f64) -> f64 {
        self.scale(value).floor()
    }
}

impl Default for GraduationScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for GraduationScale {
    fn scale(&self, value: f64) -> f64 {
        self.left + (value - self.domain.0) * self.pixels_per_unit()
    }

    fn invert(&self, x: f64) -> f64 {
        let ppu = self.pixels_per_unit();
        if ppu == 0.0 {
            return self.domain.0;
        }
        (x - self.left) / ppu + self.domain.0
    }
}

/// `x` for `value` on a line `draw_width` wide behind the standard margin
pub fn x_from_value(value: f64, draw_width: f64, start: f64, end: f64) -> f64 {
    GraduationScale::new()
        .domain(start, end)
        .draw_width(draw_width)
        .scale(value)
}

/// Inverse of [`x_from_value`]
pub fn value_from_x(x: f64, draw_width: f64, start: f64, end: f64) -> f64 {
    GraduationScale::new()
        .domain(start, end)
        .draw_width(draw_width)
        .invert(x)
}

// ============================================================================
// POINTER MAPPING
// ============================================================================

/// Rendered box of a surface next to its intrinsic pixel size.
///
/// A canvas is often scaled by CSS, so client coordinates must be rescaled
/// before they mean anything on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    pub left: f64,
    pub top: f64,
    pub css_width: f64,
    pub css_height: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceMetrics {
    /// Client coordinates to surface coordinates
    pub fn to_surface(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let ratio_x = if self.css_width > 0.0 {
            self.width / self.css_width
        } else {
            1.0
        };
        let ratio_y = if self.css_height > 0.0 {
            self.height / self.css_height
        } else {
            1.0
        };
        ((client_x - self.left) * ratio_x, (client_y - self.top) * ratio_y)
    }

    /// Which half of the surface a surface-space y falls in
    pub fn region(&self, surface_y: f64) -> ClickRegion {
        if surface_y < self.height / 2.0 {
            ClickRegion::Above
        } else {
            ClickRegion::Below
        }
    }
}

// ============================================================================
// TICK LAYOUT
// ============================================================================

/// Visual weight of a graduation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Primary,
    /// Halfway between two primaries
    Half,
    /// On a quarter of the primary interval
    Quarter,
    Minor,
}

impl TickKind {
    /// Tick extent either side of the baseline
    pub fn half_height(&self) -> f64 {
        match self {
            Self::Primary => 15.0,
            Self::Half => 12.0,
            Self::Quarter => 10.0,
            Self::Minor => 8.0,
        }
    }

    pub fn line_width(&self) -> f64 {
        match self {
            Self::Primary => 1.0,
            Self::Half => 0.8,
            Self::Quarter => 0.6,
            Self::Minor => 0.5,
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Primary)
    }

    /// Weight of the `index`-th secondary out of `count` parts
    pub fn secondary(index: u32, count: u32) -> Self {
        if count % 2 == 0 && index * 2 == count {
            Self::Half
        } else if count % 4 == 0 && (index * 4) % count == 0 {
            Self::Quarter
        } else {
            Self::Minor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub x: f64,
    pub kind: TickKind,
}

/// Every tick of a line in ascending order, primaries first within a bracket
pub fn tick_layout(config: &Config, plan: &SubdivisionPlan, scale: &GraduationScale) -> Vec<Tick> {
    if scale.pixels_per_unit() <= 0.0 || plan.step <= 0.0 {
        return Vec::new();
    }

    let end = config.intervals.end;
    let mut ticks = Vec::new();
    for primary in primary_values(config) {
        ticks.push(Tick {
            value: primary,
            x: scale.pixel_x(primary),
            kind: TickKind::Primary,
        });
        for index in 1..plan.count {
            let value = graduo_core::normalize_value(primary + f64::from(index) * plan.step);
            if value >= end - snap::PRIMARY_EPSILON {
                break;
            }
            ticks.push(Tick {
                value,
                x: scale.pixel_x(value),
                kind: TickKind::secondary(index, plan.count),
            });
        }
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use graduo_core::{Bound, subdivision};

    #[test]
    fn test_graduation_scale() {
        let scale = GraduationScale::new().domain(0.0, 60.0).draw_width(600.0);
        assert_eq!(scale.scale(0.0), 50.0);
        assert_eq!(scale.scale(30.0), 350.0);
        assert_eq!(scale.invert(350.0), 30.0);
    }

    #[test]
    fn test_free_functions_match_scale() {
        assert_eq!(x_from_value(10.0, 700.0, 0.0, 10.0), 750.0);
        assert_eq!(value_from_x(750.0, 700.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_empty_interval_does_not_divide_by_zero() {
        let scale = GraduationScale::new().domain(5.0, 5.0);
        assert_eq!(scale.pixels_per_unit(), 0.0);
        assert_eq!(scale.invert(400.0), 5.0);
    }

    #[test]
    fn test_css_scaled_surface() {
        let metrics = SurfaceMetrics {
            left: 10.0,
            top: 20.0,
            css_width: 400.0,
            css_height: 100.0,
            width: 800.0,
            height: 200.0,
        };
        assert_eq!(metrics.to_surface(210.0, 45.0), (400.0, 50.0));
        assert_eq!(metrics.region(50.0), ClickRegion::Above);
        assert_eq!(metrics.region(150.0), ClickRegion::Below);
    }

    #[test]
    fn test_secondary_weights() {
        assert_eq!(TickKind::secondary(2, 4), TickKind::Half);
        assert_eq!(TickKind::secondary(1, 4), TickKind::Minor);
        assert_eq!(TickKind::secondary(3, 12), TickKind::Quarter);
        assert_eq!(TickKind::secondary(6, 12), TickKind::Half);
        assert_eq!(TickKind::secondary(2, 5), TickKind::Minor);
    }

    #[test]
    fn test_tick_layout_for_minute_line() {
        let config = Config::chronix_default();
        let plan = subdivision::plan(&config);
        let scale = GraduationScale::for_line(&config, &LineDimensions::default());
        let ticks = tick_layout(&config, &plan, &scale);

        assert_eq!(ticks.len(), 13 + 48);
        assert_eq!(ticks.iter().filter(|t| t.kind.is_primary()).count(), 13);
        assert_eq!(ticks.first().map(|t| t.x), Some(50.0));
        assert_eq!(ticks.last().map(|t| t.value), Some(60.0));
        assert!(ticks.windows(2).all(|w| w[0].value < w[1].value));
    }

    #[test]
    fn test_tick_layout_closes_off_grid_end() {
        let config = Config::chronix_default()
            .with_bound(Bound::End, 58.0)
            .unwrap();
        let plan = subdivision::plan(&config);
        let scale = GraduationScale::for_line(&config, &LineDimensions::default());
        let ticks = tick_layout(&config, &plan, &scale);

        let last = ticks.last().unwrap();
        assert_eq!(last.value, 58.0);
        assert_eq!(last.kind, TickKind::Primary);
        assert_eq!(last.x, scale.pixel_x(58.0));
        assert_eq!(ticks.iter().filter(|t| t.kind.is_primary()).count(), 13);
        assert!(ticks.windows(2).all(|w| w[0].value < w[1].value));
    }
}

//! # graduo-charts
//!
//! Canvas rendering for graduated number lines, built with Leptos.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Position↔value scales
//! - Drawing surfaces (HTML canvas, in-memory recorder)
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, pointer mapping, tick layout
//! - `surface` - Drawing surface contract and a recording implementation
//! - `renderer` - Draws a line, its ticks, labels, selections and markers
//! - `canvas` - `CanvasRenderingContext2d` backend
//! - `repaint` - Dirty flag + next-frame repaint
//! - `graduated_line` - The `GraduatedLine` component

pub mod canvas;
pub mod chartkit;
pub mod graduated_line;
pub mod renderer;
pub mod repaint;
pub mod surface;

pub use canvas::*;
pub use chartkit::*;
pub use graduated_line::*;
pub use renderer::*;
pub use repaint::*;
pub use surface::*;

// Re-export colors from graduo-core for convenience
pub use graduo_core::colors;

/// Line margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl LineMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn horizontal(margin: f64) -> Self {
        Self::new(0.0, margin, 0.0, margin)
    }

    /// 50 units either side of the line
    pub const fn standard() -> Self {
        Self::horizontal(50.0)
    }
}

impl Default for LineMargin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Intrinsic surface size with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: LineMargin,
}

impl LineDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: LineMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: LineMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Width available to the line itself
    pub fn draw_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Vertical position of the baseline
    pub fn baseline_y(&self) -> f64 {
        self.height / 2.0
    }
}

impl Default for LineDimensions {
    fn default() -> Self {
        Self::new(800.0, 200.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let dims = LineDimensions::default();
        assert_eq!(dims.draw_width(), 700.0);
        assert_eq!(dims.baseline_y(), 100.0);
    }

    #[test]
    fn test_narrow_surface_never_goes_negative() {
        let dims = LineDimensions::new(60.0, 40.0);
        assert_eq!(dims.draw_width(), 0.0);
    }
}

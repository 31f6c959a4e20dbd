//! Graduated line renderer
//!
//! Draws onto any [`DrawSurface`]. The renderer trusts its input: a
//! configuration that yields no pixel spacing just produces a bare baseline.

use crate::{
    GraduationScale, LineDimensions, TextAlign, TextBaseline, Tick, colors,
    surface::DrawSurface, tick_layout,
};
use graduo_core::{Config, InteractionMode, InteractionState, Label, SubdivisionPlan, ValueKey};
use std::collections::BTreeSet;

pub const LABEL_FONT: &str = "14px Arial";

/// Distance from the baseline up to the first label line
const LABEL_OFFSET: f64 = 50.0;
const LINE_SPACING: f64 = 20.0;

const ARROW_FAR: f64 = 35.0;
const ARROW_NEAR: f64 = 20.0;
const ARROW_HEAD: f64 = 5.0;
/// Secondary arrows sit closer to the shorter tick
const SECONDARY_ARROW_SHIFT: f64 = 8.0;

const SELECTION_RADIUS: f64 = 4.0;
const SELECTION_HALO: f64 = 8.0;

/// Draw the whole line for one configuration and state
pub fn render<S>(surface: &mut S, config: &Config, state: &InteractionState, plan: &SubdivisionPlan)
where
    S: DrawSurface + ?Sized,
{
    let dims = LineDimensions::new(surface.width(), surface.height());
    let baseline = dims.baseline_y();

    surface.set_fill_color(colors::PAPER);
    surface.fill_rect(0.0, 0.0, dims.width, dims.height);
    surface.set_fill_color(colors::INK);
    surface.set_stroke_color(colors::INK);
    surface.set_font(LABEL_FONT);
    surface.set_text_align(TextAlign::Center);
    surface.set_text_baseline(TextBaseline::Top);

    surface.set_line_width(2.0);
    surface.segment(
        (dims.margin.left, baseline),
        (dims.margin.left + dims.draw_width(), baseline),
    );

    let scale = GraduationScale::for_line(config, &dims);
    if scale.pixels_per_unit() <= 0.0 {
        return;
    }

    let domain = config.strategy();
    let ticks = tick_layout(config, plan, &scale);
    for tick in &ticks {
        draw_tick(surface, tick, baseline);
        let primary = tick.kind.is_primary();
        let selected = state.is_selected(tick.value);

        if (primary && !state.is_hidden(tick.value)) || selected {
            draw_label(surface, &domain.label(tick.value), tick.x, baseline - LABEL_OFFSET);
            let anchor = if primary { baseline } else { baseline + SECONDARY_ARROW_SHIFT };
            draw_top_arrow(surface, tick.x, anchor);
        }
        if selected && state.mode == InteractionMode::Selection {
            draw_selection(surface, tick.x, baseline);
        }
        if state.has_marker(tick.value) {
            let anchor = if primary { baseline } else { baseline - SECONDARY_ARROW_SHIFT };
            draw_marker(surface, tick.x, anchor);
        }
    }

    // Values placed by operations may fall between graduations.
    let on_grid: BTreeSet<ValueKey> = ticks.iter().map(|t| ValueKey::new(t.value)).collect();
    let interval = config.intervals;
    for key in state.selected.difference(&on_grid) {
        let value = key.value();
        if !interval.contains(value) {
            continue;
        }
        let x = scale.pixel_x(value);
        draw_label(surface, &domain.label(value), x, baseline - LABEL_OFFSET);
        draw_top_arrow(surface, x, baseline);
        if state.mode == InteractionMode::Selection {
            draw_selection(surface, x, baseline);
        }
    }
    for key in state.markers.difference(&on_grid) {
        let value = key.value();
        if interval.contains(value) {
            draw_marker(surface, scale.pixel_x(value), baseline);
        }
    }
}

fn draw_tick<S: DrawSurface + ?Sized>(surface: &mut S, tick: &Tick, baseline: f64) {
    let half = tick.kind.half_height();
    surface.set_line_width(tick.kind.line_width());
    surface.segment((tick.x, baseline - half), (tick.x, baseline + half));
}

/// Label with its top edge at `y`
pub fn draw_label<S: DrawSurface + ?Sized>(surface: &mut S, label: &Label, x: f64, y: f64) {
    match label {
        Label::Lines(lines) => {
            for (i, line) in lines.iter().enumerate() {
                surface.fill_text(line, x, y + i as f64 * LINE_SPACING);
            }
        }
        Label::Fraction { numerator, denominator } => {
            draw_fraction(surface, x, y, &numerator.to_string(), &denominator.to_string());
        }
        Label::Mixed { whole, numerator, denominator } => {
            surface.fill_text(&whole.to_string(), x - 13.0, y - 13.0);
            surface.fill_text("+", x, y - 13.0);
            draw_fraction(surface, x + 15.0, y, &numerator.to_string(), &denominator.to_string());
        }
    }
}

/// Numerator over a bar over denominator
fn draw_fraction<S: DrawSurface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    numerator: &str,
    denominator: &str,
) {
    let bar = 2.0 * surface.measure_text(numerator).max(surface.measure_text(denominator));

    surface.fill_text(numerator, x, y - 20.0);
    surface.set_line_width(1.0);
    surface.segment((x - bar / 2.0, y - 7.0), (x + bar / 2.0, y - 7.0));
    surface.fill_text(denominator, x, y - 5.0);
}

/// Downward arrow pointing at a revealed value
fn draw_top_arrow<S: DrawSurface + ?Sized>(surface: &mut S, x: f64, anchor: f64) {
    let tip = anchor - ARROW_NEAR;
    surface.begin_path();
    surface.move_to(x, anchor - ARROW_FAR);
    surface.line_to(x, tip);
    surface.line_to(x - ARROW_HEAD, tip - ARROW_HEAD);
    surface.move_to(x, tip);
    surface.line_to(x + ARROW_HEAD, tip - ARROW_HEAD);
    surface.set_line_width(1.0);
    surface.stroke();
}

/// Red upward arrow under the line
fn draw_marker<S: DrawSurface + ?Sized>(surface: &mut S, x: f64, anchor: f64) {
    let tip = anchor + ARROW_NEAR;
    surface.set_stroke_color(colors::MARKER);
    surface.begin_path();
    surface.move_to(x, anchor + ARROW_FAR);
    surface.line_to(x, tip);
    surface.line_to(x - ARROW_HEAD, tip + ARROW_HEAD);
    surface.move_to(x, tip);
    surface.line_to(x + ARROW_HEAD, tip + ARROW_HEAD);
    surface.set_line_width(1.0);
    surface.stroke();
    surface.set_stroke_color(colors::INK);
}

/// Filled dot on the baseline for a selected value
fn draw_selection<S: DrawSurface + ?Sized>(surface: &mut S, x: f64, baseline: f64) {
    surface.set_fill_color(&colors::marker_alpha(0.25));
    surface.begin_path();
    surface.circle(x, baseline, SELECTION_HALO);
    surface.fill();

    surface.set_fill_color(colors::SELECTION);
    surface.begin_path();
    surface.circle(x, baseline, SELECTION_RADIUS);
    surface.fill();
    surface.set_fill_color(colors::INK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCommand, RecordingSurface};
    use graduo_core::{Bound, ClickRegion, Interval, Notation, subdivision};

    fn draw(config: &Config, state: &InteractionState) -> RecordingSurface {
        let mut surface = RecordingSurface::new(800.0, 200.0);
        render(&mut surface, config, state, &subdivision::plan(config));
        surface
    }

    fn clicked(config: &Config, clicks: &[(f64, ClickRegion)]) -> InteractionState {
        let mut state = InteractionState::new();
        for &(value, region) in clicks {
            let change = state.click(config, value, region);
            state.apply(change);
        }
        state
    }

    #[test]
    fn test_primary_labels_drawn_by_default() {
        let config = Config::chronix_default();
        let surface = draw(&config, &InteractionState::new());
        let texts = surface.texts();
        assert_eq!(texts.len(), 13);
        assert_eq!(texts.first(), Some(&"0min"));
        assert_eq!(texts.last(), Some(&"1h"));
    }

    #[test]
    fn test_off_grid_end_is_labelled() {
        let config = Config::chronix_default()
            .with_bound(Bound::End, 58.0)
            .unwrap();
        let surface = draw(&config, &InteractionState::new());
        let x = (50.0 + 58.0 * 700.0 / 58.0_f64).floor();
        assert_eq!(surface.texts_at(x), vec!["58min"]);
        assert_eq!(surface.texts().last(), Some(&"58min"));
        assert_eq!(surface.texts().len(), 13);
    }

    #[test]
    fn test_hidden_off_grid_end_has_no_label() {
        let config = Config::chronix_default()
            .with_bound(Bound::End, 58.0)
            .unwrap();
        let state = clicked(&config, &[(58.0, ClickRegion::Above)]);
        let surface = draw(&config, &state);
        assert!(!surface.texts().contains(&"58min"));
    }

    #[test]
    fn test_hidden_primary_has_no_label() {
        let config = Config::chronix_default();
        let state = clicked(&config, &[(15.0, ClickRegion::Above)]);
        let surface = draw(&config, &state);
        assert!(!surface.texts().contains(&"15min"));
        assert_eq!(surface.texts().len(), 12);
    }

    #[test]
    fn test_selected_secondary_is_labelled() {
        let config = Config::chronix_default();
        let state = clicked(&config, &[(23.0, ClickRegion::Above)]);
        let surface = draw(&config, &state);
        assert!(surface.texts().contains(&"23min"));
        assert!(surface.circles().is_empty());
    }

    #[test]
    fn test_selection_mode_highlights_with_dot() {
        let config = Config::chronix_default();
        let mut state = clicked(&config, &[(23.0, ClickRegion::Above)]);
        state.mode = InteractionMode::Selection;
        let surface = draw(&config, &state);
        let x = (50.0 + 23.0 * 700.0 / 60.0_f64).floor();
        assert!(surface.circles().contains(&(x, 100.0, SELECTION_RADIUS)));
    }

    #[test]
    fn test_marker_is_red() {
        let config = Config::chronix_default();
        let state = clicked(&config, &[(40.0, ClickRegion::Below)]);
        let surface = draw(&config, &state);
        assert_eq!(
            surface.count(&DrawCommand::StrokeColor(colors::MARKER.to_string())),
            1
        );
    }

    #[test]
    fn test_fraction_glyph() {
        let mut config = Config::natix_default().with_notation(Notation::Fraction);
        config.intervals = Interval::new(0.0, 2.0);
        let state = clicked(&config, &[(0.75, ClickRegion::Above)]);
        let surface = draw(&config, &state);
        let x = (50.0 + 0.75 * 350.0_f64).floor();
        assert_eq!(surface.texts_at(x), vec!["3", "4"]);
    }

    #[test]
    fn test_off_grid_selection_is_still_drawn() {
        let config = Config::chronix_default();
        let mut state = InteractionState::new();
        let change = state.with_selected(12.5);
        state.apply(change);
        let surface = draw(&config, &state);
        assert!(surface.texts().contains(&"12.5min"));
    }

    #[test]
    fn test_degenerate_interval_draws_baseline_only() {
        let mut config = Config::natix_default();
        config.intervals = Interval::new(3.0, 3.0);
        let surface = draw(&config, &InteractionState::new());
        assert!(surface.texts().is_empty());
        assert_eq!(surface.count(&DrawCommand::Stroke), 1);
    }
}

//! Interactive graduated line on a `<canvas>`
//!
//! The component draws; it does not own interaction state. Clicks are
//! mapped to a raw domain value and a region and handed to `on_click`.

use crate::{
    CanvasSurface, GraduationScale, LineDimensions, RepaintScheduler, Scale, SurfaceMetrics,
    render,
};
use graduo_core::{ClickRegion, Config, DomainKind, InteractionState, subdivision};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// A click on the line before snapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraduationClick {
    pub raw: f64,
    pub region: ClickRegion,
}

/// Screen-reader description of a line
pub fn describe_line(config: &Config) -> String {
    let unit = match config.domain {
        DomainKind::Time { unit, .. } => unit.label().to_lowercase(),
        DomainKind::Numeric { .. } => "unités".to_string(),
    };
    format!(
        "Ligne graduée de {} à {} {}. Cliquez au-dessus de la ligne pour afficher ou masquer une valeur. Cliquez en-dessous pour placer une flèche rouge.",
        config.intervals.start, config.intervals.end, unit
    )
}

#[component]
pub fn GraduatedLine(
    #[prop(into)] config: Signal<Config>,
    #[prop(into)] state: Signal<InteractionState>,
    #[prop(into)] on_click: Callback<GraduationClick>,
    #[prop(optional)] dimensions: Option<LineDimensions>,
) -> impl IntoView {
    let dims = dimensions.unwrap_or_default();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let scheduler = RepaintScheduler::new();

    Effect::new(move |_| {
        // Track everything the paint reads; the paint itself runs untracked.
        config.track();
        state.track();
        if canvas_ref.get().is_none() {
            return;
        }

        scheduler.request(move || {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let Some(mut surface) = CanvasSurface::from_canvas(&canvas) else {
                tracing::warn!("Canvas has no 2d context");
                return;
            };
            let config = config.get_untracked();
            let state = state.get_untracked();
            render(&mut surface, &config, &state, &subdivision::plan(&config));
        });
    });

    let handle_click = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        let metrics = SurfaceMetrics {
            left: rect.left(),
            top: rect.top(),
            css_width: rect.width(),
            css_height: rect.height(),
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        };

        let (x, y) = metrics.to_surface(f64::from(ev.client_x()), f64::from(ev.client_y()));
        let line = LineDimensions::new(metrics.width, metrics.height).with_margin(dims.margin);
        let raw = GraduationScale::for_line(&config.get_untracked(), &line).invert(x);
        on_click.run(GraduationClick {
            raw,
            region: metrics.region(y),
        });
    };

    view! {
        <div class="graduated-line" role="figure" aria-label="Ligne graduée interactive">
            <canvas
                node_ref=canvas_ref
                role="img"
                aria-description=move || describe_line(&config.get())
                width=dims.width.to_string()
                height=dims.height.to_string()
                style="width: 100%; cursor: pointer;"
                on:click=handle_click
            ></canvas>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graduo_core::TimeUnit;

    #[test]
    fn test_describe_time_line() {
        let config = Config::chronix_default().with_unit(TimeUnit::Hour);
        assert!(describe_line(&config).starts_with("Ligne graduée de 0 à 24 heures."));
    }

    #[test]
    fn test_describe_numeric_line() {
        let config = Config::natix_default();
        assert!(describe_line(&config).contains("de 0 à 10 unités"));
    }
}

//! Duration between two selected time values

use graduo_core::{
    Config, DurationSpan, InteractionMode, TimeFormat, TimeUnit, colors, convert, format_time,
    trim_number,
};
use graduo_state::use_widget_state;
use leptos::prelude::*;

/// Hint shown until exactly two values are selected
pub fn duration_hint(mode: InteractionMode) -> &'static str {
    match mode {
        InteractionMode::Selection => {
            "Sélectionnez exactement deux points sur la ligne graduée pour calculer une durée."
        }
        InteractionMode::Display => {
            "Passez en mode sélection pour pouvoir calculer des durées entre deux points."
        }
    }
}

#[component]
pub fn DurationPanel() -> impl IntoView {
    let widget = use_widget_state();
    let config = widget.config;

    view! {
        <div class="duration-panel">
            {move || {
                let span = widget.duration();
                let config = config.get();
                match (span, config.time_unit()) {
                    (Some(span), Some(unit)) => view! { <DurationDetails span=span config=config unit=unit /> }.into_any(),
                    _ => {
                        view! {
                            <p class="dp-empty" style=format!("color: {}", colors::MUTED)>
                                {duration_hint(widget.mode())}
                            </p>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn DurationDetails(span: DurationSpan, config: Config, unit: TimeUnit) -> impl IntoView {
    let domain = config.strategy();
    let show = |value: f64| domain.format(value);
    let best = span.best_unit(unit);
    let best_text = format_time(
        convert(span.duration, unit, best),
        best,
        TimeFormat::Mixed,
    );
    let conversions = span.conversions(unit);
    let proportion = span.proportion(&config);
    let half_range = trim_number(config.range() / 2.0);

    view! {
        <h2 class="panel-title">"Calcul de durée"</h2>

        <div class="dp-main" style=format!("border-color: {}", colors::ACCENT)>
            <span class="dp-label">"Durée:"</span>
            <span class="dp-value mono">{show(span.duration)}</span>
            <span class="dp-best" style=format!("color: {}", colors::MUTED)>
                {format!("soit {best_text}")}
            </span>
        </div>

        <div class="dp-points">
            <div class="dp-point">
                <span class="dp-label">"Point de départ:"</span>
                <span class="mono">{show(span.start)}</span>
            </div>
            <div class="dp-point">
                <span class="dp-label">"Point d'arrivée:"</span>
                <span class="mono">{show(span.end)}</span>
            </div>
        </div>

        {(conversions.len() > 1).then(|| {
            view! {
                <div class="dp-conversions">
                    <span class="dp-label">"Conversions:"</span>
                    {conversions
                        .into_iter()
                        .map(|(to, value)| {
                            view! {
                                <div class="dp-conversion">
                                    <span style=format!("color: {}", colors::MUTED)>{format!("{}:", to.label())}</span>
                                    " "
                                    <span class="mono">{format!("{value:.2}")}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })}

        <div class="dp-bar-wrap">
            <span class="dp-label">"Représentation visuelle:"</span>
            <div class="dp-bar">
                <div
                    class="dp-bar-fill"
                    style=format!("width: {proportion:.1}%; background: {}", colors::DURATION_BAR)
                ></div>
            </div>
            <div class="dp-bar-scale">
                <span>"0"</span>
                <span>{format!("{half_range} {}", unit.label().to_lowercase())}</span>
            </div>
        </div>
    }
}

//! Settings panels for time and numeric lines, plus the shared line actions

use graduo_core::{Bound, InteractionMode, Notation, StateManager, TimeFormat, TimeUnit, colors, trim_number};
use graduo_state::use_widget_state;
use leptos::ev::Event;
use leptos::prelude::*;

use crate::parse_input;

/// Denominators offered for fraction and mixed-number lines
pub const DENOMINATOR_CHOICES: [u32; 8] = [2, 3, 4, 5, 6, 8, 10, 12];

/// Option text for a step, singular when the step is exactly one unit
pub fn step_option_label(step: f64, unit: TimeUnit) -> String {
    let label = unit.label();
    let label = if step == 1.0 {
        label.strip_suffix('s').unwrap_or(label)
    } else {
        label
    };
    format!("{} {}", trim_number(step), label)
}

// ============================================================================
// TIME SETTINGS
// ============================================================================

#[component]
pub fn TimeControlPanel() -> impl IntoView {
    let widget = use_widget_state();
    let config = widget.config;

    let unit = move || config.with(|c| c.time_unit().unwrap_or_default());
    let format = move || {
        config.with(|c| match c.domain {
            graduo_core::DomainKind::Time { format, .. } => format,
            graduo_core::DomainKind::Numeric { .. } => TimeFormat::default(),
        })
    };

    let on_unit = move |ev: Event| {
        match event_target_value(&ev).parse::<TimeUnit>() {
            Ok(unit) => {
                widget.edit_config(|c| Some(c.with_unit(unit)));
            }
            Err(err) => tracing::warn!(%err, "Ignoring unit selection"),
        }
    };

    let on_step = move |ev: Event| {
        if let Some(step) = parse_input(&event_target_value(&ev)) {
            widget.try_edit_config(|c| c.with_step(step));
        }
    };

    let on_format = move |ev: Event| {
        if let Ok(format) = event_target_value(&ev).parse::<TimeFormat>() {
            widget.edit_config(|c| Some(c.with_format(format)));
        }
    };

    view! {
        <div class="control-panel">
            <h2 class="panel-title">"Paramètres temporels"</h2>

            <div class="cp-field">
                <label class="cp-label">"Unité de temps"</label>
                <select class="cp-input" on:change=on_unit>
                    {TimeUnit::ALL
                        .into_iter()
                        .map(|u| {
                            view! {
                                <option value=u.as_str() selected=move || unit() == u>
                                    {u.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <BoundInputs />

            <div class="cp-field">
                <label class="cp-label">"Pas"</label>
                <select class="cp-input" on:change=on_step>
                    {move || {
                        let unit = unit();
                        let current = config.with(|c| c.step);
                        unit.allowed_steps()
                            .iter()
                            .map(|&step| {
                                view! {
                                    <option value=step.to_string() selected=step == current>
                                        {step_option_label(step, unit)}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="cp-field">
                <label class="cp-label">"Format d'affichage"</label>
                <select class="cp-input" on:change=on_format>
                    {TimeFormat::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <option value=f.as_str() selected=move || format() == f>
                                    {f.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <LineActions />
        </div>
    }
}

// ============================================================================
// NUMERIC SETTINGS
// ============================================================================

#[component]
pub fn NumericControlPanel() -> impl IntoView {
    let widget = use_widget_state();
    let config = widget.config;

    let notation = move || {
        config.with(|c| match c.domain {
            graduo_core::DomainKind::Numeric { notation } => notation,
            graduo_core::DomainKind::Time { .. } => Notation::default(),
        })
    };
    let uses_denominator = move || notation() != Notation::Decimal;

    let on_notation = move |ev: Event| {
        if let Ok(notation) = event_target_value(&ev).parse::<Notation>() {
            widget.edit_config(|c| Some(c.with_notation(notation)));
        }
    };

    let on_denominator = move |ev: Event| {
        if let Ok(denominator) = event_target_value(&ev).parse::<u32>() {
            widget.try_edit_config(|c| c.with_denominator(denominator));
        }
    };

    let on_step = move |ev: Event| {
        if let Some(step) = parse_input(&event_target_value(&ev)) {
            widget.try_edit_config(|c| c.with_step(step));
        }
    };

    view! {
        <div class="control-panel">
            <h2 class="panel-title">"Paramètres"</h2>

            <BoundInputs />

            <div class="cp-field">
                <label class="cp-label">"Notation"</label>
                <select class="cp-input" on:change=on_notation>
                    {Notation::ALL
                        .into_iter()
                        .map(|n| {
                            view! {
                                <option value=n.as_str() selected=move || notation() == n>
                                    {n.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=uses_denominator>
                <div class="cp-field">
                    <label class="cp-label">"Dénominateur"</label>
                    <select class="cp-input" on:change=on_denominator>
                        {DENOMINATOR_CHOICES
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <option
                                        value=d.to_string()
                                        selected=move || config.with(|c| c.denominator) == d
                                    >
                                        {d}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </Show>

            <div class="cp-field">
                <label class="cp-label">"Pas"</label>
                <input
                    class="cp-input"
                    type="number"
                    min="0.1"
                    step="0.1"
                    prop:value=move || config.with(|c| trim_number(c.step))
                    on:change=on_step
                />
            </div>

            <LineActions />
        </div>
    }
}

// ============================================================================
// SHARED PIECES
// ============================================================================

/// Start and end inputs, clamped to the line's editable bounds
#[component]
fn BoundInputs() -> impl IntoView {
    let widget = use_widget_state();
    let config = widget.config;
    let bounds = move || config.with(|c| c.bounds());
    let is_time = move || config.with(|c| c.time_unit().is_some());

    let on_bound = move |bound: Bound, raw: String| {
        if let Some(value) = parse_input(&raw) {
            widget.edit_config(|c| c.with_bound(bound, value));
        }
    };

    view! {
        <div class="cp-bounds">
            <div class="cp-field">
                <label class="cp-label">
                    {move || if is_time() { "Début" } else { "Borne gauche" }}
                </label>
                <input
                    class="cp-input narrow"
                    type="number"
                    min=move || trim_number(bounds().0)
                    max=move || trim_number(bounds().1)
                    prop:value=move || config.with(|c| trim_number(c.intervals.start))
                    on:change=move |ev| on_bound(Bound::Start, event_target_value(&ev))
                />
            </div>
            <div class="cp-field">
                <label class="cp-label">
                    {move || if is_time() { "Fin" } else { "Borne droite" }}
                </label>
                <input
                    class="cp-input narrow"
                    type="number"
                    min=move || trim_number(bounds().0)
                    max=move || trim_number(bounds().1)
                    prop:value=move || config.with(|c| trim_number(c.intervals.end))
                    on:change=move |ev| on_bound(Bound::End, event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// Mode toggle (time lines only), bulk show/hide and reset
#[component]
pub fn LineActions() -> impl IntoView {
    let widget = use_widget_state();
    let dual_mode = move || widget.config.with(|c| c.strategy().capabilities().dual_mode);
    let selecting = move || widget.mode() == InteractionMode::Selection;

    let mode_hint = move || {
        if selecting() {
            "En mode sélection, cliquez sur n'importe quelle valeur pour la sélectionner ou la désélectionner, sans modifier son affichage."
        } else {
            "En mode affichage, cliquez sur une graduation principale pour l'afficher ou la masquer, et cliquez sur une sous-graduation pour la sélectionner."
        }
    };

    view! {
        <Show when=dual_mode>
            <div class="cp-section">
                <h3 class="cp-section-title">"Mode d'interaction"</h3>
                <button
                    class=move || if selecting() { "cp-button active" } else { "cp-button" }
                    style=move || {
                        if selecting() { format!("border-color: {}", colors::ACCENT) } else { String::new() }
                    }
                    title="Basculer entre les modes d'interaction"
                    on:click=move |_| {
                        widget.toggle_mode();
                    }
                >
                    {move || format!("{} (actif)", widget.mode().label())}
                </button>
                <p class="cp-hint" style=format!("color: {}", colors::MUTED)>{mode_hint}</p>
            </div>
        </Show>

        <div class="cp-section">
            <h3 class="cp-section-title">"Actions sur la ligne"</h3>
            <button class="cp-button" on:click=move |_| widget.toggle_primary_labels()>
                {move || if widget.all_primary_hidden() { "Afficher" } else { "Masquer" }}
                " les graduations principales"
            </button>
            <button class="cp-button" on:click=move |_| widget.reset()>
                "Réinitialiser l'affichage"
            </button>
        </div>
    }
}

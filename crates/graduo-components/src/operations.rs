//! Arithmetic on the reference value, with the result added back to the line

use graduo_core::{
    Operation, OperationRequest, StateManager, TimeUnit, apply_operation, colors, trim_number,
};
use graduo_state::use_widget_state;
use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;

use crate::parse_input;

pub fn operation_label(operation: Operation) -> String {
    let name = match operation {
        Operation::Add => "Addition",
        Operation::Subtract => "Soustraction",
        Operation::Multiply => "Multiplication",
        Operation::Divide => "Division",
    };
    format!("{name} ({})", operation.symbol())
}

#[component]
pub fn OperationsPanel() -> impl IntoView {
    let widget = use_widget_state();
    let config = widget.config;

    let operation = RwSignal::new(Operation::default());
    let operand = RwSignal::new(1.0_f64);
    let operand_unit = RwSignal::new(config.with_untracked(|c| c.time_unit().unwrap_or_default()));
    let result = RwSignal::new(None::<f64>);

    // The smallest selected value is the reference
    let reference = move || widget.selected_values().first().copied();
    let show = move |value: f64| config.with(|c| c.strategy().format(value));

    let compute = move |_: MouseEvent| {
        let Some(reference) = reference() else {
            return;
        };
        let request = OperationRequest::new(operation.get_untracked(), operand.get_untracked())
            .in_unit(operand_unit.get_untracked());
        let outcome = config.with_untracked(|c| apply_operation(reference, &request, c));
        tracing::debug!(reference, ?request, ?outcome, "Operation computed");
        result.set(outcome);
    };

    let add_result = move |_: MouseEvent| {
        if let Some(value) = result.get_untracked() {
            widget.add_selected(value);
        }
    };

    let on_operand = move |ev: Event| {
        operand.set(parse_input(&event_target_value(&ev)).unwrap_or(0.0));
    };

    let on_unit = move |ev: Event| {
        if let Ok(unit) = event_target_value(&ev).parse::<TimeUnit>() {
            operand_unit.set(unit);
        }
    };

    view! {
        <div class="operations-panel">
            <h2 class="panel-title">"Opérations temporelles"</h2>

            <div class="op-field">
                <span class="op-label">"Valeur de référence:"</span>
                {move || match reference() {
                    Some(value) => view! { <span class="op-reference mono">{show(value)}</span> }.into_any(),
                    None => {
                        view! {
                            <span class="op-hint" style=format!("color: {}", colors::MUTED)>
                                "Sélectionnez une valeur sur la ligne graduée comme référence."
                            </span>
                        }
                        .into_any()
                    }
                }}
            </div>

            <div class="op-field">
                <span class="op-label">"Opération:"</span>
                <div class="op-choices">
                    {Operation::ALL
                        .into_iter()
                        .map(|op| {
                            view! {
                                <button
                                    class=move || if operation.get() == op { "op-choice active" } else { "op-choice" }
                                    on:click=move |_| operation.set(op)
                                >
                                    {operation_label(op)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="op-field">
                <span class="op-label">"Valeur personnalisée:"</span>
                <div class="op-operand">
                    <input
                        class="op-input"
                        type="number"
                        min="0"
                        step="0.1"
                        prop:value=move || trim_number(operand.get())
                        on:change=on_operand
                    />
                    <Show when=move || operation.get().takes_unit()>
                        <select class="op-input" on:change=on_unit>
                            {TimeUnit::ALL
                                .into_iter()
                                .map(|u| {
                                    view! {
                                        <option value=u.as_str() selected=move || operand_unit.get() == u>
                                            {u.label().to_lowercase()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </Show>
                </div>
            </div>

            <button class="op-compute" disabled=move || reference().is_none() on:click=compute>
                "Calculer"
            </button>

            {move || {
                result.get().map(|value| {
                    view! {
                        <div class="op-result">
                            <span class="op-label">"Résultat:"</span>
                            <span class="mono">{show(value)}</span>
                            <button
                                class="op-add"
                                title="Ajouter à la ligne graduée"
                                style=format!("background: {}", colors::ACCENT)
                                on:click=add_result
                            >
                                "Ajouter"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_labels() {
        assert_eq!(operation_label(Operation::Add), "Addition (+)");
        assert_eq!(operation_label(Operation::Divide), "Division (÷)");
    }
}

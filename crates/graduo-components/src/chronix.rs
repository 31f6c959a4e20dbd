//! Chronix: graduated line for time measurements

use graduo_charts::{GraduatedLine, GraduationClick};
use graduo_state::{StateChangeCallback, WidgetKind, WidgetState, provide_widget_state};
use leptos::prelude::*;

use crate::{DurationPanel, OperationsPanel, SelectedValues, TimeControlPanel};

/// Time widget. With `on_change`, every set change is also reported to the host.
#[component]
pub fn Chronix(#[prop(optional)] on_change: Option<StateChangeCallback>) -> impl IntoView {
    let config = WidgetKind::Chronix.default_config();
    let widget = provide_widget_state(match on_change {
        Some(callback) => WidgetState::lifted(config, callback),
        None => WidgetState::new(config),
    });

    view! {
        <section class="widget chronix">
            <h1 class="widget-title">"Chronix - Manipulation des mesures de temps"</h1>

            <div class="widget-line">
                <GraduatedLine
                    config=widget.config
                    state=widget.interaction
                    on_click=Callback::new(move |click: GraduationClick| {
                        widget.click(click.raw, click.region);
                    })
                />
            </div>

            <div class="widget-panels">
                <div class="widget-column">
                    <TimeControlPanel />
                </div>
                <div class="widget-column">
                    <SelectedValues />
                    <DurationPanel />
                </div>
                <div class="widget-column">
                    <OperationsPanel />
                </div>
            </div>
        </section>
    }
}

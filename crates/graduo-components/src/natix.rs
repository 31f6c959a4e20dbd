//! Natix: graduated line for integers, fractions and mixed numbers

use graduo_charts::{GraduatedLine, GraduationClick};
use graduo_state::{StateChangeCallback, WidgetKind, WidgetState, provide_widget_state};
use leptos::prelude::*;

use crate::{NumericControlPanel, SelectedValues};

#[component]
pub fn Natix(#[prop(optional)] on_change: Option<StateChangeCallback>) -> impl IntoView {
    let config = WidgetKind::Natix.default_config();
    let widget = provide_widget_state(match on_change {
        Some(callback) => WidgetState::lifted(config, callback),
        None => WidgetState::new(config),
    });

    view! {
        <section class="widget natix">
            <h1 class="widget-title">"Natix - Ligne graduée des nombres"</h1>

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
                    <NumericControlPanel />
                </div>
                <div class="widget-column">
                    <SelectedValues />
                </div>
            </div>
        </section>
    }
}

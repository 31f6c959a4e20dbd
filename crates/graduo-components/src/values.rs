//! Selected values, formatted the way the line formats them

use graduo_core::{Config, DurationSpan, colors};
use graduo_state::use_widget_state;
use leptos::prelude::*;

/// Formatted selected values and, for exactly two, their formatted difference
pub fn describe_selection(values: &[f64], config: &Config) -> (Vec<String>, Option<String>) {
    let domain = config.strategy();
    let formatted = values.iter().map(|&v| domain.format(v)).collect();
    let difference = DurationSpan::from_values(values).map(|span| domain.format(span.duration));
    (formatted, difference)
}

#[component]
pub fn SelectedValues() -> impl IntoView {
    let widget = use_widget_state();
    let config = widget.config;
    let selection = move || {
        let values = widget.selected_values();
        config.with(|c| describe_selection(&values, c))
    };

    view! {
        <div class="values-panel">
            {move || {
                let (values, difference) = selection();
                if values.is_empty() {
                    return view! {
                        <p class="vp-empty" style=format!("color: {}", colors::MUTED)>
                            "Cliquez sur la ligne graduée pour sélectionner des valeurs."
                        </p>
                    }
                    .into_any();
                }

                view! {
                    <h2 class="panel-title">"Valeurs sélectionnées"</h2>
                    <div class="vp-grid">
                        {values
                            .into_iter()
                            .enumerate()
                            .map(|(index, text)| {
                                view! {
                                    <div class="vp-item">
                                        <span class="vp-label">{format!("Valeur {}:", index + 1)}</span>
                                        <span class="vp-value mono">{text}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    {difference.map(|text| {
                        view! {
                            <div class="vp-difference" style=format!("border-color: {}", colors::ACCENT)>
                                <span class="vp-label">"Différence:"</span>
                                <span class="vp-value mono">{text}</span>
                            </div>
                        }
                    })}
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graduo_core::{TimeFormat, TimeUnit};

    #[test]
    fn test_two_values_show_difference() {
        let config = Config::chronix_default()
            .with_unit(TimeUnit::Hour)
            .with_format(TimeFormat::Decimal);
        let (values, difference) = describe_selection(&[1.0, 2.5], &config);
        assert_eq!(values.len(), 2);
        assert_eq!(difference.as_deref(), Some("1.50h"));
    }

    #[test]
    fn test_single_value_has_no_difference() {
        let (values, difference) = describe_selection(&[3.0], &Config::natix_default());
        assert_eq!(values, vec!["3".to_string()]);
        assert!(difference.is_none());
    }
}

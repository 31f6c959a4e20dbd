//! Usage guide shown over the widget at startup

use graduo_state::{BrowserStorage, HelpPreference, use_app_state};
use leptos::ev;
use leptos::prelude::*;

const USAGE: [&str; 6] = [
    "En mode affichage, cliquez au-dessus de la ligne pour afficher ou masquer une valeur temporelle",
    "En mode sélection, cliquez au-dessus de la ligne pour sélectionner une valeur à comparer",
    "Dans les deux modes, cliquez en-dessous de la ligne pour placer une flèche rouge",
    "Utilisez le panneau de contrôle pour changer de mode, afficher ou masquer les graduations et réinitialiser l'affichage",
    "Sélectionnez deux points pour mesurer automatiquement une durée",
    "Effectuez des opérations temporelles (addition, soustraction, etc.) avec les valeurs sélectionnées",
];

const TEACHING_USES: [&str; 5] = [
    "Visualisation de durées et d'horaires",
    "Calcul d'intervalles de temps",
    "Conversion entre différentes unités temporelles",
    "Résolution de problèmes impliquant le temps",
    "Représentation des fractions de temps (quart d'heure, demi-journée...)",
];

#[component]
pub fn HelpPopup() -> impl IntoView {
    let app = use_app_state();
    let dont_show_again = RwSignal::new(false);

    let close = move || {
        app.close_help(
            &HelpPreference::new(BrowserStorage),
            dont_show_again.get_untracked(),
        );
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && app.help_open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || app.help_open.get()>
            <div class="help-backdrop">
                <div class="help-popup" role="dialog" aria-modal="true">
                    <div class="help-header">
                        <h2 class="help-title">"Guide d'utilisation de Chronix"</h2>
                        <button class="help-close" aria-label="Fermer" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    <div class="help-body">
                        <h3>"Comment utiliser cette ligne graduée temporelle ?"</h3>
                        <ul>{USAGE.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}</ul>

                        <h3>"Applications pédagogiques"</h3>
                        <ul>{TEACHING_USES.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}</ul>

                        <h3>"Caractéristiques particulières"</h3>
                        <p>
                            "Les subdivisions s'adaptent à l'unité de temps, au pas choisi et à l'intervalle affiché, pour refléter les propriétés naturelles des mesures de temps."
                        </p>
                    </div>

                    <div class="help-footer">
                        <label class="help-opt-out">
                            <input
                                type="checkbox"
                                prop:checked=move || dont_show_again.get()
                                on:change=move |ev| dont_show_again.set(event_target_checked(&ev))
                            />
                            "Ne plus afficher au démarrage"
                        </label>
                        <button class="help-confirm" on:click=move |_| close()>
                            "Compris"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

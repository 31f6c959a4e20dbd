//! Signal-backed state for one graduated-line widget

use graduo_core::{
    ClickRegion, Config, ConfigError, DurationSpan, InteractionMode, InteractionState,
    StateChange, StateKind, StateManager, ValueSet, sorted_values,
};
use leptos::prelude::*;
use tracing::{debug, warn};

/// Host hook: which set changed and its new contents
pub type StateChangeCallback = Callback<(StateKind, ValueSet)>;

/// Reactive widget state with fine-grained signal updates.
///
/// Implements [`StateManager`], so the engine's transitions write straight
/// into signals and, when a host callback is set, are reported to it.
#[derive(Clone, Copy)]
pub struct WidgetState {
    /// Current line configuration, replaced wholesale on edit
    pub config: RwSignal<Config>,
    /// Selected values, hidden primaries, markers and mode
    pub interaction: RwSignal<InteractionState>,
    /// Value the last accepted click snapped to
    pub last_value: RwSignal<Option<f64>>,
    on_change: Option<StateChangeCallback>,
}

impl WidgetState {
    /// Standalone widget state
    pub fn new(config: Config) -> Self {
        Self {
            config: RwSignal::new(config.validated()),
            interaction: RwSignal::new(InteractionState::default()),
            last_value: RwSignal::new(None),
            on_change: None,
        }
    }

    /// Widget state whose changes are lifted to a host
    pub fn lifted(config: Config, on_change: StateChangeCallback) -> Self {
        Self {
            on_change: Some(on_change),
            ..Self::new(config)
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Replace the configuration; interaction state is kept as is
    pub fn set_config(&self, config: Config) {
        let config = config.validated();
        debug!(?config, "Configuration replaced");
        self.config.set(config);
    }

    /// Apply an edit that may be refused (e.g. a bound crossing the other)
    pub fn edit_config(&self, edit: impl FnOnce(&Config) -> Option<Config>) -> bool {
        match edit(&self.config.get_untracked()) {
            Some(next) => {
                self.set_config(next);
                true
            }
            None => {
                debug!("Configuration edit refused");
                false
            }
        }
    }

    /// Apply an edit that may fail validation
    pub fn try_edit_config(
        &self,
        edit: impl FnOnce(&Config) -> Result<Config, ConfigError>,
    ) -> bool {
        match edit(&self.config.get_untracked()) {
            Ok(next) => {
                self.set_config(next);
                true
            }
            Err(err) => {
                warn!(%err, "Configuration edit rejected");
                false
            }
        }
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Route a raw click on the line through the engine
    pub fn click(&self, raw: f64, region: ClickRegion) -> Option<f64> {
        let value = self.handle_click(&self.config.get_untracked(), raw, region);
        if value.is_some() {
            self.last_value.set(value);
        }
        value
    }

    /// Show everything if all primaries are hidden, hide them all otherwise
    pub fn toggle_primary_labels(&self) {
        self.toggle_all_primary(&self.config.get_untracked());
    }

    pub fn reset(&self) {
        self.reset_display();
        self.last_value.set(None);
    }

    // ========================================================================
    // Derived values (tracked)
    // ========================================================================

    pub fn mode(&self) -> InteractionMode {
        self.interaction.with(|state| state.mode)
    }

    /// Selected values in ascending order
    pub fn selected_values(&self) -> Vec<f64> {
        self.interaction.with(|state| sorted_values(&state.selected))
    }

    pub fn duration(&self) -> Option<DurationSpan> {
        self.interaction
            .with(|state| DurationSpan::from_selection(&state.selected))
    }

    pub fn all_primary_hidden(&self) -> bool {
        let config = self.config.get();
        self.interaction
            .with(|state| state.all_primary_hidden(&config))
    }
}

impl StateManager for WidgetState {
    fn snapshot(&self) -> InteractionState {
        self.interaction.get_untracked()
    }

    fn commit(&self, change: StateChange) {
        let kind = change.kind;
        let values = self.on_change.map(|_| change.values.clone());
        self.interaction.update(|state| state.apply(change));

        if let (Some(callback), Some(values)) = (self.on_change, values) {
            callback.run((kind, values));
        }
    }

    fn set_mode(&self, mode: InteractionMode) {
        self.interaction.update(|state| state.mode = mode);
    }
}

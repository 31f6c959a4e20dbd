//! State managers: where interaction state lives
//!
//! The engine never owns state itself. A widget injects a [`StateManager`]:
//! [`LocalState`] for a standalone line, [`LiftedState`] when the host wants
//! to hear about every change.

use crate::{ClickRegion, Config, InteractionMode, InteractionState, StateChange, StateKind, ValueSet, snap};
use std::cell::RefCell;
use tracing::debug;

pub trait StateManager {
    /// Current state, cloned
    fn snapshot(&self) -> InteractionState;

    /// Replace one set with the contents of `change`
    fn commit(&self, change: StateChange);

    fn set_mode(&self, mode: InteractionMode);

    /// Snap a raw click and run the transition; `None` when the click missed the line
    fn handle_click(&self, config: &Config, raw: f64, region: ClickRegion) -> Option<f64> {
        if !snap::in_click_range(raw, config) {
            debug!(raw, "Click outside the visible interval ignored");
            return None;
        }

        let value = snap::snap(raw, config);
        let state = self.snapshot();
        let change = state.click(config, value, region);
        debug!(
            raw,
            value,
            ?region,
            mode = ?state.mode,
            kind = change.kind.as_str(),
            "Graduation clicked"
        );
        self.commit(change);
        Some(value)
    }

    fn toggle_mode(&self) -> InteractionMode {
        let mode = self.snapshot().mode.toggle();
        debug!(?mode, "Interaction mode switched");
        self.set_mode(mode);
        mode
    }

    fn hide_all_primary(&self, config: &Config) {
        let change = self.snapshot().hide_all_primary(config);
        self.commit(change);
    }

    fn show_all_primary(&self) {
        let change = self.snapshot().show_all_primary();
        self.commit(change);
    }

    /// Show everything if all primaries are hidden, hide everything otherwise
    fn toggle_all_primary(&self, config: &Config) {
        if self.snapshot().all_primary_hidden(config) {
            self.show_all_primary();
        } else {
            self.hide_all_primary(config);
        }
    }

    /// Empty every set; the interaction mode is kept
    fn reset_display(&self) {
        for change in self.snapshot().reset() {
            self.commit(change);
        }
        debug!("Display reset");
    }

    fn add_selected(&self, value: f64) {
        let change = self.snapshot().with_selected(value);
        self.commit(change);
    }
}

// ============================================================================
// STANDALONE
// ============================================================================

/// State owned by the widget itself
#[derive(Debug, Default)]
pub struct LocalState {
    state: RefCell<InteractionState>,
}

impl LocalState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateManager for LocalState {
    fn snapshot(&self) -> InteractionState {
        self.state.borrow().clone()
    }

    fn commit(&self, change: StateChange) {
        self.state.borrow_mut().apply(change);
    }

    fn set_mode(&self, mode: InteractionMode) {
        self.state.borrow_mut().mode = mode;
    }
}

// ============================================================================
// HOST-LIFTED
// ============================================================================

/// State mirrored locally and reported to the host on every change
pub struct LiftedState<F>
where
    F: Fn(StateKind, &ValueSet),
{
    state: RefCell<InteractionState>,
    on_change: F,
}

impl<F> LiftedState<F>
where
    F: Fn(StateKind, &ValueSet),
{
    pub fn new(on_change: F) -> Self {
        Self {
            state: RefCell::new(InteractionState::default()),
            on_change,
        }
    }

    /// Start from state the host already holds
    pub fn with_state(state: InteractionState, on_change: F) -> Self {
        Self {
            state: RefCell::new(state),
            on_change,
        }
    }
}

impl<F> StateManager for LiftedState<F>
where
    F: Fn(StateKind, &ValueSet),
{
    fn snapshot(&self) -> InteractionState {
        self.state.borrow().clone()
    }

    fn commit(&self, change: StateChange) {
        (self.on_change)(change.kind, &change.values);
        self.state.borrow_mut().apply(change);
    }

    fn set_mode(&self, mode: InteractionMode) {
        self.state.borrow_mut().mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKey;

    #[test]
    fn test_handle_click_snaps_and_toggles() {
        let config = Config::chronix_default();
        let manager = LocalState::new();
        assert_eq!(manager.handle_click(&config, 23.3, ClickRegion::Above), Some(23.0));
        assert!(manager.snapshot().is_selected(23.0));
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let config = Config::chronix_default();
        let manager = LocalState::new();
        assert_eq!(manager.handle_click(&config, 70.0, ClickRegion::Above), None);
        assert!(manager.snapshot().is_empty());
    }

    #[test]
    fn test_toggle_all_primary() {
        let config = Config::chronix_default();
        let manager = LocalState::new();
        manager.toggle_all_primary(&config);
        assert!(manager.snapshot().all_primary_hidden(&config));
        manager.toggle_all_primary(&config);
        assert!(manager.snapshot().hidden_primary.is_empty());
    }

    #[test]
    fn test_reset_keeps_mode() {
        let config = Config::chronix_default();
        let manager = LocalState::new();
        manager.toggle_mode();
        manager.handle_click(&config, 10.0, ClickRegion::Above);
        manager.handle_click(&config, 12.0, ClickRegion::Below);
        manager.reset_display();
        let state = manager.snapshot();
        assert!(state.is_empty());
        assert_eq!(state.mode, InteractionMode::Selection);
    }

    #[test]
    fn test_lifted_state_reports_changes() {
        let config = Config::chronix_default();
        let seen = RefCell::new(Vec::new());
        let manager = LiftedState::new(|kind, values: &ValueSet| {
            seen.borrow_mut().push((kind, values.clone()));
        });

        manager.handle_click(&config, 10.0, ClickRegion::Above);
        manager.handle_click(&config, 7.0, ClickRegion::Below);
        manager.add_selected(12.0);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].0, StateKind::HiddenMain);
        assert_eq!(seen[1].0, StateKind::Markers);
        assert!(seen[1].1.contains(&ValueKey::new(7.0)));
        assert_eq!(seen[2].0, StateKind::Values);
    }
}

//! Click interaction state machine
//!
//! Transitions are pure: a click produces a [`StateChange`] describing the
//! one set that changed, and a state manager decides where it is stored.

use crate::{Config, ValueKey, ValueSet, snap};
use serde::{Deserialize, Serialize};

/// What a click above the line does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Primary clicks hide/show labels, secondary clicks select
    #[default]
    Display,
    /// Every click selects, visibility is never touched
    Selection,
}

impl InteractionMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Display => Self::Selection,
            Self::Selection => Self::Display,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Display => "Mode affichage",
            Self::Selection => "Mode sélection",
        }
    }
}

/// Vertical half of the surface that received the click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRegion {
    Above,
    Below,
}

/// Which of the three value sets a change targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKind {
    #[serde(rename = "values")]
    Values,
    #[serde(rename = "hiddenMain")]
    HiddenMain,
    #[serde(rename = "markers")]
    Markers,
}

impl StateKind {
    pub const ALL: [StateKind; 3] = [Self::Values, Self::HiddenMain, Self::Markers];

    /// Name reported to the host callback
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Values => "values",
            Self::HiddenMain => "hiddenMain",
            Self::Markers => "markers",
        }
    }
}

/// Replacement contents for one set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub kind: StateKind,
    pub values: ValueSet,
}

impl StateChange {
    pub fn new(kind: StateKind, values: ValueSet) -> Self {
        Self { kind, values }
    }

    pub fn cleared(kind: StateKind) -> Self {
        Self::new(kind, ValueSet::new())
    }
}

/// Per-widget interaction state.
///
/// The sets are independent: a value may be a marker and selected at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub selected: ValueSet,
    pub hidden_primary: ValueSet,
    pub markers: ValueSet,
    pub mode: InteractionMode,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, kind: StateKind) -> &ValueSet {
        match kind {
            StateKind::Values => &self.selected,
            StateKind::HiddenMain => &self.hidden_primary,
            StateKind::Markers => &self.markers,
        }
    }

    /// Store a change produced by one of the transitions
    pub fn apply(&mut self, change: StateChange) {
        let target = match change.kind {
            StateKind::Values => &mut self.selected,
            StateKind::HiddenMain => &mut self.hidden_primary,
            StateKind::Markers => &mut self.markers,
        };
        *target = change.values;
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.hidden_primary.is_empty() && self.markers.is_empty()
    }

    pub fn is_selected(&self, value: f64) -> bool {
        self.selected.contains(&ValueKey::new(value))
    }

    pub fn has_marker(&self, value: f64) -> bool {
        self.markers.contains(&ValueKey::new(value))
    }

    pub fn is_hidden(&self, value: f64) -> bool {
        self.hidden_primary.contains(&ValueKey::new(value))
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Transition for a click on an already snapped value
    pub fn click(&self, config: &Config, value: f64, region: ClickRegion) -> StateChange {
        let kind = match (region, self.mode) {
            (ClickRegion::Below, _) => StateKind::Markers,
            (ClickRegion::Above, InteractionMode::Selection) => StateKind::Values,
            (ClickRegion::Above, InteractionMode::Display) if snap::is_primary(value, config) => {
                StateKind::HiddenMain
            }
            (ClickRegion::Above, InteractionMode::Display) => StateKind::Values,
        };
        StateChange::new(kind, toggled(self.set(kind), value))
    }

    /// Hide the label of every primary graduation in range
    pub fn hide_all_primary(&self, config: &Config) -> StateChange {
        let values = snap::primary_values(config)
            .into_iter()
            .map(ValueKey::new)
            .collect();
        StateChange::new(StateKind::HiddenMain, values)
    }

    pub fn show_all_primary(&self) -> StateChange {
        StateChange::cleared(StateKind::HiddenMain)
    }

    /// Add a value to the selection without toggling it off
    pub fn with_selected(&self, value: f64) -> StateChange {
        let mut values = self.selected.clone();
        values.insert(ValueKey::new(value));
        StateChange::new(StateKind::Values, values)
    }

    /// Changes that empty every set
    pub fn reset(&self) -> [StateChange; 3] {
        StateKind::ALL.map(StateChange::cleared)
    }

    /// Whether every primary graduation in range is hidden
    pub fn all_primary_hidden(&self, config: &Config) -> bool {
        let primaries = snap::primary_values(config);
        !primaries.is_empty() && primaries.into_iter().all(|v| self.is_hidden(v))
    }

    /// Whether a label is drawn for this graduation
    pub fn is_label_visible(&self, value: f64, config: &Config) -> bool {
        if snap::is_primary(value, config) {
            !self.is_hidden(value) || self.is_selected(value)
        } else {
            self.is_selected(value)
        }
    }
}

fn toggled(set: &ValueSet, value: f64) -> ValueSet {
    let key = ValueKey::new(value);
    let mut next = set.clone();
    if !next.remove(&key) {
        next.insert(key);
    }
    next
}

//! # graduo-state
//!
//! Reactive state management for the Graduo widgets.
//! Uses Leptos signals so a click repaints only the line and panels that read
//! the changed set.

pub mod preferences;
pub mod widget;

pub use preferences::*;
pub use widget::*;

use graduo_core::Config;
use leptos::prelude::*;

// ============================================================================
// UI STATE
// ============================================================================

/// Widgets offered by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetKind {
    #[default]
    Chronix,
    Natix,
}

impl WidgetKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chronix => "Chronix",
            Self::Natix => "Natix",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Chronix => "Ligne graduée du temps",
            Self::Natix => "Ligne graduée des nombres",
        }
    }

    pub fn default_config(&self) -> Config {
        match self {
            Self::Chronix => Config::chronix_default(),
            Self::Natix => Config::natix_default(),
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Chronix, Self::Natix]
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Shell-level state shared by every widget
#[derive(Clone, Copy)]
pub struct AppState {
    /// Widget currently shown
    pub active: RwSignal<WidgetKind>,
    /// Help popup visibility
    pub help_open: RwSignal<bool>,
}

impl AppState {
    /// Create app state, opening help unless the user opted out
    pub fn new<S: PreferenceStore>(preference: &HelpPreference<S>) -> Self {
        Self {
            active: RwSignal::new(WidgetKind::default()),
            help_open: RwSignal::new(preference.show_on_startup()),
        }
    }

    pub fn select(&self, kind: WidgetKind) {
        tracing::debug!(widget = kind.label(), "Widget selected");
        self.active.set(kind);
    }

    pub fn open_help(&self) {
        self.help_open.set(true);
    }

    /// Close help, persisting the opt-out when asked to
    pub fn close_help<S: PreferenceStore>(&self, preference: &HelpPreference<S>, dont_show_again: bool) {
        if dont_show_again {
            preference.suppress();
        }
        self.help_open.set(false);
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new(&HelpPreference::new(BrowserStorage));
    provide_context(state);
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Provide a widget's state to its panels
pub fn provide_widget_state(state: WidgetState) -> WidgetState {
    provide_context(state);
    state
}

/// Use the enclosing widget's state
pub fn use_widget_state() -> WidgetState {
    expect_context::<WidgetState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_defaults() {
        assert_eq!(WidgetKind::Chronix.default_config(), Config::chronix_default());
        assert_eq!(WidgetKind::all().len(), 2);
    }

    #[test]
    fn test_help_follows_preference() {
        Owner::new().with(|| {
            let preference = HelpPreference::new(MemoryStore::default());
            let app = AppState::new(&preference);
            assert!(app.help_open.get_untracked());

            app.close_help(&preference, true);
            assert!(!app.help_open.get_untracked());
            assert!(!AppState::new(&preference).help_open.get_untracked());
        });
    }
}

//! # graduo-core
//!
//! Core engine for the Graduo graduated number lines.
//! Implements Strategy pattern for per-domain conversion, formatting and
//! subdivision planning, plus the click interaction state machine.

pub mod config;
pub mod domain;
pub mod duration;
pub mod error;
pub mod format;
pub mod interaction;
pub mod manager;
pub mod snap;
pub mod subdivision;
pub mod units;

pub use config::*;
pub use domain::*;
pub use duration::*;
pub use error::*;
pub use format::*;
pub use interaction::*;
pub use manager::*;
pub use snap::*;
pub use subdivision::*;
pub use units::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// CORE VALUE TYPES
// ============================================================================

/// Fixed-point resolution used to compare graduation values
const KEY_SCALE: f64 = 1_000_000.0;

/// Round a domain value to the precision graduations are compared at
pub fn normalize_value(value: f64) -> f64 {
    (value * KEY_SCALE).round() / KEY_SCALE
}

/// Set key for a domain value.
///
/// Snapped values are floats produced by repeated `step / n` arithmetic, so
/// they are quantized to 1e-6 before being stored or compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ValueKey(pub i64);

impl ValueKey {
    pub fn new(value: f64) -> Self {
        Self((value * KEY_SCALE).round() as i64)
    }

    pub fn value(&self) -> f64 {
        self.0 as f64 / KEY_SCALE
    }
}

impl From<f64> for ValueKey {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for ValueKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Ordered set of graduation values
pub type ValueSet = BTreeSet<ValueKey>;

/// Sorted plain values of a set
pub fn sorted_values(set: &ValueSet) -> Vec<f64> {
    set.iter().map(ValueKey::value).collect()
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const INK: &str = "#000000";
    pub const PAPER: &str = "#FFFFFF";
    pub const MARKER: &str = "#FF0000";
    pub const SELECTION: &str = "#FF0000";
    pub const MUTED: &str = "#6b7280";
    pub const ACCENT: &str = "#3b82f6";
    pub const DURATION_BAR: &str = "#a855f7";

    pub fn marker_alpha(alpha: f64) -> String {
        format!("rgba(255, 0, 0, {:.2})", alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_key_absorbs_float_noise() {
        let a = ValueKey::new(0.1 + 0.2);
        let b = ValueKey::new(0.3);
        assert_eq!(a, b);
        assert_eq!(b.value(), 0.3);
    }

    #[test]
    fn test_sorted_values() {
        let set: ValueSet = [25.0, 10.0, 17.5].into_iter().map(ValueKey::new).collect();
        assert_eq!(sorted_values(&set), vec![10.0, 17.5, 25.0]);
    }

    #[test]
    fn test_marker_alpha() {
        assert_eq!(colors::marker_alpha(0.5), "rgba(255, 0, 0, 0.50)");
    }
}

//! Configuration errors.

use thiserror::Error;

/// Errors raised while parsing or validating a line configuration.
///
/// Interaction paths never produce these: an invalid click or operation is a
/// no-op, not an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unit string not one of second/minute/hour/day.
    #[error("unknown time unit '{0}'")]
    UnknownUnit(String),

    /// Notation string not one of decimal/fraction/mixedNumber.
    #[error("unknown notation '{0}'")]
    UnknownNotation(String),

    /// Display format string not one of mixed/decimal/digital.
    #[error("unknown display format '{0}'")]
    UnknownDisplayFormat(String),

    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),

    /// Step so small against the range that the line would be unreadable.
    #[error("{count} primary graduations exceed the limit of {max}")]
    TooManyGraduations { count: usize, max: usize },

    #[error("denominator must be at least 1")]
    ZeroDenominator,

    /// Step outside the unit's allow-list.
    #[error("step {step} is not allowed for unit {unit}")]
    StepNotAllowed { step: f64, unit: &'static str },

    /// Host configuration was not valid JSON for the expected shape.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

//! Measurement domains as interchangeable strategies
//!
//! The engine is shared by every widget; what changes per domain is how a
//! value converts, prints and subdivides.

use crate::{
    Config, DomainKind, Label, Notation, SubdivisionPlan, TimeFormat, TimeUnit, format, snap,
    subdivision, units,
};

// ============================================================================
// STRATEGY PATTERN: Graduation domains
// ============================================================================

/// Feature switches a domain turns on in the shared engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Subdivision count adapts to zoom and unit
    pub adaptive_subdivision: bool,
    /// Display and selection interaction modes are both offered
    pub dual_mode: bool,
}

/// Strategy trait for a measurement domain
pub trait GraduationDomain: Send + Sync {
    /// Short domain name for logs
    fn name(&self) -> &'static str;

    fn capabilities(&self) -> Capabilities;

    /// Rescale a value expressed in `from` into `to`.
    ///
    /// Domains without units return the value unchanged.
    fn convert(&self, value: f64, from: TimeUnit, to: TimeUnit) -> f64;

    /// Single-line rendering for panels
    fn format(&self, value: f64) -> String;

    /// Label drawn above a graduation
    fn label(&self, value: f64) -> Label;

    fn plan(&self, config: &Config) -> SubdivisionPlan;

    fn is_primary(&self, value: f64, config: &Config) -> bool {
        snap::is_primary(value, config)
    }
}

/// Time lines: seconds to days
#[derive(Debug, Clone, Copy)]
pub struct TimeDomain {
    pub unit: TimeUnit,
    pub format: TimeFormat,
}

impl GraduationDomain for TimeDomain {
    fn name(&self) -> &'static str {
        "time"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            adaptive_subdivision: true,
            dual_mode: true,
        }
    }

    fn convert(&self, value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
        units::convert(value, from, to)
    }

    fn format(&self, value: f64) -> String {
        format::format_time(value, self.unit, self.format)
    }

    fn label(&self, value: f64) -> Label {
        format::time_label(value, self.unit, self.format)
    }

    fn plan(&self, config: &Config) -> SubdivisionPlan {
        subdivision::plan_time(self.unit, config.step, config.range())
    }
}

/// Plain number lines: integers, fractions, mixed numbers
#[derive(Debug, Clone, Copy)]
pub struct NumericDomain {
    pub notation: Notation,
    pub denominator: u32,
}

impl GraduationDomain for NumericDomain {
    fn name(&self) -> &'static str {
        "numeric"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            adaptive_subdivision: false,
            dual_mode: false,
        }
    }

    fn convert(&self, value: f64, _from: TimeUnit, _to: TimeUnit) -> f64 {
        value
    }

    fn format(&self, value: f64) -> String {
        format::format_numeric(value, self.notation, self.denominator)
    }

    fn label(&self, value: f64) -> Label {
        format::numeric_label(value, self.notation, self.denominator)
    }

    fn plan(&self, config: &Config) -> SubdivisionPlan {
        subdivision::plan_numeric(self.notation, self.denominator, config.step)
    }
}

impl Config {
    /// Strategy matching this configuration's domain
    pub fn strategy(&self) -> Box<dyn GraduationDomain> {
        match self.domain {
            DomainKind::Time { unit, format } => Box::new(TimeDomain { unit, format }),
            DomainKind::Numeric { notation } => Box::new(NumericDomain {
                notation,
                denominator: self.denominator,
            }),
        }
    }
}

//! # graduo-components
//!
//! Leptos panels around the graduated line, and the Chronix and Natix
//! widgets composed from them. Panels read the enclosing widget's state
//! from context.

pub mod chronix;
pub mod control_panel;
pub mod duration;
pub mod help_popup;
pub mod natix;
pub mod operations;
pub mod values;

pub use chronix::*;
pub use control_panel::*;
pub use duration::*;
pub use help_popup::*;
pub use natix::*;
pub use operations::*;
pub use values::*;

/// Parse a number typed into an `<input type="number">`
pub(crate) fn parse_input(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(" 12 "), Some(12.0));
        assert_eq!(parse_input("2,5"), Some(2.5));
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("abc"), None);
    }
}

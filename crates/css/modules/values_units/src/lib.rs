//! CSS Values and Units Module Level 3: Property value types used by layout.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
// Each module documents functions with references to the exact spec section.
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;

// Re-exports for ergonomic access from other crates.
pub use chapter_4_numbers::{
    EPSILON, Number, UNDEFINED, defined_or, floats_equal, floats_equal_with_precision,
    into_option, is_defined, is_undefined, parse_number, undefined_if_none,
};
pub use chapter_5_percentages::{Percentage, parse_percentage};
pub use chapter_6_dimensions::{Value, auto, parse_value, percent, points};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// Input continued after a complete value.
    TrailingInput,
}

//! CSS Values & Units Level 3: §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>
//!
//! Layout arithmetic runs in `f32` and uses NaN as the "undefined" quantity, so
//! an unknown size flows through additions and comparisons without branching.
//! `f32::max`/`f32::min` ignore a NaN operand, which is the behaviour the
//! layout code relies on when clamping against optional bounds.

use crate::ParseError;
use cssparser::{Parser, Token};

/// Tolerance used by approximate float comparisons throughout layout.
pub const EPSILON: f32 = 0.0001;

/// The undefined length.
pub const UNDEFINED: f32 = f32::NAN;

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<Number, ParseError> {
    input.next().map_or(Err(ParseError::UnexpectedToken), |token| {
        if let Token::Number { value, .. } = token.clone() {
            Ok(Number(value))
        } else {
            Err(ParseError::UnexpectedToken)
        }
    })
}

#[inline]
pub fn is_undefined(value: f32) -> bool {
    value.is_nan()
}

#[inline]
pub fn is_defined(value: f32) -> bool {
    !value.is_nan()
}

/// Returns `value` unless it is undefined, in which case `fallback`.
#[inline]
pub fn defined_or(value: f32, fallback: f32) -> f32 {
    if value.is_nan() { fallback } else { value }
}

/// Map `None` (and NaN) to the undefined sentinel.
#[inline]
pub fn undefined_if_none(value: Option<f32>) -> f32 {
    value.unwrap_or(UNDEFINED)
}

/// Map the undefined sentinel to `None`.
#[inline]
pub fn into_option(value: f32) -> Option<f32> {
    (!value.is_nan()).then_some(value)
}

/// Approximate equality within `precision`. Two undefined values are equal.
pub fn floats_equal_with_precision(lhs: f32, rhs: f32, precision: f32) -> bool {
    if lhs.is_nan() || rhs.is_nan() {
        return lhs.is_nan() && rhs.is_nan();
    }
    (lhs - rhs).abs() < precision
}

/// Approximate equality within [`EPSILON`]. Two undefined values are equal.
pub fn floats_equal(lhs: f32, rhs: f32) -> bool {
    floats_equal_with_precision(lhs, rhs, EPSILON)
}

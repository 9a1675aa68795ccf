//! CSS Values & Units Level 3: §6 Dimensions (layout subset)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>
//!
//! Layout only needs device-independent points, percentages and the `auto`
//! keyword. Every style length in the engine is one of these [`Value`]s.

use crate::ParseError;
use crate::chapter_4_numbers::EPSILON;
use crate::chapter_5_percentages::Percentage;
use cssparser::{Parser, ParserInput, Token};
use log::trace;
use serde::{Deserialize, Serialize};

/// A style length: undefined, `auto`, a point length or a percentage of the
/// containing block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// No value was set.
    #[default]
    Undefined,
    /// The `auto` keyword.
    Auto,
    /// Absolute length in points.
    Points(f32),
    /// Percentage, expressed as the CSS number (`50.0` for `50%`).
    Percent(f32),
}

/// Point length. NaN becomes [`Value::Undefined`].
#[inline]
pub fn points(value: f32) -> Value {
    if value.is_nan() {
        Value::Undefined
    } else {
        Value::Points(value)
    }
}

/// Percentage length. NaN becomes [`Value::Undefined`].
#[inline]
pub fn percent(value: f32) -> Value {
    if value.is_nan() {
        Value::Undefined
    } else {
        Value::Percent(value)
    }
}

#[inline]
pub const fn auto() -> Value {
    Value::Auto
}

impl Value {
    /// Resolve to a length against `parent_size`.
    ///
    /// Undefined and auto resolve to NaN, as does a percentage of an undefined
    /// parent size.
    pub fn resolve(self, parent_size: f32) -> f32 {
        match self {
            Self::Points(value) => value,
            Self::Percent(value) => Percentage::from_css(value).resolve(parent_size),
            Self::Undefined | Self::Auto => f32::NAN,
        }
    }

    /// Resolve as a margin, where `auto` contributes zero.
    pub fn resolve_margin(self, parent_size: f32) -> f32 {
        match self {
            Self::Auto => 0.0,
            Self::Undefined | Self::Points(_) | Self::Percent(_) => self.resolve(parent_size),
        }
    }

    #[inline]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// True for point and percentage values.
    #[inline]
    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Points(_) | Self::Percent(_))
    }

    /// Magnitude of a point or percentage value.
    #[inline]
    pub const fn magnitude(self) -> Option<f32> {
        match self {
            Self::Points(value) | Self::Percent(value) => Some(value),
            Self::Undefined | Self::Auto => None,
        }
    }

    /// Unit-aware comparison: the units must match and the magnitudes must be
    /// within [`EPSILON`] of each other.
    pub fn approx_eq(self, other: Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Auto, Self::Auto) => true,
            (Self::Points(lhs), Self::Points(rhs)) | (Self::Percent(lhs), Self::Percent(rhs)) => {
                (lhs.is_nan() && rhs.is_nan()) || (lhs - rhs).abs() < EPSILON
            }
            _ => false,
        }
    }
}

/// Parse a single layout value from `input`.
///
/// Accepts `<n>px`, a unitless `<n>` (points), `<n>%` and `auto`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any other token and
/// `ParseError::TrailingInput` when text follows the value.
pub fn parse_value(css: &str) -> Result<Value, ParseError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let value = parse_value_token(&mut parser)?;
    parser
        .expect_exhausted()
        .map_err(|_| ParseError::TrailingInput)?;
    trace!(target: "css::values", "[VALUE] parsed {css:?} as {value:?}");
    Ok(value)
}

fn parse_value_token(input: &mut Parser) -> Result<Value, ParseError> {
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    match token {
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("px") => {
            Ok(points(value))
        }
        Token::Number { value, .. } => Ok(points(value)),
        Token::Percentage { unit_value, .. } => Ok(percent(unit_value * 100.0)),
        Token::Ident(ident) if ident.eq_ignore_ascii_case("auto") => Ok(Value::Auto),
        _ => Err(ParseError::UnexpectedToken),
    }
}

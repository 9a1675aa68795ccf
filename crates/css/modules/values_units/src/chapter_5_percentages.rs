//! CSS Values & Units Level 3: §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS <percentage>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32); // stored as 0.0..=1.0

impl Percentage {
    /// Build from a CSS percentage number (`50.0` for `50%`).
    #[inline]
    pub fn from_css(value: f32) -> Self {
        Self(value / 100.0)
    }

    /// Resolve against `basis`. An undefined basis yields an undefined length,
    /// so a percentage never resolves through an indefinite containing block.
    #[inline]
    pub fn resolve(self, basis: f32) -> f32 {
        if basis.is_nan() {
            return f32::NAN;
        }
        self.0 * basis
    }
}

/// Parse a CSS <percentage> (§5.1).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`.
pub fn parse_percentage(input: &mut Parser) -> Result<Percentage, ParseError> {
    if let Ok(token) = input.next()
        && let Token::Percentage { unit_value, .. } = token.clone()
    {
        return Ok(Percentage(unit_value));
    }
    Err(ParseError::UnexpectedToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if percentage resolution is wrong.
    #[test]
    fn half_of_two_hundred() {
        let half = Percentage::from_css(50.0);
        assert!((half.resolve(200.0) - 100.0).abs() < f32::EPSILON);
    }

    /// # Panics
    /// Panics if an undefined basis does not propagate.
    #[test]
    fn undefined_basis_stays_undefined() {
        assert!(Percentage::from_css(50.0).resolve(f32::NAN).is_nan());
    }

    /// # Panics
    /// Panics if out-of-range percentages are clamped.
    #[test]
    fn no_range_clamping() {
        assert!((Percentage::from_css(150.0).resolve(10.0) - 15.0).abs() < 0.0001);
        assert!((Percentage::from_css(-20.0).resolve(10.0) + 2.0).abs() < 0.0001);
    }
}

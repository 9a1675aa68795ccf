//! CSS Sizing Module - Available space and min/max constraints for flex layout
//!
//! [Spec: CSS Sizing Level 3](https://www.w3.org/TR/css-sizing-3/)
//!
//! ## Architecture
//!
//! Every layout request carries, per dimension, an available size and a
//! [`MeasureMode`] describing how binding that size is:
//!
//! ```text
//! Exactly   → the box must be exactly this size
//! AtMost    → the box may be at most this size (fit-content)
//! Undefined → no constraint (max-content)
//! ```
//!
//! An undefined size is carried as NaN. The helpers in this crate never turn
//! NaN into zero; a missing bound is simply not applied.

use css_values_units::{EPSILON, is_defined};
use serde::{Deserialize, Serialize};

//=============================================================================
// Measure modes and sizes
//=============================================================================

/// Dimension being sized (width or height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Width,
    Height,
}

/// How an available size constrains the box being laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasureMode {
    /// No constraint; the box takes its max-content size.
    #[default]
    Undefined,
    /// The box must take exactly the available size.
    Exactly,
    /// The box may take any size up to the available size.
    AtMost,
}

impl MeasureMode {
    /// Short label used in log lines and tree dumps.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::Exactly => "EXACTLY",
            Self::AtMost => "AT_MOST",
        }
    }
}

/// A width and height pair in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Both dimensions undefined.
    pub const UNDEFINED: Self = Self::new(f32::NAN, f32::NAN);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn get(self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    #[inline]
    pub const fn set(&mut self, dimension: Dimension, value: f32) {
        match dimension {
            Dimension::Width => self.width = value,
            Dimension::Height => self.height = value,
        }
    }
}

//=============================================================================
// Min/max constraints
//=============================================================================

/// Apply min/max constraints to a size.
///
/// [Spec: CSS Sizing Level 3 §5.2 Min/Max Size Properties]
///
/// ## Algorithm
///
/// ```text
/// 1. if max is defined, non-negative and value > max → max
/// 2. if min is defined, non-negative and value < min → min
/// ```
///
/// The minimum is applied last, so it wins when `min > max`.
///
/// ```
/// # use css_sizing::bound_within_min_max;
/// assert_eq!(bound_within_min_max(120.0, 10.0, 100.0), 100.0);
/// assert_eq!(bound_within_min_max(5.0, 10.0, f32::NAN), 10.0);
/// assert_eq!(bound_within_min_max(50.0, 80.0, 40.0), 80.0);
/// ```
#[inline]
pub fn bound_within_min_max(value: f32, min: f32, max: f32) -> f32 {
    let mut bounded = value;
    if is_defined(max) && max >= 0.0 && bounded > max {
        bounded = max;
    }
    if is_defined(min) && min >= 0.0 && bounded < min {
        bounded = min;
    }
    bounded
}

/// [`bound_within_min_max`], then never smaller than the box's own padding and
/// border along that axis.
#[inline]
pub fn bound_axis(value: f32, min: f32, max: f32, padding_and_border: f32) -> f32 {
    bound_within_min_max(value, min, max).max(padding_and_border)
}

/// Tighten an available size with a resolved max size (margins included).
///
/// ## Algorithm
///
/// ```text
/// Exactly | AtMost → size = min(size, max)            (when max is defined)
/// Undefined        → mode = AtMost, size = max        (when max is defined)
/// ```
#[inline]
pub fn constrain_max_size_for_mode(
    mode: MeasureMode,
    size: f32,
    max_size: f32,
) -> (MeasureMode, f32) {
    if !is_defined(max_size) {
        return (mode, size);
    }
    match mode {
        MeasureMode::Exactly | MeasureMode::AtMost => {
            if is_defined(size) && size <= max_size {
                (mode, size)
            } else {
                (mode, max_size)
            }
        }
        MeasureMode::Undefined => (MeasureMode::AtMost, max_size),
    }
}

//=============================================================================
// Measurement reuse
//=============================================================================

/// Whether a cached measurement can answer a new request in one dimension.
///
/// [Spec: CSS Sizing Level 3 §4 Intrinsic Size Determination]
///
/// ## Rules
///
/// ```text
/// same mode and same size                              → reuse
/// new Exactly size equals the old computed size        → reuse
/// old Undefined result fits within a new AtMost bound  → reuse
/// old AtMost result still fits a stricter AtMost bound → reuse
/// ```
///
/// `rounded_equal` compares sizes on the pixel grid the host rounds to.
pub fn measurement_is_reusable(
    new: (MeasureMode, f32),
    old: (MeasureMode, f32),
    last_computed: f32,
    rounded_equal: impl Fn(f32, f32) -> bool,
) -> bool {
    let (new_mode, new_size) = new;
    let (old_mode, old_size) = old;
    let same_spec = new_mode == old_mode && rounded_equal(new_size, old_size);
    let exact_matches_old = new_mode == MeasureMode::Exactly
        && (new_size - last_computed).abs() < EPSILON;
    let old_unbounded_still_fits = new_mode == MeasureMode::AtMost
        && old_mode == MeasureMode::Undefined
        && (new_size >= last_computed || (new_size - last_computed).abs() < EPSILON);
    let stricter_still_valid = old_mode == MeasureMode::AtMost
        && new_mode == MeasureMode::AtMost
        && is_defined(old_size)
        && is_defined(new_size)
        && old_size > new_size
        && (last_computed <= new_size || (new_size - last_computed).abs() < EPSILON);
    same_spec || exact_matches_old || old_unbounded_still_fits || stricter_still_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(lhs: f32, rhs: f32) -> bool {
        (lhs - rhs).abs() < EPSILON
    }

    /// # Panics
    /// Panics if negative bounds are applied.
    #[test]
    fn negative_bounds_are_ignored() {
        assert!(exact(bound_within_min_max(30.0, -1.0, -1.0), 30.0));
        assert!(exact(bound_axis(0.0, f32::NAN, f32::NAN, 12.0), 12.0));
    }

    /// # Panics
    /// Panics if an undefined value is coerced to a number without bounds.
    #[test]
    fn undefined_stays_undefined_without_bounds() {
        assert!(bound_within_min_max(f32::NAN, f32::NAN, f32::NAN).is_nan());
    }

    /// # Panics
    /// Panics if max constraints do not tighten the mode.
    #[test]
    fn max_size_tightens_modes() {
        assert_eq!(
            constrain_max_size_for_mode(MeasureMode::Undefined, f32::NAN, 50.0),
            (MeasureMode::AtMost, 50.0)
        );
        assert_eq!(
            constrain_max_size_for_mode(MeasureMode::Exactly, 80.0, 50.0),
            (MeasureMode::Exactly, 50.0)
        );
        assert_eq!(
            constrain_max_size_for_mode(MeasureMode::AtMost, 30.0, 50.0),
            (MeasureMode::AtMost, 30.0)
        );
        let (mode, size) = constrain_max_size_for_mode(MeasureMode::Undefined, f32::NAN, f32::NAN);
        assert_eq!(mode, MeasureMode::Undefined);
        assert!(size.is_nan());
    }

    /// # Panics
    /// Panics if measurement reuse rules are wrong.
    #[test]
    fn measurement_reuse_rules() {
        // Old max-content result of 40 fits a new bound of 100.
        assert!(measurement_is_reusable(
            (MeasureMode::AtMost, 100.0),
            (MeasureMode::Undefined, f32::NAN),
            40.0,
            exact,
        ));
        // A bound of 30 would clip the old max-content result.
        assert!(!measurement_is_reusable(
            (MeasureMode::AtMost, 30.0),
            (MeasureMode::Undefined, f32::NAN),
            40.0,
            exact,
        ));
        // Exact request matching the previously computed size.
        assert!(measurement_is_reusable(
            (MeasureMode::Exactly, 40.0),
            (MeasureMode::AtMost, 100.0),
            40.0,
            exact,
        ));
        // Stricter bound that the old result still satisfies.
        assert!(measurement_is_reusable(
            (MeasureMode::AtMost, 60.0),
            (MeasureMode::AtMost, 100.0),
            40.0,
            exact,
        ));
        assert!(!measurement_is_reusable(
            (MeasureMode::Exactly, 60.0),
            (MeasureMode::AtMost, 100.0),
            40.0,
            exact,
        ));
    }
}

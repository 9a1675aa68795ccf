//! Fixed-point spacing quantities.
//!
//! Justification spacing is split in 1/64px steps held in an i32. Equal
//! shares of a quantity are exact here, so the gaps handed out by
//! `space-*` justification always add back up to the free space.

use std::ops::{Add, Div, Mul};

/// Length in 1/64px steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct LayoutUnit(i32);

impl LayoutUnit {
    /// Steps per point.
    pub const SCALE: i32 = 64;

    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Round `points` to the closest step. NaN becomes zero.
    #[inline]
    pub fn from_px(points: f32) -> Self {
        if points.is_nan() {
            return Self::ZERO;
        }
        Self((points * Self::SCALE as f32).round() as i32)
    }

    #[inline]
    pub const fn to_px(self) -> f32 {
        self.0 as f32 / Self::SCALE as f32
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// `(share, remainder)` with `share * parts + remainder == self` and a
    /// remainder in `0..parts` steps. No parts means no share.
    #[inline]
    pub const fn split(self, parts: i32) -> (Self, Self) {
        if parts <= 0 {
            return (Self::ZERO, self);
        }
        (Self(self.0.div_euclid(parts)), Self(self.0.rem_euclid(parts)))
    }

    /// Spread `points` over `parts` gaps as `(first, rest)`.
    ///
    /// The first gap absorbs the step remainder and the rounding residue, so
    /// `first + rest * (parts - 1)` is `points` again.
    pub fn distribute(points: f32, parts: usize) -> (f32, f32) {
        if parts == 0 || points.is_nan() {
            return (0.0, 0.0);
        }
        let stepped = Self::from_px(points);
        let residue = points - stepped.to_px();
        let (share, remainder) = stepped.split(parts as i32);
        ((share + remainder).to_px() + residue, share.to_px())
    }
}

impl Add for LayoutUnit {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<i32> for LayoutUnit {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<i32> for LayoutUnit {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_round_to_the_closest_step() {
        assert_eq!(LayoutUnit::from_px(10.0).raw(), 640);
        assert_eq!(LayoutUnit::from_px(8.328_125).raw(), 533);
        assert_eq!(LayoutUnit::from_px(f32::NAN), LayoutUnit::ZERO);
    }

    #[test]
    fn splitting_keeps_every_step() {
        let total = LayoutUnit::from_raw(100);
        let (share, remainder) = total.split(3);
        assert_eq!((share.raw(), remainder.raw()), (33, 1));
        assert_eq!(share * 3 + remainder, total);

        let negative = LayoutUnit::from_raw(-100);
        let (neg_share, neg_remainder) = negative.split(3);
        assert_eq!(neg_share * 3 + neg_remainder, negative);
        assert!(neg_remainder.raw() >= 0);

        assert_eq!(total.split(0), (LayoutUnit::ZERO, total));
    }

    #[test]
    fn distributed_gaps_add_back_up() {
        let (first, rest) = LayoutUnit::distribute(100.0, 3);
        assert!((first + rest * 2.0 - 100.0).abs() < 1e-4);
        assert!(first >= rest);

        let (odd_first, odd_rest) = LayoutUnit::distribute(10.003, 7);
        assert!((odd_first + odd_rest * 6.0 - 10.003).abs() < 1e-4);

        assert_eq!(LayoutUnit::distribute(50.0, 0), (0.0, 0.0));
        assert_eq!(LayoutUnit::distribute(f32::NAN, 2), (0.0, 0.0));
    }
}

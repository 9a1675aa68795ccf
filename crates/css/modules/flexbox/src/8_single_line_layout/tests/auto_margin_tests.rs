//! Tests for auto margin free-space absorption.

use super::*;

#[test]
/// # Panics
/// Panics if auto margins do not split free space evenly.
fn auto_margins_split_free_space() {
    let (first, rest) = auto_margin_share(30.0, 2);
    assert!(close(first, 15.0));
    assert!(close(rest, 15.0));
}

#[test]
/// # Panics
/// Panics if the split does not add back up to the free space.
fn auto_margin_remainder_goes_first() {
    let (first, rest) = auto_margin_share(10.0, 3);
    assert!((first + 2.0 * rest - 10.0).abs() < 1e-4);
    assert!(first >= rest);
}

#[test]
/// # Panics
/// Panics if auto margins absorb negative space.
fn auto_margins_ignore_negative_space() {
    assert_eq!(auto_margin_share(-30.0, 2), (0.0, 0.0));
    assert_eq!(auto_margin_share(30.0, 0), (0.0, 0.0));
}

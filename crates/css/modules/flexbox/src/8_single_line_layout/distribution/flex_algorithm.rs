//! Resolving flexible lengths.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use css_values_units::EPSILON;
use log::{debug, trace};
use smallvec::SmallVec;

use super::super::FlexChild;

/// Outcome of resolving the flexible lengths of one line.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexResolution {
    /// Resolved main size per item, in input order.
    pub sizes: SmallVec<f32, 8>,
    /// Free space that no item absorbed; justification distributes it.
    pub remaining_free_space: f32,
    /// Number of freeze iterations that ran.
    pub iterations: usize,
}

/// Distribute `free_space` over `items` with the iterative freeze loop.
///
/// `free_space` is the available inner main size minus the outer
/// hypothetical sizes of the line. Positive space is distributed by
/// flex-grow, negative space by flex-shrink scaled with each item's base size.
///
/// ## Algorithm
///
/// ```text
/// 1. freeze items whose factor for the current direction is zero
/// 2. loop (at most items + 1 times) while some item is unfrozen:
///      remaining = free_space - Σ frozen (size - base)
///      grow:   target = base + remaining * grow / max(Σ grow, 1)
///      shrink: target = base + remaining * (shrink * base) / Σ (shrink * base)
///      clamp each target by min/max and padding+border, record violation
///      |Σ violation| < ε → freeze everything
///      Σ violation > 0  → freeze min violators
///      Σ violation < 0  → freeze max violators
/// ```
pub fn resolve_flexible_lengths(items: &[FlexChild], free_space: f32) -> FlexResolution {
    let free_space = if free_space.is_nan() { 0.0 } else { free_space };
    let bases: SmallVec<f32, 8> = items
        .iter()
        .map(FlexChild::hypothetical_main_size)
        .collect();
    let mut sizes = bases.clone();
    let growing = free_space > 0.0;
    let shrinking = free_space < 0.0;
    let mut frozen: SmallVec<bool, 8> = items
        .iter()
        .map(|item| {
            let factor = if growing {
                item.flex_grow
            } else {
                item.flex_shrink
            };
            !(growing || shrinking) || factor <= 0.0
        })
        .collect();

    let mut iterations = 0_usize;
    while frozen.iter().any(|is_frozen| !is_frozen) && iterations <= items.len() {
        iterations += 1;
        let used: f32 = sizes
            .iter()
            .zip(bases.iter())
            .zip(frozen.iter())
            .filter(|(_, is_frozen)| **is_frozen)
            .map(|((size, base), _)| size - base)
            .sum();
        let remaining = free_space - used;

        let weights: SmallVec<f32, 8> = items
            .iter()
            .zip(bases.iter())
            .map(|(item, base)| {
                if growing {
                    item.flex_grow.max(0.0)
                } else {
                    item.flex_shrink.max(0.0) * base.max(0.0)
                }
            })
            .collect();
        let weight_sum: f32 = weights
            .iter()
            .zip(frozen.iter())
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(weight, _)| *weight)
            .sum();
        let divisor = if growing {
            weight_sum.max(1.0)
        } else {
            weight_sum
        };

        let mut violations: SmallVec<f32, 8> = SmallVec::with_capacity(items.len());
        let mut total_violation = 0.0_f32;
        for index in 0..items.len() {
            if frozen[index] {
                violations.push(0.0);
                continue;
            }
            let share = if divisor > 0.0 {
                remaining * weights[index] / divisor
            } else {
                0.0
            };
            let target = bases[index] + share;
            let clamped = items[index].clamp_main_size(target);
            let violation = clamped - target;
            sizes[index] = clamped;
            total_violation += violation;
            violations.push(violation);
        }
        trace!(
            target: "css::flexbox::freeze",
            "[FLEX-FREEZE] iteration={iterations} remaining={remaining:.3} divisor={divisor:.3} total_violation={total_violation:.3}"
        );

        for (is_frozen, violation) in frozen.iter_mut().zip(violations.iter()) {
            if *is_frozen {
                continue;
            }
            let freeze = if total_violation.abs() < EPSILON {
                true
            } else if total_violation > 0.0 {
                *violation > 0.0
            } else {
                *violation < 0.0
            };
            if freeze {
                *is_frozen = true;
            }
        }
    }

    let distributed: f32 = sizes
        .iter()
        .zip(bases.iter())
        .map(|(size, base)| size - base)
        .sum();
    let remaining_free_space = free_space - distributed;
    debug!(
        target: "css::flexbox::freeze",
        "[FLEX-FREEZE] items={} free_space={free_space:.3} distributed={distributed:.3} remaining={remaining_free_space:.3} iterations={iterations}",
        items.len()
    );
    FlexResolution {
        sizes,
        remaining_free_space,
        iterations,
    }
}

//! Pixel-grid snapping applied after layout.
//!
//! Layout runs in unrounded points. Once a pass completes, every node's
//! absolute edges are snapped to the device grid given by
//! [`Config::point_scale_factor`](crate::Config::point_scale_factor), and sizes
//! are derived from the snapped edges so that adjacent boxes never overlap or
//! leave gaps. Text nodes never round their size down.

use css_values_units::floats_equal;
use indextree::NodeId;

use crate::node::NodeType;
use crate::tree::LayoutTree;

/// Strategy used to snap a coordinate to the device pixel grid.
pub trait PixelRounding: Send {
    /// Snap `value` (in points) to the grid of `scale` pixels per point.
    fn round(&self, value: f32, scale: f32, force_ceil: bool, force_floor: bool) -> f32;
}

/// Round to the nearest device pixel; halves round up.
#[derive(Copy, Clone, Debug, Default)]
pub struct GridRounding;

impl PixelRounding for GridRounding {
    fn round(&self, value: f32, scale: f32, force_ceil: bool, force_floor: bool) -> f32 {
        round_value_to_pixel_grid(value, scale, force_ceil, force_floor)
    }
}

/// Snap `value` to the pixel grid.
///
/// ## Algorithm
///
/// ```text
/// scaled   = value * scale
/// fraction = scaled mod 1              (in [0, 1))
/// fraction ≈ 0 or ≈ 1 → already on the grid
/// force_ceil          → next pixel
/// force_floor         → previous pixel
/// otherwise           → nearest pixel, halves round up
/// ```
///
/// ```
/// # use layouter::round_value_to_pixel_grid;
/// assert_eq!(round_value_to_pixel_grid(10.4, 1.0, false, false), 10.0);
/// assert_eq!(round_value_to_pixel_grid(10.5, 1.0, false, false), 11.0);
/// assert_eq!(round_value_to_pixel_grid(10.25, 2.0, false, false), 10.5);
/// assert_eq!(round_value_to_pixel_grid(10.1, 1.0, true, false), 11.0);
/// ```
pub fn round_value_to_pixel_grid(value: f32, scale: f32, force_ceil: bool, force_floor: bool) -> f32 {
    if value.is_nan() || scale.is_nan() || scale == 0.0 {
        return value;
    }
    let scaled = value * scale;
    let mut fraction = scaled % 1.0;
    if fraction < 0.0 {
        fraction += 1.0;
    }
    let floor = scaled - fraction;
    let snapped = if floats_equal(fraction, 0.0) {
        floor
    } else if floats_equal(fraction, 1.0) || force_ceil {
        floor + 1.0
    } else if force_floor || (fraction < 0.5 && !floats_equal(fraction, 0.5)) {
        floor
    } else {
        floor + 1.0
    };
    snapped / scale
}

fn has_fraction(scaled: f32) -> bool {
    let fraction = scaled % 1.0;
    !floats_equal(fraction, 0.0) && !floats_equal(fraction.abs(), 1.0)
}

/// Compare two lengths as they would land on the pixel grid.
pub(crate) fn rounded_equal(rounding: &dyn PixelRounding, scale: f32, lhs: f32, rhs: f32) -> bool {
    if scale == 0.0 {
        return floats_equal(lhs, rhs);
    }
    floats_equal(
        rounding.round(lhs, scale, false, false),
        rounding.round(rhs, scale, false, false),
    )
}

impl LayoutTree {
    /// Snap the laid-out subtree at `root` to the configured pixel grid.
    pub(crate) fn round_to_pixel_grid(&mut self, root: NodeId) {
        let scale = self.config.point_scale_factor();
        if scale == 0.0 {
            return;
        }
        self.round_subtree(root, scale, 0.0, 0.0);
    }

    fn round_subtree(&mut self, id: NodeId, scale: f32, parent_left: f32, parent_top: f32) {
        let children = self.child_ids(id);
        let rounding = self.rounding.as_ref();
        let node = self.arena[id].get_mut();
        let text = node.node_type == NodeType::Text;
        let layout = &mut node.layout;

        let left = layout.position.left;
        let top = layout.position.top;
        let width = layout.dimensions.width;
        let height = layout.dimensions.height;
        let absolute_left = parent_left + left;
        let absolute_top = parent_top + top;
        let absolute_right = absolute_left + width;
        let absolute_bottom = absolute_top + height;

        layout.position.left = rounding.round(left, scale, false, text);
        layout.position.top = rounding.round(top, scale, false, text);

        let fractional_width = has_fraction(width * scale);
        let fractional_height = has_fraction(height * scale);
        layout.dimensions.width = rounding.round(
            absolute_right,
            scale,
            text && fractional_width,
            text && !fractional_width,
        ) - rounding.round(absolute_left, scale, false, text);
        layout.dimensions.height = rounding.round(
            absolute_bottom,
            scale,
            text && fractional_height,
            text && !fractional_height,
        ) - rounding.round(absolute_top, scale, false, text);

        for child in children {
            self.round_subtree(child, scale, absolute_left, absolute_top);
        }
    }
}

//! Flex layout algorithm: lines, flexible lengths, justification, alignment
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>

use crate::chapter6::ItemRef;
use css_sizing::{bound_axis, bound_within_min_max};
use serde::{Deserialize, Serialize};

pub mod cross_axis;
pub mod distribution;
pub mod multi_line;

pub use cross_axis::{LineBaseline, cross_offset_in_line};
pub use distribution::{
    FlexResolution, JustifySpacing, auto_margin_share, justify_params, resolve_flexible_lengths,
};
pub use multi_line::{AlignContentSpacing, FlexLine, align_content_params, break_into_lines};

/// Spec: <https://www.w3.org/TR/css-align-3/#propdef-justify-content>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Shared keyword set of `align-items`, `align-self` and `align-content`.
///
/// Spec: <https://www.w3.org/TR/css-align-3/#propdef-align-items>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Align {
    /// Only meaningful for `align-self`: defer to the container's `align-items`.
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
    Baseline,
    SpaceBetween,
    SpaceAround,
}

impl JustifyContent {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
            Self::SpaceEvenly => "space-evenly",
        }
    }
}

impl Align {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::Stretch => "stretch",
            Self::Baseline => "baseline",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
        }
    }
}

/// Inputs for a flex item needed for main-axis sizing.
///
/// Undefined bounds are NaN.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexChild {
    pub handle: ItemRef,
    /// Flex base size, already floored at the item's padding and border.
    pub flex_basis: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub min_main: f32,
    pub max_main: f32,
    /// Padding plus border along the main axis; the item never gets smaller.
    pub padding_border_main: f32,
    /// Sum of leading and trailing main-axis margins (auto margins count as 0).
    pub margin_main: f32,
}

impl FlexChild {
    /// Inflexible item with the given basis and no bounds.
    pub const fn fixed(handle: ItemRef, flex_basis: f32) -> Self {
        Self {
            handle,
            flex_basis,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            min_main: f32::NAN,
            max_main: f32::NAN,
            padding_border_main: 0.0,
            margin_main: 0.0,
        }
    }

    /// Hypothetical main size: the flex basis clamped by min/max.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#hypothetical-main-size>
    #[inline]
    pub fn hypothetical_main_size(&self) -> f32 {
        bound_within_min_max(self.flex_basis, self.min_main, self.max_main)
    }

    /// Hypothetical main size plus main-axis margins.
    #[inline]
    pub fn hypothetical_outer_size(&self) -> f32 {
        self.hypothetical_main_size() + self.margin_main
    }

    /// Clamp a target main size by min/max and the padding/border floor.
    #[inline]
    pub fn clamp_main_size(&self, target: f32) -> f32 {
        bound_axis(target, self.min_main, self.max_main, self.padding_border_main)
    }
}

#[cfg(test)]
mod tests;

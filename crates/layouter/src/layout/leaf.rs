//! Sizing of nodes that do not run the flex algorithm: measured leaves,
//! empty containers and containers whose size is fixed by the request.

use css_flexbox::FlexDirection;
use css_sizing::{MeasureMode, Size};
use indextree::NodeId;
use log::{trace, warn};

use super::LayoutInput;
use crate::node::{DirtyKind, NodeLayout};
use crate::style::Style;
use crate::tree::LayoutTree;

/// Content size reported by a measure function, with NaN treated as zero.
fn sanitize_measurement(id: NodeId, size: Size) -> Size {
    let clean = |value: f32, dimension: &str| {
        if value.is_nan() {
            warn!(target: "layouter::measure", "[MEASURE] {id:?} returned NaN {dimension}, using 0");
            0.0
        } else {
            value
        }
    };
    Size::new(clean(size.width, "width"), clean(size.height, "height"))
}

const fn sizes_to_content(mode: MeasureMode) -> bool {
    matches!(mode, MeasureMode::Undefined | MeasureMode::AtMost)
}

impl LayoutTree {
    /// Size a node that measures its own content.
    ///
    /// Both modes exact: the available size minus margins, no callback.
    /// Otherwise the measure function gets the available inner size and the
    /// content result is wrapped in padding and border.
    pub(super) fn measure_leaf(&mut self, id: NodeId, style: &Style, input: &LayoutInput) {
        let available = input.available;
        let pb_row = style.padding_and_border_for_axis(FlexDirection::Row, available.width);
        let pb_column = style.padding_and_border_for_axis(FlexDirection::Column, available.width);
        let margin_row = style.margin_for_axis(FlexDirection::Row, available.width);
        let margin_column = style.margin_for_axis(FlexDirection::Column, available.width);

        let measured = if input.width_mode == MeasureMode::Exactly
            && input.height_mode == MeasureMode::Exactly
        {
            Size::new(available.width - margin_row, available.height - margin_column)
        } else {
            let inner_width = if available.width.is_nan() {
                available.width
            } else {
                (available.width - margin_row - pb_row).max(0.0)
            };
            let inner_height = if available.height.is_nan() {
                available.height
            } else {
                (available.height - margin_column - pb_column).max(0.0)
            };
            let content = self
                .node_mut(id)
                .measure
                .as_mut()
                .map_or(Size::ZERO, |measure| {
                    measure.measure(inner_width, input.width_mode, inner_height, input.height_mode)
                });
            let content = sanitize_measurement(id, content);
            trace!(
                target: "layouter::measure",
                "[MEASURE] {id:?} {inner_width}x{inner_height} ({}/{}) → {}x{}",
                input.width_mode.label(),
                input.height_mode.label(),
                content.width,
                content.height
            );
            Size::new(
                if sizes_to_content(input.width_mode) {
                    content.width + pb_row
                } else {
                    available.width - margin_row
                },
                if sizes_to_content(input.height_mode) {
                    content.height + pb_column
                } else {
                    available.height - margin_column
                },
            )
        };

        self.node_mut(id).layout.measured = Size::new(
            style.bound_axis(FlexDirection::Row, measured.width, input.owner.width, input.owner.width),
            style.bound_axis(
                FlexDirection::Column,
                measured.height,
                input.owner.height,
                input.owner.width,
            ),
        );
    }

    /// Size a container without children: padding and border, unless the
    /// request fixes the size.
    pub(super) fn size_empty_container(&mut self, id: NodeId, style: &Style, input: &LayoutInput) {
        let owner = input.owner;
        let width = if sizes_to_content(input.width_mode) {
            style.padding_and_border_for_axis(FlexDirection::Row, owner.width)
        } else {
            input.available.width - style.margin_for_axis(FlexDirection::Row, owner.width)
        };
        let height = if sizes_to_content(input.height_mode) {
            style.padding_and_border_for_axis(FlexDirection::Column, owner.width)
        } else {
            input.available.height - style.margin_for_axis(FlexDirection::Column, owner.width)
        };
        self.node_mut(id).layout.measured = Size::new(
            style.bound_axis(FlexDirection::Row, width, owner.width, owner.width),
            style.bound_axis(FlexDirection::Column, height, owner.height, owner.width),
        );
    }

    /// Size a container straight from the request when its children cannot
    /// change the answer: both dimensions exact, or no room at all in an
    /// at-most dimension. Returns false when the children must be visited.
    pub(super) fn size_fixed_container(&mut self, id: NodeId, style: &Style, input: &LayoutInput) -> bool {
        let available = input.available;
        let no_room = |size: f32, mode: MeasureMode| {
            !size.is_nan() && mode == MeasureMode::AtMost && size <= 0.0
        };
        let both_exact =
            input.width_mode == MeasureMode::Exactly && input.height_mode == MeasureMode::Exactly;
        if !(no_room(available.width, input.width_mode)
            || no_room(available.height, input.height_mode)
            || both_exact)
        {
            return false;
        }

        let owner = input.owner;
        let fixed = |size: f32, mode: MeasureMode, margin: f32| {
            if size.is_nan() || (mode == MeasureMode::AtMost && size < 0.0) {
                0.0
            } else {
                size - margin
            }
        };
        let width = fixed(
            available.width,
            input.width_mode,
            style.margin_for_axis(FlexDirection::Row, owner.width),
        );
        let height = fixed(
            available.height,
            input.height_mode,
            style.margin_for_axis(FlexDirection::Column, owner.width),
        );
        trace!(target: "layouter::flex", "[FLEX-FIXED] {id:?} {width}x{height}");
        self.node_mut(id).layout.measured = Size::new(
            style.bound_axis(FlexDirection::Row, width, owner.width, owner.width),
            style.bound_axis(FlexDirection::Column, height, owner.height, owner.width),
        );
        true
    }

    /// Reset the layout of a hidden subtree to zero and mark it clean.
    pub(super) fn zero_out_layout(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.layout = NodeLayout::zeroed();
        node.has_new_layout = true;
        node.dirty = DirtyKind::NONE;
        for child in self.child_ids(id) {
            self.zero_out_layout(child);
        }
    }
}

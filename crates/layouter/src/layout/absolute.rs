//! Absolutely positioned children: sized from their own dimensions or from
//! opposing insets, then placed against the container's border box.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#abspos-items>

use css_flexbox::{Align, FlexDirection, FlexWrap, JustifyContent};
use css_sizing::{MeasureMode, Size};
use indextree::NodeId;
use log::trace;

use super::LayoutInput;
use super::container::FlexContainer;
use crate::style::Style;
use crate::tree::LayoutTree;

/// Where an absolute child ends up along one axis when it has no leading
/// inset and no trailing inset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Fallback {
    Start,
    Center,
    End,
}

impl LayoutTree {
    /// Size and place an absolutely positioned child of `container`. The
    /// container's own size must be final.
    pub(super) fn layout_absolute_child(&mut self, container: &FlexContainer, child: NodeId) {
        let size = self.absolute_child_size(container, child);
        self.layout_node_internal(
            child,
            LayoutInput {
                available: size,
                width_mode: MeasureMode::Exactly,
                height_mode: MeasureMode::Exactly,
                owner: container.available_inner,
                parent_direction: container.direction,
                perform_layout: true,
                reason: "abs-layout",
            },
        );

        let style = &self.node(child).style;
        let main_fallback = match container.style.justify_content {
            JustifyContent::Center => Fallback::Center,
            JustifyContent::FlexEnd => Fallback::End,
            JustifyContent::FlexStart
            | JustifyContent::SpaceBetween
            | JustifyContent::SpaceAround
            | JustifyContent::SpaceEvenly => Fallback::Start,
        };
        let align = container.style.align_item(style);
        let wrap_reverse = container.style.flex_wrap == FlexWrap::WrapReverse;
        let cross_fallback = if align == Align::Center {
            Fallback::Center
        } else if (align == Align::FlexEnd) ^ wrap_reverse {
            Fallback::End
        } else {
            Fallback::Start
        };

        self.place_absolute(container, child, container.axes.main, container.available_inner_main, main_fallback);
        self.place_absolute(container, child, container.axes.cross, container.available_inner_cross, cross_fallback);
    }

    /// Outer size of an absolute child, measuring its content for any
    /// dimension that neither its style nor its insets fix.
    fn absolute_child_size(&mut self, container: &FlexContainer, child: NodeId) -> Size {
        let inner = container.available_inner;
        let container_size = self.node(container.node).layout.measured;
        let style = &self.node(child).style;
        let margin_row = style.margin_for_axis(FlexDirection::Row, inner.width);
        let margin_column = style.margin_for_axis(FlexDirection::Column, inner.width);

        let mut width = inset_bounded_size(
            style,
            &container.style,
            FlexDirection::Row,
            container_size.width,
            inner.width,
            inner.width,
        );
        let mut height = inset_bounded_size(
            style,
            &container.style,
            FlexDirection::Column,
            container_size.height,
            inner.height,
            inner.width,
        );

        if let Some(ratio) = style.aspect_ratio {
            if width.is_nan() && !height.is_nan() {
                width = margin_row + (height - margin_column) * ratio;
            } else if height.is_nan() && !width.is_nan() {
                height = margin_column + (width - margin_row) / ratio;
            }
        }
        if !width.is_nan() && !height.is_nan() {
            return Size::new(width, height);
        }

        let exact_or_undefined = |size: f32| {
            if size.is_nan() {
                MeasureMode::Undefined
            } else {
                MeasureMode::Exactly
            }
        };
        let mut width_mode = exact_or_undefined(width);
        let height_mode = exact_or_undefined(height);
        // Content of a column container's absolute child wraps at the
        // container's width.
        let (container_width_mode, _) = container.modes(container.main_mode, container.cross_mode);
        if !container.main_is_row()
            && width.is_nan()
            && container_width_mode != MeasureMode::Undefined
            && inner.width > 0.0
        {
            width = inner.width;
            width_mode = MeasureMode::AtMost;
        }

        self.layout_node_internal(
            child,
            LayoutInput {
                available: Size::new(width, height),
                width_mode,
                height_mode,
                owner: inner,
                parent_direction: container.direction,
                perform_layout: false,
                reason: "abs-measure",
            },
        );
        let measured = self.node(child).layout.measured;
        Size::new(measured.width + margin_row, measured.height + margin_column)
    }

    /// Set the child's leading offset along `axis`.
    fn place_absolute(
        &mut self,
        container: &FlexContainer,
        child: NodeId,
        axis: FlexDirection,
        inset_basis: f32,
        fallback: Fallback,
    ) {
        let inner = container.available_inner;
        let dimension = axis.dimension();
        let container_size = self.node(container.node).layout.measured.get(dimension);
        let node = self.node(child);
        let style = &node.style;
        let size = node.layout.measured.get(dimension);
        let axis_size = if axis.is_row() { inner.width } else { inner.height };

        let position = if style.is_leading_position_defined(axis) {
            style.leading_position(axis, inset_basis)
                + container.style.leading_border(axis)
                + style.leading_margin(axis, inner.width)
        } else if style.is_trailing_position_defined(axis) {
            container_size
                - size
                - container.style.trailing_border(axis)
                - style.trailing_margin(axis, inner.width)
                - style.trailing_position(axis, axis_size)
        } else {
            match fallback {
                Fallback::Center => (container_size - size) / 2.0,
                Fallback::End => container_size - size,
                Fallback::Start => container.style.leading_border(axis) + style.leading_margin(axis, inner.width),
            }
        };
        let position = if position.is_nan() {
            container.style.leading_border(axis) + style.leading_margin(axis, inner.width)
        } else {
            position
        };
        trace!(target: "layouter::absolute", "[ABS] {child:?} {} offset={position}", axis.label());
        self.set_position_on(child, axis.leading_edge(), position);
    }
}

/// Outer size of an absolute child along `axis`: its declared size plus
/// margins, or the gap between a leading and a trailing inset, which the
/// margins sit inside. NaN when neither applies.
fn inset_bounded_size(
    style: &Style,
    container_style: &Style,
    axis: FlexDirection,
    container_size: f32,
    axis_size: f32,
    width_size: f32,
) -> f32 {
    let dimension = axis.dimension();
    if style.is_dimension_defined(axis, axis_size) {
        return style.resolved_dimension(dimension).resolve(axis_size) + style.margin_for_axis(axis, width_size);
    }
    if !(style.is_leading_position_defined(axis) && style.is_trailing_position_defined(axis)) {
        return f32::NAN;
    }
    let between = container_size
        - (container_style.leading_border(axis) + container_style.trailing_border(axis))
        - (style.leading_position(axis, axis_size) + style.trailing_position(axis, axis_size));
    style.bound_axis(axis, between, axis_size, width_size)
}

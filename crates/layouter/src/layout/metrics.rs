//! Style values resolved along a flex axis: margins, borders, padding,
//! insets and min/max bounds.
//!
//! Row axes consult the logical `start`/`end` edges first; every other lookup
//! goes through the physical edge the axis starts or ends at.

use css_box::{Edge, Sides};
use css_flexbox::{Align, FlexDirection};
use css_sizing::{Dimension, bound_axis, bound_within_min_max};
use css_values_units::{Value, defined_or};

use crate::style::Style;

/// Physical side of `sides`; zero for logical and shorthand edges.
#[inline]
pub(crate) fn side(sides: &Sides<f32>, edge: Edge) -> f32 {
    sides.get(edge).unwrap_or(0.0)
}

#[inline]
pub(crate) fn set_side(sides: &mut Sides<f32>, edge: Edge, value: f32) {
    if let Some(slot) = sides.get_mut(edge) {
        *slot = value;
    }
}

/// Borders only take point widths.
fn border_width(value: Value) -> f32 {
    match value {
        Value::Points(width) => width,
        Value::Undefined | Value::Auto | Value::Percent(_) => 0.0,
    }
}

const ZERO: Value = Value::Points(0.0);

impl Style {
    fn logical_margin(&self, axis: FlexDirection, logical: Edge, physical: Edge) -> Value {
        let own = self.margin.get(logical);
        if axis.is_row() && !own.is_undefined() {
            return own;
        }
        self.margin.computed(physical, ZERO)
    }

    pub(crate) fn leading_margin(&self, axis: FlexDirection, width_size: f32) -> f32 {
        let value = self.logical_margin(axis, Edge::Start, axis.leading_edge());
        defined_or(value.resolve_margin(width_size), 0.0)
    }

    pub(crate) fn trailing_margin(&self, axis: FlexDirection, width_size: f32) -> f32 {
        let value = self.logical_margin(axis, Edge::End, axis.trailing_edge());
        defined_or(value.resolve_margin(width_size), 0.0)
    }

    pub(crate) fn margin_for_axis(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.leading_margin(axis, width_size) + self.trailing_margin(axis, width_size)
    }

    pub(crate) fn is_leading_margin_auto(&self, axis: FlexDirection) -> bool {
        self.logical_margin(axis, Edge::Start, axis.leading_edge())
            .is_auto()
    }

    pub(crate) fn is_trailing_margin_auto(&self, axis: FlexDirection) -> bool {
        self.logical_margin(axis, Edge::End, axis.trailing_edge())
            .is_auto()
    }

    fn border_on(&self, axis: FlexDirection, logical: Edge, physical: Edge) -> f32 {
        if axis.is_row()
            && let Value::Points(width) = self.border.get(logical)
            && width >= 0.0
        {
            return width;
        }
        border_width(self.border.computed(physical, ZERO)).max(0.0)
    }

    pub(crate) fn leading_border(&self, axis: FlexDirection) -> f32 {
        self.border_on(axis, Edge::Start, axis.leading_edge())
    }

    pub(crate) fn trailing_border(&self, axis: FlexDirection) -> f32 {
        self.border_on(axis, Edge::End, axis.trailing_edge())
    }

    fn padding_on(&self, axis: FlexDirection, logical: Edge, physical: Edge, width_size: f32) -> f32 {
        let own = self.padding.get(logical).resolve(width_size);
        if axis.is_row() && own >= 0.0 {
            return own;
        }
        // f32::max drops NaN, so unresolvable percentages count as zero.
        self.padding
            .computed(physical, ZERO)
            .resolve(width_size)
            .max(0.0)
    }

    pub(crate) fn leading_padding(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.padding_on(axis, Edge::Start, axis.leading_edge(), width_size)
    }

    pub(crate) fn trailing_padding(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.padding_on(axis, Edge::End, axis.trailing_edge(), width_size)
    }

    pub(crate) fn leading_padding_and_border(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.leading_padding(axis, width_size) + self.leading_border(axis)
    }

    pub(crate) fn trailing_padding_and_border(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.trailing_padding(axis, width_size) + self.trailing_border(axis)
    }

    pub(crate) fn padding_and_border_for_axis(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.leading_padding_and_border(axis, width_size)
            + self.trailing_padding_and_border(axis, width_size)
    }

    //=========================================================================
    // Insets
    //=========================================================================

    fn inset(&self, axis: FlexDirection, logical: Edge, physical: Edge) -> Value {
        if axis.is_row() {
            let own = self.position.computed(logical, Value::Undefined);
            if own.is_defined() {
                return own;
            }
        }
        self.position.computed(physical, Value::Undefined)
    }

    pub(crate) fn is_leading_position_defined(&self, axis: FlexDirection) -> bool {
        self.inset(axis, Edge::Start, axis.leading_edge()).is_defined()
    }

    pub(crate) fn is_trailing_position_defined(&self, axis: FlexDirection) -> bool {
        self.inset(axis, Edge::End, axis.trailing_edge()).is_defined()
    }

    /// Leading inset resolved against `axis_size`; zero when unset.
    pub(crate) fn leading_position(&self, axis: FlexDirection, axis_size: f32) -> f32 {
        let value = self.inset(axis, Edge::Start, axis.leading_edge());
        if value.is_defined() {
            defined_or(value.resolve(axis_size), 0.0)
        } else {
            0.0
        }
    }

    pub(crate) fn trailing_position(&self, axis: FlexDirection, axis_size: f32) -> f32 {
        let value = self.inset(axis, Edge::End, axis.trailing_edge());
        if value.is_defined() {
            defined_or(value.resolve(axis_size), 0.0)
        } else {
            0.0
        }
    }

    /// Offset of a relatively positioned box: the leading inset when set,
    /// otherwise the negated trailing inset.
    pub(crate) fn relative_position(&self, axis: FlexDirection, axis_size: f32) -> f32 {
        if self.is_leading_position_defined(axis) {
            self.leading_position(axis, axis_size)
        } else {
            -self.trailing_position(axis, axis_size)
        }
    }

    //=========================================================================
    // Sizes and bounds
    //=========================================================================

    pub(crate) const fn dimension(&self, dimension: Dimension) -> Value {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    pub(crate) const fn min_dimension(&self, dimension: Dimension) -> Value {
        match dimension {
            Dimension::Width => self.min_width,
            Dimension::Height => self.min_height,
        }
    }

    pub(crate) const fn max_dimension(&self, dimension: Dimension) -> Value {
        match dimension {
            Dimension::Width => self.max_width,
            Dimension::Height => self.max_height,
        }
    }

    /// The size that applies to `dimension`: equal min and max pin it,
    /// otherwise the declared size.
    pub(crate) fn resolved_dimension(&self, dimension: Dimension) -> Value {
        let max = self.max_dimension(dimension);
        if max.is_defined() && max.approx_eq(self.min_dimension(dimension)) {
            return max;
        }
        self.dimension(dimension)
    }

    /// True when the box has a usable definite size along `axis`.
    pub(crate) fn is_dimension_defined(&self, axis: FlexDirection, owner_size: f32) -> bool {
        match self.resolved_dimension(axis.dimension()) {
            Value::Points(size) => size >= 0.0,
            Value::Percent(size) => size >= 0.0 && !owner_size.is_nan(),
            Value::Undefined | Value::Auto => false,
        }
    }

    /// Clamp `value` by the min/max sizes along `axis`.
    pub(crate) fn bound_within_min_max(&self, axis: FlexDirection, value: f32, axis_size: f32) -> f32 {
        let dimension = axis.dimension();
        bound_within_min_max(
            value,
            self.min_dimension(dimension).resolve(axis_size),
            self.max_dimension(dimension).resolve(axis_size),
        )
    }

    /// Clamp `value` by the min/max sizes along `axis`, never below the
    /// box's own padding and border.
    pub(crate) fn bound_axis(
        &self,
        axis: FlexDirection,
        value: f32,
        axis_size: f32,
        width_size: f32,
    ) -> f32 {
        let dimension = axis.dimension();
        bound_axis(
            value,
            self.min_dimension(dimension).resolve(axis_size),
            self.max_dimension(dimension).resolve(axis_size),
            self.padding_and_border_for_axis(axis, width_size),
        )
    }

    /// Effective alignment of `child` inside this container. Baseline
    /// alignment only exists for row containers.
    pub(crate) fn align_item(&self, child: &Self) -> Align {
        let align = if child.align_self == Align::Auto {
            self.align_items
        } else {
            child.align_self
        };
        if align == Align::Baseline && self.flex_direction.is_column() {
            Align::FlexStart
        } else {
            align
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::{percent, points};

    /// # Panics
    /// Panics if logical edges do not win on row axes.
    #[test]
    fn start_and_end_win_on_rows() {
        let mut style = Style::default();
        style.margin.set(Edge::Left, points(5.0));
        style.margin.set(Edge::Start, points(7.0));
        assert!((style.leading_margin(FlexDirection::Row, 100.0) - 7.0).abs() < f32::EPSILON);
        assert!((style.leading_margin(FlexDirection::Column, 100.0)).abs() < f32::EPSILON);

        style.margin.set(Edge::All, percent(10.0));
        assert!((style.trailing_margin(FlexDirection::Row, 200.0) - 20.0).abs() < f32::EPSILON);
        assert!((style.margin_for_axis(FlexDirection::Column, 200.0) - 40.0).abs() < f32::EPSILON);
    }

    /// # Panics
    /// Panics if borders and padding accept unusable values.
    #[test]
    fn borders_and_padding_floor_at_zero() {
        let mut style = Style::default();
        style.border.set(Edge::Top, points(-3.0));
        style.border.set(Edge::Bottom, percent(50.0));
        style.padding.set(Edge::Left, percent(10.0));
        assert!(style.leading_border(FlexDirection::Column).abs() < f32::EPSILON);
        assert!(style.trailing_border(FlexDirection::Column).abs() < f32::EPSILON);
        assert!(style.leading_padding(FlexDirection::Row, f32::NAN).abs() < f32::EPSILON);
        assert!((style.leading_padding(FlexDirection::Row, 50.0) - 5.0).abs() < f32::EPSILON);
    }

    /// # Panics
    /// Panics if relative offsets ignore the trailing inset.
    #[test]
    fn relative_position_falls_back_to_trailing() {
        let mut style = Style::default();
        style.position.set(Edge::Bottom, points(6.0));
        assert!(!style.is_leading_position_defined(FlexDirection::Column));
        assert!((style.relative_position(FlexDirection::Column, 100.0) + 6.0).abs() < f32::EPSILON);
        style.position.set(Edge::Top, percent(10.0));
        assert!((style.relative_position(FlexDirection::Column, 100.0) - 10.0).abs() < f32::EPSILON);
    }

    /// # Panics
    /// Panics if equal min and max sizes do not pin the dimension.
    #[test]
    fn equal_min_and_max_pin_the_size() {
        let mut style = Style::default();
        style.min_width = points(40.0);
        style.max_width = points(40.0);
        assert_eq!(style.resolved_dimension(Dimension::Width), points(40.0));
        assert!(style.is_dimension_defined(FlexDirection::Row, f32::NAN));

        style.height = percent(50.0);
        assert!(!style.is_dimension_defined(FlexDirection::Column, f32::NAN));
        assert!(style.is_dimension_defined(FlexDirection::Column, 10.0));
    }

    /// # Panics
    /// Panics if baseline alignment survives in a column container.
    #[test]
    fn baseline_needs_a_row_container() {
        let mut container = Style::default();
        let mut child = Style::default();
        child.align_self = Align::Baseline;
        assert_eq!(container.align_item(&child), Align::FlexStart);
        container.flex_direction = FlexDirection::Row;
        assert_eq!(container.align_item(&child), Align::Baseline);
        child.align_self = Align::Auto;
        assert_eq!(container.align_item(&child), Align::Stretch);
    }
}

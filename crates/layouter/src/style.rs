//! Node styles and the property identifiers used to read and write them.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#property-index>

use css_box::{Edge, Edges};
use css_flexbox::{
    Align, Direction, Display, FlexDirection, FlexWrap, JustifyContent, Overflow, PositionType,
};
use css_values_units::Value;
use serde::{Deserialize, Serialize};

/// Every style property a node carries.
///
/// Optional numbers use `None` for "not set"; lengths use
/// [`Value::Undefined`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_content: Align,
    pub align_items: Align,
    pub align_self: Align,
    pub position_type: PositionType,
    pub flex_wrap: FlexWrap,
    pub overflow: Overflow,
    pub display: Display,
    pub flex: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Value,
    pub margin: Edges,
    pub position: Edges,
    pub padding: Edges,
    pub border: Edges,
    pub width: Value,
    pub height: Value,
    pub min_width: Value,
    pub min_height: Value,
    pub max_width: Value,
    pub max_height: Value,
    /// Width divided by height.
    pub aspect_ratio: Option<f32>,
    /// Gap between items along a row (between columns).
    pub column_gap: Value,
    /// Gap between items along a column, and between wrapped lines of a row.
    pub row_gap: Value,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            align_content: Align::FlexStart,
            align_items: Align::Stretch,
            align_self: Align::Auto,
            position_type: PositionType::Relative,
            flex_wrap: FlexWrap::NoWrap,
            overflow: Overflow::Visible,
            display: Display::Flex,
            flex: None,
            flex_grow: None,
            flex_shrink: None,
            flex_basis: Value::Auto,
            margin: Edges::UNDEFINED,
            position: Edges::UNDEFINED,
            padding: Edges::UNDEFINED,
            border: Edges::UNDEFINED,
            width: Value::Auto,
            height: Value::Auto,
            min_width: Value::Undefined,
            min_height: Value::Undefined,
            max_width: Value::Undefined,
            max_height: Value::Undefined,
            aspect_ratio: None,
            column_gap: Value::Undefined,
            row_gap: Value::Undefined,
        }
    }
}

impl Style {
    /// Initial values as CSS defines them: rows, and stretched lines.
    pub fn web() -> Self {
        Self {
            flex_direction: FlexDirection::Row,
            align_content: Align::Stretch,
            ..Self::default()
        }
    }

    /// Apply `property`. Returns true when the stored value changed.
    ///
    /// NaN numbers are treated as unset, and a non-positive or non-finite
    /// aspect ratio is ignored.
    pub fn apply(&mut self, property: StyleProperty) -> bool {
        match property {
            StyleProperty::Direction(value) => replace(&mut self.direction, value),
            StyleProperty::FlexDirection(value) => replace(&mut self.flex_direction, value),
            StyleProperty::JustifyContent(value) => replace(&mut self.justify_content, value),
            StyleProperty::AlignContent(value) => replace(&mut self.align_content, value),
            StyleProperty::AlignItems(value) => replace(&mut self.align_items, value),
            StyleProperty::AlignSelf(value) => replace(&mut self.align_self, value),
            StyleProperty::PositionType(value) => replace(&mut self.position_type, value),
            StyleProperty::FlexWrap(value) => replace(&mut self.flex_wrap, value),
            StyleProperty::Overflow(value) => replace(&mut self.overflow, value),
            StyleProperty::Display(value) => replace(&mut self.display, value),
            StyleProperty::Flex(value) => replace(&mut self.flex, number(value)),
            StyleProperty::FlexGrow(value) => replace(&mut self.flex_grow, number(value)),
            StyleProperty::FlexShrink(value) => replace(&mut self.flex_shrink, number(value)),
            StyleProperty::FlexBasis(value) => replace_value(&mut self.flex_basis, value),
            StyleProperty::Margin(edge, value) => self.margin.set(edge, value),
            StyleProperty::Position(edge, value) => self.position.set(edge, value),
            StyleProperty::Padding(edge, value) => self.padding.set(edge, value),
            StyleProperty::Border(edge, value) => self.border.set(edge, value),
            StyleProperty::Width(value) => replace_value(&mut self.width, value),
            StyleProperty::Height(value) => replace_value(&mut self.height, value),
            StyleProperty::MinWidth(value) => replace_value(&mut self.min_width, value),
            StyleProperty::MinHeight(value) => replace_value(&mut self.min_height, value),
            StyleProperty::MaxWidth(value) => replace_value(&mut self.max_width, value),
            StyleProperty::MaxHeight(value) => replace_value(&mut self.max_height, value),
            StyleProperty::AspectRatio(value) => {
                let ratio = value.filter(|ratio| ratio.is_finite() && *ratio > 0.0);
                replace(&mut self.aspect_ratio, ratio)
            }
            StyleProperty::ColumnGap(value) => replace_value(&mut self.column_gap, value),
            StyleProperty::RowGap(value) => replace_value(&mut self.row_gap, value),
        }
    }

    /// Read the property identified by `id`.
    pub fn get(&self, id: PropertyId) -> StyleProperty {
        match id {
            PropertyId::Direction => StyleProperty::Direction(self.direction),
            PropertyId::FlexDirection => StyleProperty::FlexDirection(self.flex_direction),
            PropertyId::JustifyContent => StyleProperty::JustifyContent(self.justify_content),
            PropertyId::AlignContent => StyleProperty::AlignContent(self.align_content),
            PropertyId::AlignItems => StyleProperty::AlignItems(self.align_items),
            PropertyId::AlignSelf => StyleProperty::AlignSelf(self.align_self),
            PropertyId::PositionType => StyleProperty::PositionType(self.position_type),
            PropertyId::FlexWrap => StyleProperty::FlexWrap(self.flex_wrap),
            PropertyId::Overflow => StyleProperty::Overflow(self.overflow),
            PropertyId::Display => StyleProperty::Display(self.display),
            PropertyId::Flex => StyleProperty::Flex(self.flex),
            PropertyId::FlexGrow => StyleProperty::FlexGrow(self.flex_grow),
            PropertyId::FlexShrink => StyleProperty::FlexShrink(self.flex_shrink),
            PropertyId::FlexBasis => StyleProperty::FlexBasis(self.flex_basis),
            PropertyId::Margin(edge) => StyleProperty::Margin(edge, self.margin.get(edge)),
            PropertyId::Position(edge) => StyleProperty::Position(edge, self.position.get(edge)),
            PropertyId::Padding(edge) => StyleProperty::Padding(edge, self.padding.get(edge)),
            PropertyId::Border(edge) => StyleProperty::Border(edge, self.border.get(edge)),
            PropertyId::Width => StyleProperty::Width(self.width),
            PropertyId::Height => StyleProperty::Height(self.height),
            PropertyId::MinWidth => StyleProperty::MinWidth(self.min_width),
            PropertyId::MinHeight => StyleProperty::MinHeight(self.min_height),
            PropertyId::MaxWidth => StyleProperty::MaxWidth(self.max_width),
            PropertyId::MaxHeight => StyleProperty::MaxHeight(self.max_height),
            PropertyId::AspectRatio => StyleProperty::AspectRatio(self.aspect_ratio),
            PropertyId::ColumnGap => StyleProperty::ColumnGap(self.column_gap),
            PropertyId::RowGap => StyleProperty::RowGap(self.row_gap),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn replace_value(slot: &mut Value, value: Value) -> bool {
    if slot.approx_eq(value) {
        return false;
    }
    *slot = value;
    true
}

fn number(value: Option<f32>) -> Option<f32> {
    value.filter(|number| !number.is_nan())
}

/// A style property together with its value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StyleProperty {
    Direction(Direction),
    FlexDirection(FlexDirection),
    JustifyContent(JustifyContent),
    AlignContent(Align),
    AlignItems(Align),
    AlignSelf(Align),
    PositionType(PositionType),
    FlexWrap(FlexWrap),
    Overflow(Overflow),
    Display(Display),
    Flex(Option<f32>),
    FlexGrow(Option<f32>),
    FlexShrink(Option<f32>),
    FlexBasis(Value),
    Margin(Edge, Value),
    Position(Edge, Value),
    Padding(Edge, Value),
    Border(Edge, Value),
    Width(Value),
    Height(Value),
    MinWidth(Value),
    MinHeight(Value),
    MaxWidth(Value),
    MaxHeight(Value),
    AspectRatio(Option<f32>),
    ColumnGap(Value),
    RowGap(Value),
}

impl StyleProperty {
    /// Identifier of the property this value is for.
    pub const fn id(self) -> PropertyId {
        match self {
            Self::Direction(_) => PropertyId::Direction,
            Self::FlexDirection(_) => PropertyId::FlexDirection,
            Self::JustifyContent(_) => PropertyId::JustifyContent,
            Self::AlignContent(_) => PropertyId::AlignContent,
            Self::AlignItems(_) => PropertyId::AlignItems,
            Self::AlignSelf(_) => PropertyId::AlignSelf,
            Self::PositionType(_) => PropertyId::PositionType,
            Self::FlexWrap(_) => PropertyId::FlexWrap,
            Self::Overflow(_) => PropertyId::Overflow,
            Self::Display(_) => PropertyId::Display,
            Self::Flex(_) => PropertyId::Flex,
            Self::FlexGrow(_) => PropertyId::FlexGrow,
            Self::FlexShrink(_) => PropertyId::FlexShrink,
            Self::FlexBasis(_) => PropertyId::FlexBasis,
            Self::Margin(edge, _) => PropertyId::Margin(edge),
            Self::Position(edge, _) => PropertyId::Position(edge),
            Self::Padding(edge, _) => PropertyId::Padding(edge),
            Self::Border(edge, _) => PropertyId::Border(edge),
            Self::Width(_) => PropertyId::Width,
            Self::Height(_) => PropertyId::Height,
            Self::MinWidth(_) => PropertyId::MinWidth,
            Self::MinHeight(_) => PropertyId::MinHeight,
            Self::MaxWidth(_) => PropertyId::MaxWidth,
            Self::MaxHeight(_) => PropertyId::MaxHeight,
            Self::AspectRatio(_) => PropertyId::AspectRatio,
            Self::ColumnGap(_) => PropertyId::ColumnGap,
            Self::RowGap(_) => PropertyId::RowGap,
        }
    }
}

/// Identifies a style property; edge properties carry their edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyId {
    Direction,
    FlexDirection,
    JustifyContent,
    AlignContent,
    AlignItems,
    AlignSelf,
    PositionType,
    FlexWrap,
    Overflow,
    Display,
    Flex,
    FlexGrow,
    FlexShrink,
    FlexBasis,
    Margin(Edge),
    Position(Edge),
    Padding(Edge),
    Border(Edge),
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    AspectRatio,
    ColumnGap,
    RowGap,
}

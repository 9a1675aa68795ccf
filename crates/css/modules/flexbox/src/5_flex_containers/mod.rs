//! Flex Containers: container properties and enums
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use serde::{Deserialize, Serialize};

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
///
/// The engine's initial value is `column`; hosts that want the CSS initial
/// value opt into it through their web-defaults configuration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FlexDirection {
    #[default]
    Column,
    ColumnReverse,
    Row,
    RowReverse,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Inline base direction.
///
/// Spec: <https://www.w3.org/TR/css-writing-modes-4/#direction>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Take the direction of the parent box.
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

impl FlexDirection {
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[inline]
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }

    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }

    /// Map a row direction through the inline base direction: under RTL a
    /// `row` runs right to left, which is laid out as `row-reverse`.
    #[inline]
    pub const fn resolve(self, direction: Direction) -> Self {
        match (self, direction) {
            (Self::Row, Direction::Rtl) => Self::RowReverse,
            (Self::RowReverse, Direction::Rtl) => Self::Row,
            (flex_direction, _) => flex_direction,
        }
    }

    /// The cross axis for a main axis of `self`.
    #[inline]
    pub const fn cross(self, direction: Direction) -> Self {
        if self.is_column() {
            Self::Row.resolve(direction)
        } else {
            Self::Column
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::ColumnReverse => "column-reverse",
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
        }
    }
}

impl FlexWrap {
    #[inline]
    pub const fn is_wrapping(self) -> bool {
        !matches!(self, Self::NoWrap)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoWrap => "nowrap",
            Self::Wrap => "wrap",
            Self::WrapReverse => "wrap-reverse",
        }
    }
}

impl Direction {
    /// Resolve `inherit` against the parent's resolved direction. A root
    /// without a direction lays out left to right.
    #[inline]
    pub const fn resolve(self, parent: Self) -> Self {
        match (self, parent) {
            (Self::Inherit, Self::Inherit) => Self::Ltr,
            (Self::Inherit, inherited) => inherited,
            (own, _) => own,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

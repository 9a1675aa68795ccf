//! Axis resolution: main/cross axes and the box edges they start and end at
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>

use crate::chapter5::{Direction, FlexDirection};
use css_box::Edge;
use css_sizing::Dimension;

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// Main axis, with RTL already applied to row directions.
    pub main: FlexDirection,
    /// Cross axis, perpendicular to `main`.
    pub cross: FlexDirection,
}

impl Axes {
    #[inline]
    pub const fn main_is_row(self) -> bool {
        self.main.is_row()
    }
}

/// Resolve main/cross axes given flex-direction and the resolved direction.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_axes(flex_direction: FlexDirection, direction: Direction) -> Axes {
    Axes {
        main: flex_direction.resolve(direction),
        cross: flex_direction.cross(direction),
    }
}

impl FlexDirection {
    /// The physical edge an axis starts at; also the edge its positions are
    /// measured from.
    #[inline]
    pub const fn leading_edge(self) -> Edge {
        match self {
            Self::Column => Edge::Top,
            Self::ColumnReverse => Edge::Bottom,
            Self::Row => Edge::Left,
            Self::RowReverse => Edge::Right,
        }
    }

    /// The physical edge an axis ends at.
    #[inline]
    pub const fn trailing_edge(self) -> Edge {
        match self {
            Self::Column => Edge::Bottom,
            Self::ColumnReverse => Edge::Top,
            Self::Row => Edge::Right,
            Self::RowReverse => Edge::Left,
        }
    }

    /// The dimension measured along an axis.
    #[inline]
    pub const fn dimension(self) -> Dimension {
        if self.is_row() {
            Dimension::Width
        } else {
            Dimension::Height
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if axes resolution does not match expected mapping.
    fn axes_for_ltr_and_rtl() {
        let row = resolve_axes(FlexDirection::Row, Direction::Ltr);
        assert_eq!(row.main, FlexDirection::Row);
        assert_eq!(row.cross, FlexDirection::Column);
        assert!(row.main_is_row());

        let column_rtl = resolve_axes(FlexDirection::Column, Direction::Rtl);
        assert_eq!(column_rtl.main, FlexDirection::Column);
        assert_eq!(column_rtl.cross, FlexDirection::RowReverse);

        let row_rtl = resolve_axes(FlexDirection::Row, Direction::Rtl);
        assert_eq!(row_rtl.main, FlexDirection::RowReverse);
    }

    #[test]
    /// # Panics
    /// Panics if leading/trailing edges are not opposite each other.
    fn leading_and_trailing_edges_oppose() {
        for axis in [
            FlexDirection::Column,
            FlexDirection::ColumnReverse,
            FlexDirection::Row,
            FlexDirection::RowReverse,
        ] {
            assert_ne!(axis.leading_edge(), axis.trailing_edge());
        }
        assert_eq!(FlexDirection::RowReverse.leading_edge(), Edge::Right);
        assert_eq!(FlexDirection::ColumnReverse.trailing_edge(), Edge::Top);
        assert_eq!(FlexDirection::Row.dimension(), Dimension::Width);
        assert_eq!(FlexDirection::ColumnReverse.dimension(), Dimension::Height);
    }
}

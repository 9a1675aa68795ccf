//! CSS Box Model Module Level 3: Box edges, margins, borders, padding.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Styles store box edges per [`Edge`], including the logical `start`/`end`
//! edges and the `horizontal`/`vertical`/`all` shorthands. Layout results are
//! always physical and are reported through [`Sides`].

pub mod layout_unit;
pub use layout_unit::LayoutUnit;

use css_values_units::Value;
use serde::{Deserialize, Serialize};

/// A box edge as addressed by style properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
    /// Leading edge of the inline axis (left in LTR, right in RTL).
    Start,
    /// Trailing edge of the inline axis.
    End,
    /// Shorthand for left, right, start and end.
    Horizontal,
    /// Shorthand for top and bottom.
    Vertical,
    /// Shorthand for every edge.
    All,
}

impl Edge {
    pub const COUNT: usize = 9;

    pub const ALL_EDGES: [Self; Self::COUNT] = [
        Self::Left,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Start,
        Self::End,
        Self::Horizontal,
        Self::Vertical,
        Self::All,
    ];

    /// The four physical edges, in `left, top, right, bottom` order.
    pub const PHYSICAL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Top => 1,
            Self::Right => 2,
            Self::Bottom => 3,
            Self::Start => 4,
            Self::End => 5,
            Self::Horizontal => 6,
            Self::Vertical => 7,
            Self::All => 8,
        }
    }

    /// True for `horizontal`, `vertical` and `all`.
    #[inline]
    pub const fn is_shorthand(self) -> bool {
        matches!(self, Self::Horizontal | Self::Vertical | Self::All)
    }

    /// Lower-case CSS-like name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Start => "start",
            Self::End => "end",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::All => "all",
        }
    }
}

/// Nine style values, one per [`Edge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges([Value; Edge::COUNT]);

impl Edges {
    /// Every edge undefined.
    pub const UNDEFINED: Self = Self([Value::Undefined; Edge::COUNT]);

    /// The value stored for `edge`, without fallback.
    #[inline]
    pub const fn get(&self, edge: Edge) -> Value {
        self.0[edge.index()]
    }

    /// Store `value` on `edge`. Returns true when the stored value changed.
    pub fn set(&mut self, edge: Edge, value: Value) -> bool {
        let slot = &mut self.0[edge.index()];
        if slot.approx_eq(value) {
            return false;
        }
        *slot = value;
        true
    }

    /// The value that applies to `edge` after shorthand fallback.
    ///
    /// Lookup order: the edge itself, then `vertical` for top/bottom or
    /// `horizontal` for left/right/start/end, then `all`. The logical edges
    /// never fall back to `default`; they stay undefined so that the physical
    /// edge can be consulted instead.
    pub fn computed(&self, edge: Edge, default: Value) -> Value {
        let own = self.get(edge);
        if !own.is_undefined() {
            return own;
        }
        let axis = match edge {
            Edge::Top | Edge::Bottom => Some(Edge::Vertical),
            Edge::Left | Edge::Right | Edge::Start | Edge::End => Some(Edge::Horizontal),
            Edge::Horizontal | Edge::Vertical | Edge::All => None,
        };
        if let Some(axis_edge) = axis
            && !self.get(axis_edge).is_undefined()
        {
            return self.get(axis_edge);
        }
        if !self.get(Edge::All).is_undefined() {
            return self.get(Edge::All);
        }
        if matches!(edge, Edge::Start | Edge::End) {
            return Value::Undefined;
        }
        default
    }

    /// Iterate over the edges that hold a value.
    pub fn defined(&self) -> impl Iterator<Item = (Edge, Value)> + '_ {
        Edge::ALL_EDGES
            .into_iter()
            .map(|edge| (edge, self.get(edge)))
            .filter(|(_, value)| !value.is_undefined())
    }
}

/// Per physical side results, in `left, top, right, bottom` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sides<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl<T: Copy> Sides<T> {
    pub const fn uniform(value: T) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Value of a physical side; `None` for logical and shorthand edges.
    pub const fn get(&self, edge: Edge) -> Option<T> {
        match edge {
            Edge::Left => Some(self.left),
            Edge::Top => Some(self.top),
            Edge::Right => Some(self.right),
            Edge::Bottom => Some(self.bottom),
            Edge::Start | Edge::End | Edge::Horizontal | Edge::Vertical | Edge::All => None,
        }
    }

    /// Mutable access to a physical side; `None` for logical and shorthand edges.
    pub const fn get_mut(&mut self, edge: Edge) -> Option<&mut T> {
        match edge {
            Edge::Left => Some(&mut self.left),
            Edge::Top => Some(&mut self.top),
            Edge::Right => Some(&mut self.right),
            Edge::Bottom => Some(&mut self.bottom),
            Edge::Start | Edge::End | Edge::Horizontal | Edge::Vertical | Edge::All => None,
        }
    }
}

impl Sides<f32> {
    /// Every side NaN.
    pub const UNDEFINED: Self = Self::uniform(f32::NAN);

    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

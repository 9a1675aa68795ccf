//! Flexbox layout for trees of boxes.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! A [`LayoutTree`] owns an arena of nodes, each with a [`Style`], optional
//! host callbacks and a cached layout. [`LayoutTree::calculate_layout`] runs
//! the flex algorithm from a root, reusing cached results for subtrees that
//! did not change, and snaps the result to the pixel grid.
//!
//! ```
//! use layouter::{Direction, FlexDirection, LayoutTree, StyleProperty, points};
//!
//! # fn main() -> Result<(), layouter::LayoutError> {
//! let mut tree = LayoutTree::new();
//! let root = tree.new_node();
//! tree.set(root, StyleProperty::FlexDirection(FlexDirection::Row))?;
//! tree.set(root, StyleProperty::Width(points(100.0)))?;
//! tree.set(root, StyleProperty::Height(points(40.0)))?;
//!
//! let child = tree.new_node();
//! tree.set(child, StyleProperty::FlexGrow(Some(1.0)))?;
//! tree.add_child(root, child)?;
//!
//! tree.calculate_layout(root, None, None, Direction::Ltr)?;
//! let layout = tree.layout(child)?;
//! assert_eq!((layout.width, layout.height), (100.0, 40.0));
//! # Ok(())
//! # }
//! ```

mod cache;
mod computed;
mod config;
mod error;
mod layout;
mod node;
mod printing;
mod rounding;
mod style;
mod tree;

pub use computed::Layout;
pub use config::Config;
pub use error::LayoutError;
pub use node::{Baseline, DirtiedCallback, DirtyKind, Measure, NodeType};
pub use printing::{PrintOptions, TreePrinter};
pub use rounding::{GridRounding, PixelRounding, round_value_to_pixel_grid};
pub use style::{PropertyId, Style, StyleProperty};
pub use tree::LayoutTree;

pub use css_box::{Edge, Edges, Sides};
pub use css_flexbox::{
    Align, Direction, Display, FlexDirection, FlexWrap, JustifyContent, Overflow, PositionType,
};
pub use css_sizing::{MeasureMode, Size};
pub use css_values_units::{ParseError, Value, auto, parse_value, percent, points};
pub use indextree::NodeId;

//! CSS Flexible Box Layout Module Level 1: Flex formatting context.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! Pure flexbox algorithms with no knowledge of any node tree: callers feed
//! per-item inputs and receive sizes and offsets back.

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §4: Flex Formatting Context
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// Spec: §5: Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6-7: Flex Items and Flexibility
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §5.1 and §2: Axes, main/cross edges
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §8-9: Alignment and the flex layout algorithm
#[path = "8_single_line_layout/mod.rs"]
/// Line breaking, flexible lengths, justification and cross-axis alignment (§§8-9)
mod chapter8;

pub use chapter4::{Display, Overflow, PositionType};
pub use chapter5::{Direction, FlexDirection, FlexWrap};
pub use chapter6::{
    FlexFactors, ItemRef, ItemStyle, collect_flex_items, is_flex_item, resolve_flex_basis,
    resolve_flex_grow, resolve_flex_shrink,
};
pub use chapter7::{Axes, resolve_axes};
pub use chapter8::{
    Align, AlignContentSpacing, FlexChild, FlexLine, FlexResolution, JustifyContent,
    JustifySpacing, LineBaseline, align_content_params, auto_margin_share, break_into_lines,
    cross_offset_in_line, justify_params, resolve_flexible_lengths,
};

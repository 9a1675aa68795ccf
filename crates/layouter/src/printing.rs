//! Debug rendering of a layout tree as nested `<div>` elements.
//!
//! ```text
//! <div layout="width: 100; height: 50; top: 0; left: 0;" style="flex-direction: row; width: 100px; ">
//!   <div layout="width: 50; height: 50; top: 0; left: 0;" style="flex-grow: 1; "></div>
//! </div>
//! ```
//!
//! Only style values that differ from the tree's initial style are printed.

use std::fmt;

use css_box::Edges;
use css_values_units::Value;
use indextree::NodeId;

use crate::LayoutError;
use crate::style::Style;
use crate::tree::LayoutTree;

/// What [`LayoutTree::print_tree`] includes. Options can be combined.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrintOptions(u8);

impl PrintOptions {
    /// Computed position and size.
    pub const LAYOUT: Self = Self(1 << 0);
    /// Style values that differ from the initial style.
    pub const STYLE: Self = Self(1 << 1);
    /// Descend into children.
    pub const CHILDREN: Self = Self(1 << 2);
    pub const ALL: Self = Self(Self::LAYOUT.0 | Self::STYLE.0 | Self::CHILDREN.0);

    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::ALL
    }
}

/// [`fmt::Display`] adapter behind [`LayoutTree::print_tree`].
pub struct TreePrinter<'tree> {
    tree: &'tree LayoutTree,
    root: NodeId,
    options: PrintOptions,
    initial: Style,
}

struct ValueText(Value);

impl fmt::Display for ValueText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Points(points) => write!(f, "{points}px"),
            Value::Percent(percent) => write!(f, "{percent}%"),
            Value::Auto => f.write_str("auto"),
            Value::Undefined => f.write_str("undefined"),
        }
    }
}

fn write_indent(out: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

fn keyword(out: &mut fmt::Formatter<'_>, name: &str, value: &str, initial: &str) -> fmt::Result {
    if value == initial {
        return Ok(());
    }
    write!(out, "{name}: {value}; ")
}

fn length(out: &mut fmt::Formatter<'_>, name: &str, value: Value, initial: Value) -> fmt::Result {
    if value.approx_eq(initial) {
        return Ok(());
    }
    write!(out, "{name}: {}; ", ValueText(value))
}

fn number(out: &mut fmt::Formatter<'_>, name: &str, value: Option<f32>, initial: Option<f32>) -> fmt::Result {
    match value {
        Some(number) if value != initial => write!(out, "{name}: {number}; "),
        _ => Ok(()),
    }
}

/// `prefix-edge: value;` for every edge set differently from `initial`.
/// An empty prefix prints bare edge names, as insets are written.
fn edges(out: &mut fmt::Formatter<'_>, prefix: &str, values: &Edges, initial: &Edges) -> fmt::Result {
    for (edge, value) in values.defined() {
        if value.approx_eq(initial.get(edge)) {
            continue;
        }
        if prefix.is_empty() {
            write!(out, "{}: {}; ", edge.name(), ValueText(value))?;
        } else {
            write!(out, "{prefix}-{}: {}; ", edge.name(), ValueText(value))?;
        }
    }
    Ok(())
}

fn write_style(out: &mut fmt::Formatter<'_>, style: &Style, initial: &Style) -> fmt::Result {
    keyword(out, "direction", style.direction.label(), initial.direction.label())?;
    keyword(out, "flex-direction", style.flex_direction.label(), initial.flex_direction.label())?;
    keyword(out, "justify-content", style.justify_content.label(), initial.justify_content.label())?;
    keyword(out, "align-items", style.align_items.label(), initial.align_items.label())?;
    keyword(out, "align-content", style.align_content.label(), initial.align_content.label())?;
    keyword(out, "align-self", style.align_self.label(), initial.align_self.label())?;
    keyword(out, "flex-wrap", style.flex_wrap.label(), initial.flex_wrap.label())?;
    keyword(out, "overflow", style.overflow.label(), initial.overflow.label())?;
    keyword(out, "display", style.display.label(), initial.display.label())?;
    keyword(out, "position", style.position_type.label(), initial.position_type.label())?;
    number(out, "flex", style.flex, initial.flex)?;
    number(out, "flex-grow", style.flex_grow, initial.flex_grow)?;
    number(out, "flex-shrink", style.flex_shrink, initial.flex_shrink)?;
    length(out, "flex-basis", style.flex_basis, initial.flex_basis)?;
    edges(out, "margin", &style.margin, &initial.margin)?;
    edges(out, "padding", &style.padding, &initial.padding)?;
    edges(out, "border", &style.border, &initial.border)?;
    edges(out, "", &style.position, &initial.position)?;
    length(out, "width", style.width, initial.width)?;
    length(out, "height", style.height, initial.height)?;
    length(out, "min-width", style.min_width, initial.min_width)?;
    length(out, "min-height", style.min_height, initial.min_height)?;
    length(out, "max-width", style.max_width, initial.max_width)?;
    length(out, "max-height", style.max_height, initial.max_height)?;
    number(out, "aspect-ratio", style.aspect_ratio, initial.aspect_ratio)?;
    length(out, "column-gap", style.column_gap, initial.column_gap)?;
    length(out, "row-gap", style.row_gap, initial.row_gap)
}

impl TreePrinter<'_> {
    fn fmt_node(&self, out: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let node = self.tree.node(id);
        write_indent(out, depth)?;
        out.write_str("<div")?;
        if self.options.contains(PrintOptions::LAYOUT) {
            let layout = &node.layout;
            write!(
                out,
                " layout=\"width: {}; height: {}; top: {}; left: {};\"",
                layout.dimensions.width, layout.dimensions.height, layout.position.top, layout.position.left
            )?;
        }
        if self.options.contains(PrintOptions::STYLE) {
            out.write_str(" style=\"")?;
            write_style(out, &node.style, &self.initial)?;
            out.write_str("\"")?;
        }
        if node.measure.is_some() {
            out.write_str(" has-custom-measure=\"true\"")?;
        }
        out.write_str(">")?;

        let children = self.tree.child_ids(id);
        if self.options.contains(PrintOptions::CHILDREN) && !children.is_empty() {
            writeln!(out)?;
            for child in children {
                self.fmt_node(out, child, depth + 1)?;
            }
            write_indent(out, depth)?;
        }
        writeln!(out, "</div>")
    }
}

impl fmt::Display for TreePrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root, 0)
    }
}

impl LayoutTree {
    /// Render the subtree at `node` lazily; `node` must exist.
    pub(crate) fn display_tree(&self, node: NodeId, options: PrintOptions) -> TreePrinter<'_> {
        TreePrinter {
            tree: self,
            root: node,
            options,
            initial: self.initial_style(),
        }
    }

    /// Render the subtree at `node` as nested `<div>` elements.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn print_tree(&self, node: NodeId, options: PrintOptions) -> Result<String, LayoutError> {
        self.checked(node)?;
        Ok(self.display_tree(node, options).to_string())
    }
}

impl fmt::Debug for LayoutTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LAYOUT")?;
        let roots = self
            .arena
            .iter()
            .filter(|entry| !entry.is_removed() && entry.parent().is_none())
            .filter_map(|entry| self.arena.get_node_id(entry));
        for root in roots {
            write!(f, "{}", self.display_tree(root, PrintOptions::ALL))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if options do not combine.
    #[test]
    fn options_combine() {
        let options = PrintOptions::LAYOUT.or(PrintOptions::CHILDREN);
        assert!(options.contains(PrintOptions::LAYOUT));
        assert!(!options.contains(PrintOptions::STYLE));
        assert!(PrintOptions::ALL.contains(options));
        assert_eq!(PrintOptions::default(), PrintOptions::ALL);
    }

    /// # Panics
    /// Panics if values render without units.
    #[test]
    fn values_render_with_units() {
        assert_eq!(ValueText(Value::Points(12.5)).to_string(), "12.5px");
        assert_eq!(ValueText(Value::Percent(50.0)).to_string(), "50%");
        assert_eq!(ValueText(Value::Auto).to_string(), "auto");
    }
}

//! Auto margin resolution for flex items.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#auto-margins>

use css_box::LayoutUnit;

/// Split positive free space over `auto_margin_count` auto margins.
///
/// Returns `(first, rest)`: the first auto margin on the line receives
/// `first`, every other one `rest`. Negative free space gives auto margins
/// nothing.
pub fn auto_margin_share(free_space: f32, auto_margin_count: usize) -> (f32, f32) {
    if auto_margin_count == 0 || free_space.is_nan() || free_space <= 0.0 {
        return (0.0, 0.0);
    }
    LayoutUnit::distribute(free_space, auto_margin_count)
}

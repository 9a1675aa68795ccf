//! Main-axis justification.
//!
//! Spec: <https://www.w3.org/TR/css-align-3/#propdef-justify-content>

use css_box::LayoutUnit;
use log::debug;

use super::super::JustifyContent;

/// Space placed before the first item and between items of a line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct JustifySpacing {
    /// Space before the first item.
    pub leading: f32,
    /// Space after the first item.
    pub first_between: f32,
    /// Space after every later item.
    pub between: f32,
}

impl JustifySpacing {
    /// Space that follows the item at `index_in_line`.
    #[inline]
    pub const fn between_after(&self, index_in_line: usize) -> f32 {
        if index_in_line == 0 {
            self.first_between
        } else {
            self.between
        }
    }
}

/// Compute justify-content spacing for a line (excluding CSS gaps).
///
/// Spacing is split in 1/64px units; the remainder of each split goes to the
/// first gap, so the gaps always add back up to `remaining`. Center and
/// flex-end also shift items for negative free space; the distributed modes
/// never space items closer than they already are.
pub fn justify_params(
    justify: JustifyContent,
    remaining: f32,
    items_on_line: usize,
) -> JustifySpacing {
    if remaining.is_nan() || items_on_line == 0 {
        return JustifySpacing::default();
    }
    let spacing = match justify {
        JustifyContent::FlexStart => JustifySpacing::default(),
        JustifyContent::Center => JustifySpacing {
            leading: remaining / 2.0,
            ..JustifySpacing::default()
        },
        JustifyContent::FlexEnd => JustifySpacing {
            leading: remaining,
            ..JustifySpacing::default()
        },
        JustifyContent::SpaceBetween => {
            if items_on_line > 1 {
                let (first, rest) = LayoutUnit::distribute(remaining.max(0.0), items_on_line - 1);
                JustifySpacing {
                    leading: 0.0,
                    first_between: first,
                    between: rest,
                }
            } else {
                JustifySpacing::default()
            }
        }
        JustifyContent::SpaceEvenly => {
            let (first, rest) = LayoutUnit::distribute(remaining.max(0.0), items_on_line + 1);
            JustifySpacing {
                leading: first,
                first_between: rest,
                between: rest,
            }
        }
        JustifyContent::SpaceAround => {
            let free = LayoutUnit::from_px(remaining.max(0.0));
            let residue = remaining.max(0.0) - free.to_px();
            let (share, remainder) = free.split(items_on_line as i32);
            let half = share / 2;
            JustifySpacing {
                leading: (half + remainder).to_px() + residue,
                first_between: share.to_px(),
                between: share.to_px(),
            }
        }
    };
    debug!(
        target: "css::flexbox::justify",
        "[FLEX-JUSTIFY] mode={justify:?} remaining={remaining:.3} items={items_on_line} leading={:.3} first_between={:.3} between={:.3}",
        spacing.leading,
        spacing.first_between,
        spacing.between
    );
    spacing
}

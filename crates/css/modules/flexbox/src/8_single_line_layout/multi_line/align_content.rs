//! Align-content packing for multi-line flex containers.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use log::debug;

use super::super::Align;

/// How flex lines are packed along the cross axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AlignContentSpacing {
    /// Offset of the first line from the cross-start content edge.
    pub leading: f32,
    /// Extra cross size added to every line (`stretch`).
    pub line_extra: f32,
    /// Space inserted after every line but the last.
    pub between: f32,
}

/// Compute align-content packing for `line_count` lines given the free
/// cross space `remaining` (container inner cross size minus line sizes and
/// gaps).
///
/// Distributed modes only distribute positive space. `space-around` with
/// negative space centers the lines, as does `center`.
pub fn align_content_params(align: Align, remaining: f32, line_count: usize) -> AlignContentSpacing {
    if remaining.is_nan() || line_count == 0 {
        return AlignContentSpacing::default();
    }
    let count = line_count as f32;
    let spacing = match align {
        Align::FlexEnd => AlignContentSpacing {
            leading: remaining,
            ..AlignContentSpacing::default()
        },
        Align::Center => AlignContentSpacing {
            leading: remaining / 2.0,
            ..AlignContentSpacing::default()
        },
        Align::Stretch if remaining > 0.0 => AlignContentSpacing {
            line_extra: remaining / count,
            ..AlignContentSpacing::default()
        },
        Align::SpaceAround => {
            if remaining > 0.0 {
                AlignContentSpacing {
                    leading: remaining / (2.0 * count),
                    line_extra: 0.0,
                    between: remaining / count,
                }
            } else {
                AlignContentSpacing {
                    leading: remaining / 2.0,
                    ..AlignContentSpacing::default()
                }
            }
        }
        Align::SpaceBetween if remaining > 0.0 && line_count > 1 => AlignContentSpacing {
            between: remaining / (count - 1.0),
            ..AlignContentSpacing::default()
        },
        Align::Auto
        | Align::FlexStart
        | Align::Stretch
        | Align::Baseline
        | Align::SpaceBetween => AlignContentSpacing::default(),
    };
    debug!(
        target: "css::flexbox::lines",
        "[ALIGN-CONTENT] mode={align:?} remaining={remaining:.3} lines={line_count} leading={:.3} line_extra={:.3} between={:.3}",
        spacing.leading,
        spacing.line_extra,
        spacing.between
    );
    spacing
}

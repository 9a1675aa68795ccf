//! Flex Items: identification and flexibility factors
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flexibility>

use css_values_units::Value;

/// Handle for an item: its index among the container's children.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemRef(pub usize);

/// Minimal style subset needed for flex item collection.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemStyle {
    /// `display: none`; the item generates no box.
    pub is_none: bool,
    /// Absolutely positioned; the item does not take part in flex layout.
    pub out_of_flow: bool,
}

/// Collect in-flow flex items from the container's children, in order.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
#[inline]
pub fn collect_flex_items(children: &[ItemStyle]) -> Vec<ItemRef> {
    children
        .iter()
        .enumerate()
        .filter(|(_, style)| is_flex_item(**style))
        .map(|(index, _)| ItemRef(index))
        .collect()
}

/// Returns true when the child qualifies as an in-flow flex item.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
#[inline]
pub const fn is_flex_item(style: ItemStyle) -> bool {
    !style.is_none && !style.out_of_flow
}

/// Resolved flex-grow and flex-shrink of an item.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexFactors {
    pub grow: f32,
    pub shrink: f32,
}

impl FlexFactors {
    /// True when either factor lets the item change size.
    #[inline]
    pub fn is_flexible(self) -> bool {
        self.grow != 0.0 || self.shrink != 0.0
    }
}

/// Resolved flex-grow.
///
/// An explicit `flex-grow` wins; otherwise a positive `flex` shorthand is the
/// grow factor. The root box never grows.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-grow-property>
pub fn resolve_flex_grow(flex: Option<f32>, flex_grow: Option<f32>, is_root: bool) -> f32 {
    if is_root {
        return 0.0;
    }
    if let Some(grow) = flex_grow {
        return grow;
    }
    match flex {
        Some(flex_value) if flex_value > 0.0 => flex_value,
        _ => 0.0,
    }
}

/// Resolved flex-shrink.
///
/// An explicit `flex-shrink` wins. Outside web defaults a negative `flex`
/// shorthand is a shrink factor of `-flex`. Everything else uses the CSS
/// initial value of 1. The root box never shrinks.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-shrink-property>
pub fn resolve_flex_shrink(
    flex: Option<f32>,
    flex_shrink: Option<f32>,
    is_root: bool,
    use_web_defaults: bool,
) -> f32 {
    if is_root {
        return 0.0;
    }
    if let Some(shrink) = flex_shrink {
        return shrink;
    }
    match flex {
        Some(flex_value) if !use_web_defaults && flex_value < 0.0 => -flex_value,
        _ => 1.0,
    }
}

/// Resolved flex-basis.
///
/// A definite basis is kept. Otherwise a positive `flex` shorthand implies a
/// zero basis (`auto` under web defaults), and anything else is `auto`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-basis-property>
pub fn resolve_flex_basis(flex_basis: Value, flex: Option<f32>, use_web_defaults: bool) -> Value {
    if flex_basis.is_defined() {
        return flex_basis;
    }
    match flex {
        Some(flex_value) if flex_value > 0.0 => {
            if use_web_defaults {
                Value::Auto
            } else {
                Value::Points(0.0)
            }
        }
        _ => Value::Auto,
    }
}

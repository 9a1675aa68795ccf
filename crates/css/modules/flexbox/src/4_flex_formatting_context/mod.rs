//! Flex Formatting Context (FFC)
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use serde::{Deserialize, Serialize};

/// Display keywords understood by the engine. Every box that is displayed
/// establishes a flex formatting context.
///
/// Spec: <https://www.w3.org/TR/css-display-3/#the-display-properties>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Display {
    #[default]
    Flex,
    None,
}

/// Spec: <https://www.w3.org/TR/css-position-3/#position-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PositionType {
    /// In flow; insets offset the box visually.
    #[default]
    Relative,
    /// Out of flow; positioned against the container's padding box.
    Absolute,
}

/// Spec: <https://www.w3.org/TR/css-overflow-3/#overflow-properties>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    /// Scroll containers do not grow with their content under an at-most constraint.
    Scroll,
}

impl Display {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::None => "none",
        }
    }
}

impl PositionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }
}

impl Overflow {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Scroll => "scroll",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if the initial values do not match CSS initial values.
    fn initial_values() {
        assert_eq!(Display::default(), Display::Flex);
        assert_eq!(PositionType::default(), PositionType::Relative);
        assert_eq!(Overflow::default(), Overflow::Visible);
    }

    #[test]
    /// # Panics
    /// Panics if keyword labels drift from CSS spelling.
    fn labels_use_css_keywords() {
        assert_eq!(Display::None.label(), "none");
        assert_eq!(PositionType::Absolute.label(), "absolute");
        assert_eq!(Overflow::Scroll.label(), "scroll");
    }
}

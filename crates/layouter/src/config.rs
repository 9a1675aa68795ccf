//! Engine-wide layout configuration.

use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Settings shared by every node of a [`LayoutTree`](crate::LayoutTree).
///
/// Configs can be loaded from JSON; missing fields take their defaults.
///
/// ```
/// # use layouter::Config;
/// let config = Config::from_json(r#"{ "point_scale_factor": 2.0 }"#).unwrap();
/// assert_eq!(config.point_scale_factor(), 2.0);
/// assert!(!config.use_web_defaults);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(
    clippy::struct_excessive_bools,
    reason = "Independent engine switches, serialized as flat JSON"
)]
pub struct Config {
    /// New nodes use the CSS initial values (`flex-direction: row`,
    /// `align-content: stretch`) and `flex` resolves the way browsers do.
    pub use_web_defaults: bool,
    /// Let flexible items fill an at-most constrained container instead of
    /// sizing the container to its content.
    pub use_legacy_stretch_behaviour: bool,
    /// Recompute flex bases on every pass instead of reusing the basis
    /// cached by an earlier pass.
    pub experimental_web_flex_basis: bool,
    /// Log the laid-out tree after every `calculate_layout`.
    pub print_tree: bool,
    /// Device pixels per point; 0 disables rounding.
    point_scale_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_web_defaults: false,
            use_legacy_stretch_behaviour: false,
            experimental_web_flex_basis: false,
            print_tree: false,
            point_scale_factor: 1.0,
        }
    }
}

impl Config {
    /// Parse a config from JSON and validate it.
    ///
    /// # Errors
    /// Returns [`LayoutError::Config`] for malformed JSON and
    /// [`LayoutError::NegativeScaleFactor`] for a negative scale factor.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Device pixels per point.
    pub const fn point_scale_factor(&self) -> f32 {
        self.point_scale_factor
    }

    /// Set the device pixels per point. Zero turns off pixel-grid rounding.
    ///
    /// # Errors
    /// Returns [`LayoutError::NegativeScaleFactor`] for negative or NaN factors.
    pub fn set_point_scale_factor(&mut self, factor: f32) -> Result<(), LayoutError> {
        if factor.is_nan() || factor < 0.0 {
            return Err(LayoutError::NegativeScaleFactor(factor));
        }
        self.point_scale_factor = factor;
        Ok(())
    }

    /// Check values that bypassed the validated setters.
    ///
    /// # Errors
    /// Returns [`LayoutError::NegativeScaleFactor`] for a negative scale factor.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.point_scale_factor.is_nan() || self.point_scale_factor < 0.0 {
            return Err(LayoutError::NegativeScaleFactor(self.point_scale_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if negative scale factors are accepted.
    #[test]
    fn rejects_negative_scale() {
        let mut config = Config::default();
        assert!(matches!(
            config.set_point_scale_factor(-1.0),
            Err(LayoutError::NegativeScaleFactor(_))
        ));
        assert!((config.point_scale_factor() - 1.0).abs() < f32::EPSILON);
        assert!(matches!(config.set_point_scale_factor(0.0), Ok(())));
        assert!(config.point_scale_factor().abs() < f32::EPSILON);
    }

    /// # Panics
    /// Panics if JSON configs are not validated.
    #[test]
    fn json_configs_are_validated() {
        assert!(matches!(
            Config::from_json(r#"{ "point_scale_factor": -3.0 }"#),
            Err(LayoutError::NegativeScaleFactor(_))
        ));
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(LayoutError::Config(_))
        ));
        let parsed = Config::from_json(r#"{ "use_web_defaults": true }"#);
        assert!(matches!(parsed, Ok(ref config) if config.use_web_defaults));
    }
}

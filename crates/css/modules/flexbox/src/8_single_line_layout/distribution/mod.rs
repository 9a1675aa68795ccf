//! Flex item sizing and free-space distribution.
//!
//! Contains the flexible-length freeze loop, auto margin shares and
//! main-axis justification.

pub mod auto_margins;
pub mod flex_algorithm;
pub mod main_axis;

pub use auto_margins::auto_margin_share;
pub use flex_algorithm::{FlexResolution, resolve_flexible_lengths};
pub use main_axis::{JustifySpacing, justify_params};

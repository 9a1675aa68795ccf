//! Multi-line flex layout support.

pub mod align_content;
pub mod line_breaking;

pub use align_content::{AlignContentSpacing, align_content_params};
pub use line_breaking::{FlexLine, break_into_lines};

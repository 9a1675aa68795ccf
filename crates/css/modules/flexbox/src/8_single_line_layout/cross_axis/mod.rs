//! Cross-axis alignment and baseline support.

pub mod alignment;
pub mod baseline;

pub use alignment::cross_offset_in_line;
pub use baseline::LineBaseline;

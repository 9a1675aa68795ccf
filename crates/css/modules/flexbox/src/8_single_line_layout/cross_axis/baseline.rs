//! Baseline alignment support for flex items.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#baseline-participation>

/// Running maximum ascent and descent of the baseline-aligned items of a
/// line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineBaseline {
    pub max_ascent: f32,
    pub max_descent: f32,
}

impl LineBaseline {
    /// Account for an item whose baseline sits `ascent` below its margin-box
    /// top and whose margin box is `outer_height` tall.
    pub fn add(&mut self, ascent: f32, outer_height: f32) {
        let descent = outer_height - ascent;
        self.max_ascent = self.max_ascent.max(ascent);
        self.max_descent = self.max_descent.max(descent);
    }

    /// Cross size needed to fit every baseline-aligned item.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max_ascent + self.max_descent
    }

    /// Offset from the line's top that puts an item's baseline on the
    /// line's shared baseline.
    #[inline]
    pub fn offset_for(&self, item_baseline: f32) -> f32 {
        self.max_ascent - item_baseline
    }
}

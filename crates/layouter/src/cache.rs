//! Per-node memo of earlier layout and measurement results.
//!
//! A node keeps one entry for its last full layout and a small ring of
//! measurement-only results. Dirty nodes drop their cache at the start of a
//! new pass.

use css_sizing::{MeasureMode, Size, measurement_is_reusable};
use css_values_units::floats_equal;
use log::trace;
use smallvec::SmallVec;

/// Measurement-only results kept per node before the ring wraps around.
pub const MAX_CACHED_MEASUREMENTS: usize = 16;

/// One layout request and its result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CachedMeasurement {
    pub available: Size,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
    pub computed: Size,
}

impl CachedMeasurement {
    fn matches_exactly(&self, request: &CacheRequest) -> bool {
        self.width_mode == request.width_mode
            && self.height_mode == request.height_mode
            && floats_equal(self.available.width, request.available.width)
            && floats_equal(self.available.height, request.available.height)
    }

    /// Compatibility check used for measured leaves, where a result computed
    /// under one constraint can often answer another.
    fn answers(&self, request: &CacheRequest, rounded_equal: &impl Fn(f32, f32) -> bool) -> bool {
        if self.computed.width < 0.0 || self.computed.height < 0.0 {
            return false;
        }
        let width_fits = measurement_is_reusable(
            (request.width_mode, request.available.width - request.margin.width),
            (self.width_mode, self.available.width - request.margin.width),
            self.computed.width,
            rounded_equal,
        );
        let height_fits = measurement_is_reusable(
            (request.height_mode, request.available.height - request.margin.height),
            (self.height_mode, self.available.height - request.margin.height),
            self.computed.height,
            rounded_equal,
        );
        width_fits && height_fits
    }
}

/// A lookup key: the request being answered plus the node's margins, which
/// are subtracted before leaf measurements are compared.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CacheRequest {
    pub available: Size,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
    /// Row and column margin totals.
    pub margin: Size,
    pub perform_layout: bool,
    pub has_measure: bool,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct LayoutCache {
    layout: Option<CachedMeasurement>,
    measurements: SmallVec<CachedMeasurement, MAX_CACHED_MEASUREMENTS>,
    next_measurement: usize,
}

impl LayoutCache {
    pub fn clear(&mut self) {
        self.layout = None;
        self.measurements.clear();
        self.next_measurement = 0;
    }

    fn live_measurements(&self) -> impl Iterator<Item = &CachedMeasurement> {
        self.measurements.iter().take(self.next_measurement)
    }

    /// Find a cached result that answers `request`.
    ///
    /// ## Lookup
    ///
    /// ```text
    /// measured leaf → layout entry, then measurements, by compatibility
    /// full layout   → layout entry, exact match only
    /// measurement   → measurements, exact match only
    /// ```
    pub fn lookup(
        &self,
        request: &CacheRequest,
        rounded_equal: impl Fn(f32, f32) -> bool,
    ) -> Option<CachedMeasurement> {
        if request.has_measure {
            if let Some(entry) = self.layout.filter(|entry| entry.answers(request, &rounded_equal)) {
                return Some(entry);
            }
            return self
                .live_measurements()
                .find(|entry| entry.answers(request, &rounded_equal))
                .copied();
        }
        if request.perform_layout {
            return self.layout.filter(|entry| entry.matches_exactly(request));
        }
        self.live_measurements()
            .find(|entry| entry.matches_exactly(request))
            .copied()
    }

    /// Record the result of a request that missed the cache.
    pub fn store(&mut self, request: &CacheRequest, computed: Size) {
        let entry = CachedMeasurement {
            available: request.available,
            width_mode: request.width_mode,
            height_mode: request.height_mode,
            computed,
        };
        if request.perform_layout {
            self.layout = Some(entry);
            return;
        }
        if self.next_measurement == MAX_CACHED_MEASUREMENTS {
            trace!(target: "layouter::cache", "[CACHE] measurement ring full, wrapping around");
            self.next_measurement = 0;
        }
        if let Some(slot) = self.measurements.get_mut(self.next_measurement) {
            *slot = entry;
        } else {
            self.measurements.push(entry);
        }
        self.next_measurement += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(width: f32, width_mode: MeasureMode, perform_layout: bool) -> CacheRequest {
        CacheRequest {
            available: Size::new(width, f32::NAN),
            width_mode,
            height_mode: MeasureMode::Undefined,
            margin: Size::ZERO,
            perform_layout,
            has_measure: false,
        }
    }

    /// # Panics
    /// Panics if exact requests do not hit their own entries.
    #[test]
    fn exact_hits_and_misses() {
        let mut cache = LayoutCache::default();
        let first = request(100.0, MeasureMode::Exactly, false);
        cache.store(&first, Size::new(100.0, 20.0));

        assert!(cache.lookup(&first, floats_equal).is_some());
        assert!(cache.lookup(&request(90.0, MeasureMode::Exactly, false), floats_equal).is_none());
        // Full layouts only consult the layout entry.
        assert!(cache.lookup(&request(100.0, MeasureMode::Exactly, true), floats_equal).is_none());
    }

    /// # Panics
    /// Panics if measured leaves cannot reuse a compatible result.
    #[test]
    fn measured_leaves_reuse_compatible_results() {
        let mut cache = LayoutCache::default();
        let mut unbounded = request(f32::NAN, MeasureMode::Undefined, false);
        unbounded.has_measure = true;
        cache.store(&unbounded, Size::new(40.0, 10.0));

        let mut bounded = request(100.0, MeasureMode::AtMost, false);
        bounded.has_measure = true;
        assert!(cache.lookup(&bounded, floats_equal).is_some());

        let mut too_small = request(30.0, MeasureMode::AtMost, false);
        too_small.has_measure = true;
        assert!(cache.lookup(&too_small, floats_equal).is_none());
    }

    /// # Panics
    /// Panics if the measurement ring grows past its capacity.
    #[test]
    fn ring_wraps_around() {
        let mut cache = LayoutCache::default();
        for step in 0..=MAX_CACHED_MEASUREMENTS {
            let width = step as f32;
            cache.store(&request(width, MeasureMode::Exactly, false), Size::new(width, 0.0));
        }
        assert_eq!(cache.measurements.len(), MAX_CACHED_MEASUREMENTS);
        let newest = request(MAX_CACHED_MEASUREMENTS as f32, MeasureMode::Exactly, false);
        assert!(cache.lookup(&newest, floats_equal).is_some());
        // The slot it overwrote is gone, and entries past the ring cursor are ignored.
        assert!(cache.lookup(&request(0.0, MeasureMode::Exactly, false), floats_equal).is_none());
        assert!(cache.lookup(&request(5.0, MeasureMode::Exactly, false), floats_equal).is_none());
    }
}

use super::value_objects::{YRange, last_index};

/// Tolerance (index units) for treating a window as the full data extent when
/// deciding whether to constrain Y.
pub const FULL_RANGE_TOLERANCE: f64 = 0.01;

/// Keeps a horizontal window inside `[0, data_length - 1]` and no narrower
/// than `min_window`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub data_length: usize,
    pub min_window: f64,
}

impl ViewportBounds {
    pub fn new(data_length: usize, min_window: f64) -> Self {
        Self { data_length: data_length.max(1), min_window }
    }

    pub fn max_x(&self) -> f64 {
        last_index(self.data_length)
    }

    /// Width is enforced before the edges so an edge shift never shrinks the
    /// window below `min_window`.
    pub fn clamp(&self, x_min: f64, x_max: f64) -> (f64, f64) {
        let max_x = self.max_x();
        if !x_min.is_finite() || !x_max.is_finite() {
            return (0.0, max_x);
        }

        let (mut lo, mut hi) = (x_min, x_max);
        if hi - lo < self.min_window {
            let mid = (lo + hi) / 2.0;
            lo = mid - self.min_window / 2.0;
            hi = mid + self.min_window / 2.0;
        }
        if lo < 0.0 {
            hi = (hi - lo).min(max_x);
            lo = 0.0;
        }
        if hi > max_x {
            lo = (lo - (hi - max_x)).max(0.0);
            hi = max_x;
        }
        (lo, hi)
    }

    pub fn covers_full_range(&self, x_min: f64, x_max: f64) -> bool {
        x_min.abs() < FULL_RANGE_TOLERANCE && (x_max - self.max_x()).abs() < FULL_RANGE_TOLERANCE
    }
}

/// Derives a padded vertical range from the values visible in an X window.
#[derive(Debug, Clone, Default)]
pub struct YRangeService {
    sources: Vec<Vec<Option<f64>>>,
}

impl YRangeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registered series wholesale.
    pub fn set_sources(&mut self, sources: Vec<Vec<Option<f64>>>) {
        self.sources = sources;
    }

    pub fn sources(&self) -> &[Vec<Option<f64>>] {
        &self.sources
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    /// `None` means unconstrained: no sources, a full-extent window, or no
    /// finite values inside the window.
    pub fn compute_y_target(&self, bounds: &ViewportBounds, x_min: f64, x_max: f64, y_padding: f64) -> Option<YRange> {
        if !self.has_sources() || bounds.covers_full_range(x_min, x_max) {
            return None;
        }
        let (data_min, data_max) = self.visible_extent(x_min, x_max)?;
        let span = if data_max - data_min == 0.0 { 1.0 } else { data_max - data_min };
        Some(YRange::new(data_min - span * y_padding, data_max + span * y_padding))
    }

    /// Min/max over indices `floor(x_min)..=ceil(x_max)` of every source.
    fn visible_extent(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
        if !x_min.is_finite() || !x_max.is_finite() || x_max < 0.0 {
            return None;
        }
        let start = x_min.floor().max(0.0) as usize;
        let end = x_max.ceil() as usize;

        self.sources
            .iter()
            .flat_map(|series| series.iter().take(end.saturating_add(1)).skip(start))
            .filter_map(|value| value.filter(|v| !v.is_nan()))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
    }
}

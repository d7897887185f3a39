use strum::Display;

use super::value_objects::{PlotArea, PointerSample, Viewport};

/// Largest wheel delta honoured per event; bigger trackpad bursts are capped.
pub const MAX_WHEEL_DELTA: f64 = 50.0;
/// Width change per `MAX_WHEEL_DELTA` of wheel movement.
pub const ZOOM_SENSITIVITY: f64 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GestureKind {
    Wheel,
    Pinch,
    Drag,
    Reset,
}

/// Window width multiplier for a wheel `delta_y`. Positive deltas zoom out.
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    if !delta_y.is_finite() {
        return 1.0;
    }
    let clamped = delta_y.clamp(-MAX_WHEEL_DELTA, MAX_WHEEL_DELTA);
    1.0 + (clamped / MAX_WHEEL_DELTA) * ZOOM_SENSITIVITY
}

/// Rescale `base` to `new_width`, keeping the data value at `fraction` of the
/// window fixed on screen.
pub fn zoom_at_fraction(base: &Viewport, new_width: f64, fraction: f64) -> (f64, f64) {
    let anchor = base.x_at_fraction(fraction);
    let x_min = anchor - fraction * new_width;
    (x_min, x_min + new_width)
}

/// State captured when a drag begins; lives until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start: PointerSample,
    pub origin: Viewport,
}

impl DragSession {
    pub fn begin(start: PointerSample, origin: Viewport) -> Self {
        Self { start, origin }
    }

    /// Unclamped X window after moving the pointer to `current`. Dragging left
    /// moves the window right so the content follows the pointer.
    pub fn panned_x(&self, current: PointerSample, plot: &PlotArea) -> Option<(f64, f64)> {
        if plot.width <= 0.0 {
            return None;
        }
        let dx = current.x - self.start.x;
        let units_per_px = self.origin.width() / plot.width;
        let shift = -dx * units_per_px;
        Some((self.origin.x_min + shift, self.origin.x_max + shift))
    }

    /// Y window after the move, only when the origin was constrained.
    /// The pixel delta is added in data units: dragging down raises the window.
    pub fn panned_y(&self, current: PointerSample, plot: &PlotArea) -> Option<super::YRange> {
        let origin = self.origin.y?;
        if plot.height <= 0.0 {
            return Some(origin);
        }
        let dy = current.y - self.start.y;
        let span = if origin.span() == 0.0 { 1.0 } else { origin.span() };
        let y_unit_delta = dy / (plot.height / span);
        Some(origin.shifted(y_unit_delta))
    }
}

/// Distance between two touches across successive move events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinchTracker {
    previous_distance: Option<f64>,
}

impl PinchTracker {
    pub fn begin(&mut self, a: PointerSample, b: PointerSample) {
        self.previous_distance = Some(a.distance_to(&b));
    }

    pub fn is_active(&self) -> bool {
        self.previous_distance.is_some()
    }

    /// Scale since the previous sample (`> 1` when the fingers spread), and
    /// remember the new distance. `None` before the first sample or when the
    /// previous distance was zero.
    pub fn update(&mut self, a: PointerSample, b: PointerSample) -> Option<f64> {
        let current = a.distance_to(&b);
        let previous = self.previous_distance.replace(current)?;
        if previous <= 0.0 || current <= 0.0 {
            return None;
        }
        Some(current / previous)
    }

    pub fn end(&mut self) {
        self.previous_distance = None;
    }
}

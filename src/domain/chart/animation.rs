use super::value_objects::{Viewport, YRange};

/// Fraction of the remaining distance covered per frame.
pub const LERP_FACTOR: f64 = 0.18;
/// Remaining distance below which a field jumps straight to its target.
pub const SNAP_THRESHOLD: f64 = 0.005;

/// Result of advancing a viewport one frame toward its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LerpStep {
    pub viewport: Viewport,
    pub changed: bool,
    pub converged: bool,
}

fn lerp_field(current: f64, target: f64) -> f64 {
    let delta = target - current;
    if delta.abs() < SNAP_THRESHOLD || !delta.is_finite() {
        target
    } else {
        current + delta * LERP_FACTOR
    }
}

fn lerp_y(current: Option<YRange>, target: Option<YRange>) -> Option<YRange> {
    match (current, target) {
        (Some(c), Some(t)) => Some(YRange::new(lerp_field(c.min, t.min), lerp_field(c.max, t.max))),
        // Unconstrained axes never interpolate: None clears at once, Some appears at once.
        (_, t) => t,
    }
}

/// Advance `current` one frame toward `target`.
pub fn lerp_step(current: &Viewport, target: &Viewport) -> LerpStep {
    let next = Viewport {
        x_min: lerp_field(current.x_min, target.x_min),
        x_max: lerp_field(current.x_max, target.x_max),
        y: lerp_y(current.y, target.y),
    };
    LerpStep {
        changed: next != *current,
        converged: next == *target,
        viewport: next,
    }
}

/// Upper bound on the frames needed to close a gap of `distance` under the
/// snap rule: the decaying remainder must drop below the threshold, plus the
/// final snapping frame.
pub fn frames_to_converge(distance: f64) -> u32 {
    if distance.abs() < SNAP_THRESHOLD {
        return 1;
    }
    let decays = (SNAP_THRESHOLD / distance.abs()).ln() / (1.0 - LERP_FACTOR).ln();
    decays.ceil() as u32 + 1
}

use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};

use crate::domain::scheduling::FrameScheduler;

/// `requestAnimationFrame`-backed scheduler.
///
/// Holds at most one outstanding [`AnimationFrame`]; dropping the handle
/// cancels it, so dropping the scheduler also tears down a pending callback.
pub struct AnimationFrameScheduler {
    on_frame: Rc<dyn Fn(f64)>,
    pending: Option<AnimationFrame>,
}

impl AnimationFrameScheduler {
    pub fn new(on_frame: impl Fn(f64) + 'static) -> Self {
        Self { on_frame: Rc::new(on_frame), pending: None }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let on_frame = Rc::clone(&self.on_frame);
        self.pending = Some(request_animation_frame(move |timestamp| on_frame(timestamp)));
    }

    fn frame_started(&mut self) {
        // The handle belongs to the frame that is running now.
        self.pending = None;
    }

    fn cancel_frame(&mut self) {
        self.pending = None;
    }

    fn is_frame_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Scheduler driven by hand: the caller decides when a frame fires.
/// Used for deterministic stepping outside a browser.
#[derive(Debug, Default, Clone)]
pub struct ManualFrameScheduler {
    pending: bool,
    requests: usize,
    frames: usize,
    cancels: usize,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that actually scheduled a frame (coalesced ones excluded).
    pub fn request_count(&self) -> usize {
        self.requests
    }

    pub fn frame_count(&self) -> usize {
        self.frames
    }

    pub fn cancel_count(&self) -> usize {
        self.cancels
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) {
        if !self.pending {
            self.pending = true;
            self.requests += 1;
        }
    }

    fn frame_started(&mut self) {
        self.pending = false;
        self.frames += 1;
    }

    fn cancel_frame(&mut self) {
        if self.pending {
            self.cancels += 1;
        }
        self.pending = false;
    }

    fn is_frame_pending(&self) -> bool {
        self.pending
    }
}

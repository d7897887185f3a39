use crate::domain::{
    chart::{
        ContainerGeometry, DragSession, GestureKind, PinchTracker, PlotArea, PointerSample, Viewport,
        ViewportBounds, YRange, YRangeService, ZoomSnapshot, lerp_step, wheel_zoom_factor,
        zoom_at_fraction,
    },
    config::ZoomOptions,
    logging::{LogComponent, get_logger},
    scheduling::FrameScheduler,
};
use crate::{log_debug, log_trace};

const COMPONENT: LogComponent = LogComponent::Application("ZoomController");

/// Owns the authoritative viewport and turns gestures into viewport changes.
///
/// Gesture handlers mutate `viewport` synchronously. Nothing reaches the host
/// until the scheduler fires and [`ZoomController::on_frame`] hands back a
/// snapshot, so any number of mutations within one frame publish once.
pub struct ZoomController<S: FrameScheduler> {
    data_length: usize,
    options: ZoomOptions,
    bounds: ViewportBounds,
    viewport: Viewport,
    target: Option<Viewport>,
    animating: bool,
    animation_frames: u32,
    publish_pending: bool,
    drag: Option<DragSession>,
    pinch: PinchTracker,
    y_sources: YRangeService,
    scheduler: S,
}

impl<S: FrameScheduler> ZoomController<S> {
    pub fn new(data_length: usize, options: ZoomOptions, scheduler: S) -> Self {
        let data_length = data_length.max(1);
        get_logger().info(
            COMPONENT,
            &format!("Zoom controller created for {} points (min window {})", data_length, options.min_window),
        );

        Self {
            data_length,
            options,
            bounds: ViewportBounds::new(data_length, options.min_window),
            viewport: Viewport::full_extent(data_length),
            target: None,
            animating: false,
            animation_frames: 0,
            publish_pending: false,
            drag: None,
            pinch: PinchTracker::default(),
            y_sources: YRangeService::new(),
            scheduler,
        }
    }

    pub fn data_length(&self) -> usize {
        self.data_length
    }

    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    /// Authoritative viewport, ahead of whatever the host last rendered.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn animation_target(&self) -> Option<Viewport> {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    pub fn is_publish_pending(&self) -> bool {
        self.publish_pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn snapshot(&self) -> ZoomSnapshot {
        ZoomSnapshot::from_viewport(&self.viewport, self.data_length)
    }

    pub fn plot_area(&self, container: ContainerGeometry) -> PlotArea {
        self.options.plot_area(container)
    }

    /// Reinitialize to the full extent for a new series. Returns `false` when
    /// the length is unchanged and nothing happened.
    pub fn set_data_length(&mut self, data_length: usize) -> bool {
        let data_length = data_length.max(1);
        if data_length == self.data_length {
            return false;
        }
        get_logger().info(
            COMPONENT,
            &format!("Data length {} -> {}, viewport reset", self.data_length, data_length),
        );

        self.data_length = data_length;
        self.bounds = ViewportBounds::new(data_length, self.options.min_window);
        self.viewport = Viewport::full_extent(data_length);
        self.cancel_animation();
        self.drag = None;
        self.pinch.end();
        self.request_publish();
        true
    }

    /// Replace the series used for auto Y-ranging. Takes effect on the next
    /// gesture; the published snapshot is untouched.
    pub fn set_y_sources(&mut self, sources: Vec<Vec<Option<f64>>>) {
        self.y_sources.set_sources(sources);
    }

    pub fn clamp_viewport(&self, x_min: f64, x_max: f64) -> (f64, f64) {
        self.bounds.clamp(x_min, x_max)
    }

    pub fn compute_y_target(&self, x_min: f64, x_max: f64) -> Option<YRange> {
        self.y_sources
            .compute_y_target(&self.bounds, x_min, x_max, self.options.y_padding)
    }

    /// Animate to an X window (clamped) with a matching auto Y-range.
    pub fn zoom_to(&mut self, x_min: f64, x_max: f64) {
        let (x_min, x_max) = self.clamp_viewport(x_min, x_max);
        let y = self.compute_y_target(x_min, x_max);
        self.target = Some(Viewport::new(x_min, x_max, y));
        self.start_animation();
    }

    /// Cursor-anchored zoom. Consecutive wheel events compose against the
    /// in-flight target rather than the on-screen viewport.
    pub fn on_wheel(&mut self, delta_y: f64, pointer: PointerSample, container: ContainerGeometry) {
        self.drag = None;

        let base = match (self.animating, self.target) {
            (true, Some(target)) => target,
            _ => self.viewport,
        };
        let new_width = base.width() * wheel_zoom_factor(delta_y);
        let fraction = self.plot_area(container).horizontal_fraction(pointer.x);
        let (x_min, x_max) = zoom_at_fraction(&base, new_width, fraction);

        log_trace!(
            COMPONENT,
            "{} delta {:.1} at {:.2}: width {:.3} -> {:.3}",
            GestureKind::Wheel,
            delta_y,
            fraction,
            base.width(),
            new_width
        );
        self.zoom_to(x_min, x_max);
    }

    pub fn on_pointer_down(&mut self, pointer: PointerSample) {
        self.cancel_animation();
        self.drag = Some(DragSession::begin(pointer, self.viewport));
        log_debug!(COMPONENT, "{} started at ({:.0}, {:.0})", GestureKind::Drag, pointer.x, pointer.y);
    }

    /// Immediate pan while a drag is active. Returns whether the viewport moved.
    pub fn on_pointer_move(&mut self, pointer: PointerSample, container: ContainerGeometry) -> bool {
        let Some(session) = self.drag else {
            return false;
        };
        let plot = self.plot_area(container);
        let Some((x_min, x_max)) = session.panned_x(pointer, &plot) else {
            return false;
        };
        let (x_min, x_max) = self.clamp_viewport(x_min, x_max);
        let y = session.panned_y(pointer, &plot);

        self.viewport = Viewport::new(x_min, x_max, y);
        self.request_publish();
        true
    }

    /// Ends the drag; returns whether one was active.
    pub fn on_pointer_up(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Two touches start a pinch, one touch starts a drag.
    pub fn on_touch_start(&mut self, touches: &[PointerSample]) {
        match touches {
            [a, b, ..] => {
                self.drag = None;
                self.pinch.begin(*a, *b);
                log_debug!(COMPONENT, "{} started, distance {:.1}", GestureKind::Pinch, a.distance_to(b));
            }
            [single] if !self.pinch.is_active() => self.on_pointer_down(*single),
            _ => {}
        }
    }

    pub fn on_touch_move(&mut self, touches: &[PointerSample], container: ContainerGeometry) {
        match touches {
            [a, b, ..] => self.on_pinch_move(*a, *b),
            [single] if !self.pinch.is_active() => {
                self.on_pointer_move(*single, container);
            }
            _ => {}
        }
    }

    pub fn on_touch_end(&mut self) {
        self.pinch.end();
        self.on_pointer_up();
    }

    /// Centre-anchored zoom by the change in finger distance.
    fn on_pinch_move(&mut self, a: PointerSample, b: PointerSample) {
        if !self.pinch.is_active() {
            self.drag = None;
            self.pinch.begin(a, b);
            return;
        }
        let Some(scale) = self.pinch.update(a, b) else {
            return;
        };
        let base = self.viewport;
        let new_width = base.width() / scale;
        let x_min = base.center() - new_width / 2.0;
        self.zoom_to(x_min, x_min + new_width);
    }

    /// Animate back to the full, unconstrained extent, restarting the loop
    /// even if it is already heading elsewhere.
    pub fn reset_zoom(&mut self) {
        log_debug!(COMPONENT, "{} requested", GestureKind::Reset);
        self.target = Some(Viewport::full_extent(self.data_length));
        self.animating = false;
        self.start_animation();
    }

    /// Frame callback: advance the easing loop and return the snapshot to
    /// publish, if any.
    pub fn on_frame(&mut self) -> Option<ZoomSnapshot> {
        self.scheduler.frame_started();
        let mut publish = std::mem::take(&mut self.publish_pending);

        if self.animating {
            match self.target {
                Some(target) => {
                    let step = lerp_step(&self.viewport, &target);
                    self.viewport = step.viewport;
                    self.animation_frames += 1;
                    publish |= step.changed;
                    if step.converged {
                        log_trace!(COMPONENT, "Animation settled after {} frames", self.animation_frames);
                        self.cancel_animation();
                    } else {
                        self.scheduler.request_frame();
                    }
                }
                None => self.animating = false,
            }
        }

        publish.then(|| self.snapshot())
    }

    /// Teardown: no frame will fire after this.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_frame();
        self.cancel_animation();
        self.publish_pending = false;
        self.drag = None;
        self.pinch.end();
    }

    fn start_animation(&mut self) {
        if self.animating {
            return;
        }
        self.animating = true;
        self.animation_frames = 0;
        self.scheduler.request_frame();
    }

    fn cancel_animation(&mut self) {
        self.animating = false;
        self.target = None;
    }

    fn request_publish(&mut self) {
        if self.publish_pending {
            return;
        }
        self.publish_pending = true;
        self.scheduler.request_frame();
    }
}

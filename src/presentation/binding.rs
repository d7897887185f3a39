use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use web_sys::{Element, EventTarget, MouseEvent, TouchEvent, WheelEvent};

use crate::application::ZoomController;
use crate::domain::{chart::ZoomSnapshot, config::ZoomOptions};
use crate::infrastructure::{
    AnimationFrameScheduler,
    dom::ElementFrame,
    event_utils::{EventOptions, element_event_listener_with_options},
};

pub type BrowserZoomController = ZoomController<AnimationFrameScheduler>;

/// Shared handle tying a [`ZoomController`] to `requestAnimationFrame` and to
/// DOM events.
///
/// The frame callback holds only a weak reference, and the published snapshot
/// is delivered after the controller borrow is released, so the publish sink
/// may call back into the binding.
#[derive(Clone)]
pub struct ZoomBinding {
    controller: Rc<RefCell<BrowserZoomController>>,
}

impl ZoomBinding {
    pub fn new(data_length: usize, options: ZoomOptions, publish: impl Fn(ZoomSnapshot) + 'static) -> Self {
        let controller = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserZoomController>>| {
            let weak = weak.clone();
            let scheduler = AnimationFrameScheduler::new(move |_timestamp| {
                let Some(controller) = weak.upgrade() else {
                    return;
                };
                let snapshot = controller.borrow_mut().on_frame();
                if let Some(snapshot) = snapshot {
                    publish(snapshot);
                }
            });
            RefCell::new(ZoomController::new(data_length, options, scheduler))
        });
        Self { controller }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut BrowserZoomController) -> R) -> R {
        f(&mut self.controller.borrow_mut())
    }

    pub fn snapshot(&self) -> ZoomSnapshot {
        self.controller.borrow().snapshot()
    }

    pub fn mouse_down(&self, element: &Element, ev: &MouseEvent) {
        let frame = ElementFrame::measure(element);
        self.with(|c| c.on_pointer_down(frame.mouse_sample(ev)));
    }

    /// Ignored unless a drag is active, so hovering never forces layout.
    pub fn mouse_move(&self, element: &Element, ev: &MouseEvent) {
        if !self.controller.borrow().is_dragging() {
            return;
        }
        let frame = ElementFrame::measure(element);
        self.with(|c| c.on_pointer_move(frame.mouse_sample(ev), frame.geometry));
    }

    /// Mouse up and mouse leave both end the drag.
    pub fn mouse_up(&self) {
        self.with(|c| c.on_pointer_up());
    }

    pub fn wheel(&self, element: &Element, ev: &WheelEvent) {
        ev.prevent_default();
        let frame = ElementFrame::measure(element);
        let pointer = frame.mouse_sample(ev);
        self.with(|c| c.on_wheel(ev.delta_y(), pointer, frame.geometry));
    }

    pub fn touch_start(&self, element: &Element, ev: &TouchEvent) {
        let frame = ElementFrame::measure(element);
        let touches = frame.touch_samples(&ev.touches());
        self.with(|c| c.on_touch_start(&touches));
    }

    pub fn touch_move(&self, element: &Element, ev: &TouchEvent) {
        let frame = ElementFrame::measure(element);
        let touches = frame.touch_samples(&ev.touches());
        if touches.len() >= 2 || self.controller.borrow().is_dragging() {
            ev.prevent_default();
        }
        self.with(|c| c.on_touch_move(&touches, frame.geometry));
    }

    pub fn touch_end(&self) {
        self.with(|c| c.on_touch_end());
    }

    /// Listeners that must be registered natively because they call
    /// `preventDefault`: wheel, touchmove, touchend, touchcancel.
    pub fn attach_native_listeners(&self, element: &Element) -> Vec<EventListener> {
        let target: &EventTarget = element.as_ref();
        let non_passive = EventOptions::non_passive();
        let passive = EventOptions::default();
        let mut listeners = Vec::with_capacity(4);

        let (binding, el) = (self.clone(), element.clone());
        listeners.push(element_event_listener_with_options(target, "wheel", &non_passive, move |ev: &WheelEvent| {
            binding.wheel(&el, ev)
        }));
        let (binding, el) = (self.clone(), element.clone());
        listeners.push(element_event_listener_with_options(target, "touchmove", &non_passive, move |ev: &TouchEvent| {
            binding.touch_move(&el, ev)
        }));
        for name in ["touchend", "touchcancel"] {
            let binding = self.clone();
            listeners.push(element_event_listener_with_options(target, name, &passive, move |_: &TouchEvent| {
                binding.touch_end()
            }));
        }
        listeners
    }

    /// Every gesture listener, for hosts that cannot bind mouse and touch-start
    /// handlers themselves.
    pub fn attach_all_listeners(&self, element: &Element) -> Vec<EventListener> {
        let target: &EventTarget = element.as_ref();
        let passive = EventOptions::default();
        let mut listeners = self.attach_native_listeners(element);

        let (binding, el) = (self.clone(), element.clone());
        listeners.push(element_event_listener_with_options(target, "mousedown", &passive, move |ev: &MouseEvent| {
            binding.mouse_down(&el, ev)
        }));
        let (binding, el) = (self.clone(), element.clone());
        listeners.push(element_event_listener_with_options(target, "mousemove", &passive, move |ev: &MouseEvent| {
            binding.mouse_move(&el, ev)
        }));
        for name in ["mouseup", "mouseleave"] {
            let binding = self.clone();
            listeners.push(element_event_listener_with_options(target, name, &passive, move |_: &MouseEvent| {
                binding.mouse_up()
            }));
        }
        let (binding, el) = (self.clone(), element.clone());
        listeners.push(element_event_listener_with_options(target, "touchstart", &passive, move |ev: &TouchEvent| {
            binding.touch_start(&el, ev)
        }));
        listeners
    }

    pub fn shutdown(&self) {
        self.with(|c| c.shutdown());
    }
}

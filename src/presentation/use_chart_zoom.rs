use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use leptos::html::Div;
use leptos::*;
use web_sys::{MouseEvent, TouchEvent};

use super::binding::ZoomBinding;
use crate::domain::{
    chart::{AxisWindow, Viewport, YDomain, ZoomSnapshot},
    config::ZoomOptions,
    logging::{LogComponent, LogLevel, get_logger},
};
use crate::log_debug;

/// Bindings for the element that captures gestures.
///
/// Spread them onto a single `<div>`:
/// `node_ref`, `on:mousedown`, `on:mousemove`, `on:mouseup`, `on:mouseleave`,
/// `on:touchstart`. Wheel and touch-move listeners are attached natively once
/// the node mounts, because they need `preventDefault`.
#[derive(Clone, Copy)]
pub struct ContainerProps {
    pub node_ref: NodeRef<Div>,
    pub on_mouse_down: Callback<MouseEvent>,
    pub on_mouse_move: Callback<MouseEvent>,
    pub on_mouse_up: Callback<MouseEvent>,
    pub on_mouse_leave: Callback<MouseEvent>,
    pub on_touch_start: Callback<TouchEvent>,
}

/// What [`use_chart_zoom`] hands to the host.
#[derive(Clone, Copy)]
pub struct ChartZoom {
    pub x_axis: Signal<AxisWindow>,
    pub y_domain: Signal<YDomain>,
    pub is_zoomed: Signal<bool>,
    pub reset_zoom: Callback<()>,
    pub container: ContainerProps,
    pub set_y_sources: Callback<Vec<Vec<Option<f64>>>>,
}

/// Pan/zoom viewport over `data_length` points.
///
/// The controller mutates its viewport on every event; the signals here only
/// change once per animation frame.
pub fn use_chart_zoom(data_length: impl Into<MaybeSignal<usize>>, options: ZoomOptions) -> ChartZoom {
    let data_length = data_length.into();
    let options = match options.validate() {
        Ok(()) => options,
        Err(e) => {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Presentation("useChartZoom"),
                "Invalid zoom options, using defaults",
                &e.to_string(),
            );
            ZoomOptions::default()
        }
    };
    let node_ref = create_node_ref::<Div>();

    let initial_length = data_length.get_untracked();
    let snapshot = create_rw_signal(ZoomSnapshot::from_viewport(&Viewport::full_extent(initial_length), initial_length));
    let binding = ZoomBinding::new(initial_length, options, move |snap| snapshot.set(snap));

    {
        let binding = binding.clone();
        create_effect(move |_| {
            let len = data_length.get();
            binding.with(|c| c.set_data_length(len));
        });
    }

    let listeners: Rc<RefCell<Vec<EventListener>>> = Rc::default();
    {
        let (binding, listeners) = (binding.clone(), Rc::clone(&listeners));
        create_effect(move |_| {
            if let Some(div) = node_ref.get() {
                let element: &web_sys::Element = &div;
                *listeners.borrow_mut() = binding.attach_native_listeners(element);
                log_debug!(LogComponent::Presentation("useChartZoom"), "Native gesture listeners attached");
            }
        });
    }
    {
        let binding = binding.clone();
        on_cleanup(move || {
            listeners.borrow_mut().clear();
            binding.shutdown();
        });
    }

    let on_mouse_down = {
        let binding = binding.clone();
        Callback::new(move |ev: MouseEvent| {
            if let Some(div) = node_ref.get_untracked() {
                binding.mouse_down(&div, &ev);
            }
        })
    };
    let on_mouse_move = {
        let binding = binding.clone();
        Callback::new(move |ev: MouseEvent| {
            if let Some(div) = node_ref.get_untracked() {
                binding.mouse_move(&div, &ev);
            }
        })
    };
    let on_mouse_up = {
        let binding = binding.clone();
        Callback::new(move |_: MouseEvent| binding.mouse_up())
    };
    let on_touch_start = {
        let binding = binding.clone();
        Callback::new(move |ev: TouchEvent| {
            if let Some(div) = node_ref.get_untracked() {
                binding.touch_start(&div, &ev);
            }
        })
    };

    let reset_zoom = {
        let binding = binding.clone();
        Callback::new(move |()| binding.with(|c| c.reset_zoom()))
    };
    let set_y_sources = Callback::new(move |sources: Vec<Vec<Option<f64>>>| {
        binding.with(|c| c.set_y_sources(sources))
    });

    ChartZoom {
        x_axis: Signal::derive(move || snapshot.with(|s| s.x_axis)),
        y_domain: Signal::derive(move || snapshot.with(|s| s.y_domain)),
        is_zoomed: Signal::derive(move || snapshot.with(|s| s.is_zoomed)),
        reset_zoom,
        container: ContainerProps {
            node_ref,
            on_mouse_down,
            on_mouse_move,
            on_mouse_up,
            on_mouse_leave: on_mouse_up,
            on_touch_start,
        },
        set_y_sources,
    }
}

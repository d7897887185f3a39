#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use chart_zoom_wasm::domain::{
    chart::{AxisWindow, YDomain},
    config::ZoomOptions,
};
use chart_zoom_wasm::presentation::{ChartZoom, use_chart_zoom};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlDivElement, MouseEvent, MouseEventInit, WheelEvent, WheelEventInit};

wasm_bindgen_test_configure!(run_in_browser);

struct Host {
    zoom: ChartZoom,
    length: RwSignal<usize>,
    surface: HtmlDivElement,
}

/// Mounts a 900x300 gesture surface wired the way a Leptos host would wire it.
async fn mount_host(data_length: usize) -> Host {
    let document = web_sys::window().unwrap().document().unwrap();
    let parent = document.create_element("div").unwrap().dyn_into::<web_sys::HtmlElement>().unwrap();
    document.body().unwrap().append_child(&parent).unwrap();

    let slot: Rc<RefCell<Option<(ChartZoom, RwSignal<usize>)>>> = Rc::default();
    let sink = Rc::clone(&slot);
    mount_to(parent, move || {
        let length = create_rw_signal(data_length);
        let zoom = use_chart_zoom(length, ZoomOptions::default());
        *sink.borrow_mut() = Some((zoom, length));

        let container = zoom.container;
        let surface_ref = container.node_ref;
        view! {
            <div
                style="width: 900px; height: 300px"
                node_ref=surface_ref
                on:mousedown=move |ev| container.on_mouse_down.call(ev)
                on:mousemove=move |ev| container.on_mouse_move.call(ev)
                on:mouseup=move |ev| container.on_mouse_up.call(ev)
                on:mouseleave=move |ev| container.on_mouse_leave.call(ev)
                on:touchstart=move |ev| container.on_touch_start.call(ev)
            />
        }
    });

    let (zoom, length) = slot.borrow_mut().take().expect("component rendered");
    let surface: HtmlDivElement = (*zoom.container.node_ref.get_untracked().expect("node_ref loaded")).clone();
    // Effects, including native listener attachment, run on a microtask.
    TimeoutFuture::new(0).await;
    Host { zoom, length, surface }
}

fn mouse(kind: &str, client_x: f64, client_y: f64) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(client_x.round() as i32);
    init.set_client_y(client_y.round() as i32);
    init.set_bubbles(true);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

fn wheel_at(surface: &HtmlDivElement, delta_y: f64, local_x: f64) -> WheelEvent {
    let rect = surface.get_bounding_client_rect();
    let init = WheelEventInit::new();
    init.set_delta_y(delta_y);
    init.set_client_x((rect.left() + local_x).round() as i32);
    init.set_client_y((rect.top() + 100.0).round() as i32);
    init.set_cancelable(true);
    WheelEvent::new_with_event_init_dict("wheel", &init).unwrap()
}

async fn until(mut done: impl FnMut() -> bool) {
    for _ in 0..200 {
        if done() {
            return;
        }
        TimeoutFuture::new(20).await;
    }
    panic!("condition never held");
}

/// Waits until two reads a few frames apart agree.
async fn settled(x_axis: Signal<AxisWindow>) -> AxisWindow {
    let mut last = None;
    until(move || {
        let now = x_axis.get_untracked();
        let same = last == Some(now);
        last = Some(now);
        same
    })
    .await;
    x_axis.get_untracked()
}

#[wasm_bindgen_test]
async fn signals_change_only_after_a_frame() {
    let host = mount_host(100).await;
    assert_eq!(host.zoom.x_axis.get_untracked(), AxisWindow::new(0.0, 99.0));
    assert!(!host.zoom.is_zoomed.get_untracked());

    let event = wheel_at(&host.surface, -50.0, 450.0);
    host.surface.dispatch_event(&event).unwrap();
    assert!(event.default_prevented());
    assert_eq!(host.zoom.x_axis.get_untracked(), AxisWindow::new(0.0, 99.0));

    TimeoutFuture::new(100).await;
    let x = host.zoom.x_axis.get_untracked();
    assert!(x.max - x.min < 99.0);
    assert!(host.zoom.is_zoomed.get_untracked());
}

#[wasm_bindgen_test]
async fn data_length_signal_resets_to_new_extent() {
    let host = mount_host(100).await;
    host.length.set(250);
    TimeoutFuture::new(50).await;
    assert_eq!(host.zoom.x_axis.get_untracked(), AxisWindow::new(0.0, 249.0));
}

#[wasm_bindgen_test]
async fn y_sources_callback_feeds_auto_range() {
    let host = mount_host(100).await;
    host.zoom.set_y_sources.call(vec![(0..100).map(|i| Some(i as f64)).collect()]);
    assert_eq!(host.zoom.y_domain.get_untracked(), YDomain { min: 0.0, max: None });

    host.surface.dispatch_event(&wheel_at(&host.surface, -50.0, 450.0)).unwrap();
    TimeoutFuture::new(50).await;
    let max = host.zoom.y_domain.get_untracked().max.expect("constrained after zoom");
    assert!(max > 90.0 && max < 120.0, "max = {}", max);

    host.zoom.reset_zoom.call(());
    let y_domain = host.zoom.y_domain;
    until(move || y_domain.get_untracked().max.is_none()).await;
    assert!(!host.zoom.is_zoomed.get_untracked());
}

#[wasm_bindgen_test]
async fn container_props_keep_working_across_rerenders() {
    let host = mount_host(100).await;
    let props = host.zoom.container;

    host.length.set(120);
    TimeoutFuture::new(50).await;
    host.surface.dispatch_event(&wheel_at(&host.surface, -50.0, 450.0)).unwrap();
    let before = settled(host.zoom.x_axis).await;
    assert!(host.zoom.is_zoomed.get_untracked());

    // Copies taken before the re-renders still reach the same element and controller.
    let current = props.node_ref.get_untracked().expect("still mounted");
    let current: &web_sys::Node = &current;
    assert!(host.surface.is_same_node(Some(current)));

    let rect = host.surface.get_bounding_client_rect();
    props.on_mouse_down.call(mouse("mousedown", rect.left() + 600.0, rect.top() + 100.0));
    props.on_mouse_move.call(mouse("mousemove", rect.left() + 590.0, rect.top() + 100.0));
    props.on_mouse_leave.call(mouse("mouseleave", rect.left() + 590.0, rect.top() + 100.0));

    TimeoutFuture::new(50).await;
    let shift = (before.max - before.min) * 10.0 / 900.0;
    assert!((host.zoom.x_axis.get_untracked().min - (before.min + shift)).abs() < 1e-6);
}

#[wasm_bindgen_test]
async fn bubbling_mouse_events_drag_through_the_view_handlers() {
    let host = mount_host(100).await;
    host.surface.dispatch_event(&wheel_at(&host.surface, -500.0, 0.0)).unwrap();
    let before = settled(host.zoom.x_axis).await;
    assert_eq!(before.min, 0.0);

    let rect = host.surface.get_bounding_client_rect();
    host.surface.dispatch_event(&mouse("mousedown", rect.left() + 600.0, rect.top() + 100.0)).unwrap();
    host.surface.dispatch_event(&mouse("mousemove", rect.left() + 590.0, rect.top() + 100.0)).unwrap();
    host.surface.dispatch_event(&mouse("mouseup", rect.left() + 590.0, rect.top() + 100.0)).unwrap();

    TimeoutFuture::new(50).await;
    let after = host.zoom.x_axis.get_untracked();
    let width = before.max - before.min;
    assert!((after.min - width * 10.0 / 900.0).abs() < 1e-6, "min = {}", after.min);
}

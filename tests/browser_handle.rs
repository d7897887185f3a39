#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use chart_zoom_wasm::ChartZoomHandle;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{HtmlDivElement, WheelEvent, WheelEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn surface() -> HtmlDivElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap().dyn_into::<HtmlDivElement>().unwrap();
    div.style().set_property("width", "900px").unwrap();
    div.style().set_property("height", "300px").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn zoom_in_at_centre(div: &HtmlDivElement) {
    let rect = div.get_bounding_client_rect();
    let init = WheelEventInit::new();
    init.set_delta_y(-50.0);
    init.set_client_x((rect.left() + 450.0).round() as i32);
    init.set_client_y((rect.top() + 100.0).round() as i32);
    init.set_cancelable(true);
    div.dispatch_event(&WheelEvent::new_with_event_init_dict("wheel", &init).unwrap())
        .unwrap();
}

fn construction_error(options: &str) -> js_sys::Error {
    match ChartZoomHandle::new(10, Some(options.to_string())) {
        Ok(_) => panic!("options {} were accepted", options),
        Err(e) => e.dyn_into::<js_sys::Error>().expect("a JS Error"),
    }
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn malformed_options_json_throws() {
    let error = construction_error("{ not json");
    assert!(String::from(error.message()).contains("invalid zoom options"));
}

#[wasm_bindgen_test]
fn out_of_range_option_values_throw() {
    for options in [r#"{"minWindow": 0}"#, r#"{"marginLeft": -4}"#, r#"{"yPadding": -0.5}"#] {
        let error = construction_error(options);
        assert!(String::from(error.message()).starts_with("Validation Error"));
    }
}

#[wasm_bindgen_test]
fn blank_options_fall_back_to_defaults() {
    for options in [None, Some(String::new()), Some("  ".to_string())] {
        let handle = ChartZoomHandle::new(10, options).expect("defaults");
        assert!(!handle.is_zoomed());
        assert_eq!(field(&handle.x_axis().unwrap(), "max").as_f64(), Some(9.0));
    }
}

#[wasm_bindgen_test]
async fn y_sources_skip_null_undefined_and_nan() {
    let div = surface();
    let mut handle = ChartZoomHandle::new(10, None).unwrap();
    handle.attach(&div);

    let series = Array::new();
    for value in [
        JsValue::from_f64(2.0),
        JsValue::NULL,
        JsValue::from_f64(8.0),
        JsValue::UNDEFINED,
        JsValue::from_f64(f64::NAN),
        JsValue::from_f64(4.0),
        JsValue::from_f64(6.0),
        JsValue::NULL,
        JsValue::from_f64(3.0),
        JsValue::from_f64(f64::NAN),
    ] {
        series.push(&value);
    }
    handle.set_y_sources(Array::of1(&series));
    assert!(field(&handle.y_domain().unwrap(), "max").is_undefined());

    zoom_in_at_centre(&div);
    TimeoutFuture::new(100).await;

    let max = field(&handle.y_domain().unwrap(), "max").as_f64().expect("finite max");
    assert!(max >= 8.0 && max < 10.0, "max = {}", max);
    handle.detach();
}

#[wasm_bindgen_test]
async fn on_change_receives_each_published_snapshot() {
    let div = surface();
    let mut handle = ChartZoomHandle::new(100, None).unwrap();
    handle.attach(&div);

    let received = Rc::new(RefCell::new(Vec::<JsValue>::new()));
    let sink = Rc::clone(&received);
    let callback = Closure::<dyn Fn(JsValue)>::new(move |snapshot: JsValue| sink.borrow_mut().push(snapshot));
    handle.on_change(Some(callback.as_ref().unchecked_ref::<Function>().clone()));

    zoom_in_at_centre(&div);
    TimeoutFuture::new(100).await;

    let count = received.borrow().len();
    assert!(count > 0);
    let last = received.borrow().last().cloned().unwrap();
    assert_eq!(field(&last, "isZoomed").as_bool(), Some(true));
    let x_axis = field(&last, "xAxis");
    assert!(field(&x_axis, "max").as_f64().unwrap() - field(&x_axis, "min").as_f64().unwrap() < 99.0);
    assert!(handle.is_zoomed());

    handle.on_change(None);
    handle.reset_zoom();
    TimeoutFuture::new(100).await;
    assert_eq!(received.borrow().len(), count);
    handle.detach();
}

#[wasm_bindgen_test]
async fn detach_stops_gestures() {
    let div = surface();
    let mut handle = ChartZoomHandle::new(100, None).unwrap();
    handle.attach(&div);
    handle.detach();

    zoom_in_at_centre(&div);
    TimeoutFuture::new(50).await;
    assert!(!handle.is_zoomed());
}

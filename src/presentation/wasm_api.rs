use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::{Array, Function};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::binding::ZoomBinding;
use crate::domain::{
    chart::{Viewport, ZoomSnapshot},
    config::ZoomOptions,
    errors::AppError,
    logging::LogComponent,
};
use crate::{log_debug, log_warn};

const COMPONENT: LogComponent = LogComponent::Presentation("ChartZoomHandle");

/// Zoom controller for JavaScript hosts that do not use Leptos.
///
/// ```js
/// const zoom = new ChartZoomHandle(data.length, JSON.stringify({ marginLeft: 40 }));
/// zoom.attach(document.getElementById("chart"));
/// zoom.onChange((s) => redraw(s.xAxis, s.yDomain));
/// ```
#[wasm_bindgen]
pub struct ChartZoomHandle {
    binding: ZoomBinding,
    listeners: Vec<EventListener>,
    change_callback: Rc<RefCell<Option<Function>>>,
    latest: Rc<Cell<ZoomSnapshot>>,
}

#[wasm_bindgen]
impl ChartZoomHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(data_length: usize, options_json: Option<String>) -> Result<ChartZoomHandle, JsValue> {
        let options = match options_json.as_deref() {
            Some(json) if !json.trim().is_empty() => ZoomOptions::from_json(json)?,
            _ => ZoomOptions::default(),
        };

        let change_callback: Rc<RefCell<Option<Function>>> = Rc::default();
        let latest = Rc::new(Cell::new(ZoomSnapshot::from_viewport(&Viewport::full_extent(data_length), data_length)));
        let binding = {
            let (callback, sink) = (Rc::clone(&change_callback), Rc::clone(&latest));
            ZoomBinding::new(data_length, options, move |snapshot| {
                sink.set(snapshot);
                notify(&callback, &snapshot);
            })
        };

        Ok(Self { binding, listeners: Vec::new(), change_callback, latest })
    }

    /// Register every gesture listener on `element`, replacing earlier ones.
    pub fn attach(&mut self, element: &web_sys::Element) {
        self.listeners = self.binding.attach_all_listeners(element);
        log_debug!(COMPONENT, "Attached {} listeners", self.listeners.len());
    }

    /// Remove listeners and stop any pending frame.
    pub fn detach(&mut self) {
        if self.listeners.is_empty() {
            log_warn!(COMPONENT, "detach() called with no listeners attached");
        }
        self.listeners.clear();
        self.binding.shutdown();
    }

    #[wasm_bindgen(js_name = setDataLength)]
    pub fn set_data_length(&self, data_length: usize) {
        self.binding.with(|c| c.set_data_length(data_length));
    }

    /// Arrays of numbers; `null`, `undefined` and `NaN` entries are gaps.
    #[wasm_bindgen(js_name = setYSources)]
    pub fn set_y_sources(&self, sources: Array) {
        let sources: Vec<_> = sources.iter().map(|series| series_values(&series)).collect();
        self.binding.with(|c| c.set_y_sources(sources));
    }

    #[wasm_bindgen(js_name = resetZoom)]
    pub fn reset_zoom(&self) {
        self.binding.with(|c| c.reset_zoom());
    }

    /// Last published `{ min, max }` window.
    #[wasm_bindgen(js_name = xAxis)]
    pub fn x_axis(&self) -> Result<JsValue, JsValue> {
        to_js(&self.latest.get().x_axis)
    }

    /// Last published `{ min, max? }` domain. `max` is absent when unconstrained.
    #[wasm_bindgen(js_name = yDomain)]
    pub fn y_domain(&self) -> Result<JsValue, JsValue> {
        to_js(&self.latest.get().y_domain)
    }

    #[wasm_bindgen(js_name = isZoomed)]
    pub fn is_zoomed(&self) -> bool {
        self.latest.get().is_zoomed
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.latest.get())
    }

    /// Called with each published snapshot. Pass `null` to clear.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Option<Function>) {
        *self.change_callback.borrow_mut() = callback;
    }
}

/// Non-numbers and `NaN` become gaps; infinities are kept.
fn series_values(series: &JsValue) -> Vec<Option<f64>> {
    Array::from(series).iter().map(|value| value.as_f64().filter(|v| !v.is_nan())).collect()
}

fn notify(change_callback: &RefCell<Option<Function>>, snapshot: &ZoomSnapshot) {
    let Some(callback) = change_callback.borrow().clone() else {
        return;
    };
    let result = to_js(snapshot).and_then(|value| callback.call1(&JsValue::NULL, &value));
    if let Err(e) = result {
        log_warn!(COMPONENT, "onChange callback failed: {:?}", e);
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| AppError::BrowserApiError(e.to_string()))?;
    js_sys::JSON::parse(&json)
}

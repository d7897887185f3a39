//! Browser-facing surfaces: the Leptos hook and the JavaScript handle.

pub mod binding;
pub mod use_chart_zoom;
pub mod wasm_api;

pub use binding::{BrowserZoomController, ZoomBinding};
pub use use_chart_zoom::{ChartZoom, ContainerProps, use_chart_zoom};
pub use wasm_api::ChartZoomHandle;

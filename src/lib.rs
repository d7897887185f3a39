use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::config::ZoomOptions;
pub use presentation::{ChartZoom, ChartZoomHandle, use_chart_zoom};

/// Install the browser logger, clock and panic hook
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "Chart zoom module initialized");
}

/// Mount the demo chart to `<body>`
#[wasm_bindgen(js_name = mountDemo)]
pub fn mount_demo() {
    leptos::mount_to_body(|| leptos::view! { <app::ZoomDemo /> });
}

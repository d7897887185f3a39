#![allow(dead_code)]

use chart_zoom_wasm::application::ZoomController;
use chart_zoom_wasm::domain::chart::{ContainerGeometry, PointerSample, ZoomSnapshot};
use chart_zoom_wasm::domain::config::ZoomOptions;
use chart_zoom_wasm::domain::scheduling::FrameScheduler;
use chart_zoom_wasm::infrastructure::ManualFrameScheduler;

pub type TestController = ZoomController<ManualFrameScheduler>;

pub fn controller(data_length: usize) -> TestController {
    ZoomController::new(data_length, ZoomOptions::default(), ManualFrameScheduler::new())
}

pub fn container(width: f64, height: f64) -> ContainerGeometry {
    ContainerGeometry::new(width, height)
}

pub fn at(x: f64, y: f64) -> PointerSample {
    PointerSample::new(x, y)
}

/// Fire frames until none is pending; returns every published snapshot.
pub fn settle(controller: &mut TestController) -> Vec<ZoomSnapshot> {
    let mut published = Vec::new();
    let mut frames = 0;
    while controller.scheduler().is_frame_pending() {
        frames += 1;
        assert!(frames < 10_000, "frame loop did not terminate");
        if let Some(snapshot) = controller.on_frame() {
            published.push(snapshot);
        }
    }
    published
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

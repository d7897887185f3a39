use web_sys::{Element, MouseEvent, TouchList};

use crate::domain::chart::{ContainerGeometry, PointerSample};

/// Position and size of the gesture-capturing element at event time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementFrame {
    pub left: f64,
    pub top: f64,
    pub geometry: ContainerGeometry,
}

impl ElementFrame {
    pub fn measure(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            geometry: ContainerGeometry::new(rect.width(), rect.height()),
        }
    }

    pub fn to_local(&self, client_x: f64, client_y: f64) -> PointerSample {
        PointerSample::new(client_x - self.left, client_y - self.top)
    }

    pub fn mouse_sample(&self, ev: &MouseEvent) -> PointerSample {
        self.to_local(ev.client_x() as f64, ev.client_y() as f64)
    }

    pub fn touch_samples(&self, touches: &TouchList) -> Vec<PointerSample> {
        (0..touches.length())
            .filter_map(|i| touches.get(i))
            .map(|t| self.to_local(t.client_x() as f64, t.client_y() as f64))
            .collect()
    }
}

use derive_more::Constructor;
use serde::Serialize;

/// Horizontal distance (index units) under which an edge still counts as the data edge
/// for the zoomed flag.
pub const ZOOMED_EPSILON: f64 = 0.1;

/// Value Object - vertical window in data units
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct YRange {
    pub min: f64,
    pub max: f64,
}

impl YRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn shifted(&self, delta: f64) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }
}

/// Value Object - Viewport over an index-addressed series.
///
/// `y == None` means the vertical axis is unconstrained and the host fits it to
/// all data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y: Option<YRange>,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y: Option<YRange>) -> Self {
        Self { x_min, x_max, y }
    }

    /// Full data extent with an unconstrained Y axis.
    pub fn full_extent(data_length: usize) -> Self {
        Self::new(0.0, last_index(data_length), None)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn center(&self) -> f64 {
        (self.x_min + self.x_max) / 2.0
    }

    pub fn with_x(&self, x_min: f64, x_max: f64) -> Self {
        Self { x_min, x_max, ..*self }
    }

    /// Data-space x value at a fractional horizontal position of the window.
    pub fn x_at_fraction(&self, fraction: f64) -> f64 {
        self.x_min + self.width() * fraction
    }

    /// Zoomed unless the X window sits on the data edges and Y is unconstrained.
    pub fn is_zoomed(&self, data_length: usize) -> bool {
        self.x_min > ZOOMED_EPSILON
            || self.x_max < last_index(data_length) - ZOOMED_EPSILON
            || self.y.is_some()
    }
}

/// Highest valid index for a series of `data_length` points, as f64.
pub fn last_index(data_length: usize) -> f64 {
    data_length.saturating_sub(1) as f64
}

/// Published horizontal window
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct AxisWindow {
    pub min: f64,
    pub max: f64,
}

/// Published vertical domain. `max == None` lets the host auto-fit the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YDomain {
    pub min: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl YDomain {
    pub fn from_range(range: Option<YRange>) -> Self {
        match range {
            Some(r) => Self { min: r.min.max(0.0), max: Some(r.max) },
            None => Self { min: 0.0, max: None },
        }
    }

    pub fn is_constrained(&self) -> bool {
        self.max.is_some()
    }
}

/// Render-safe copy of the viewport handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomSnapshot {
    pub x_axis: AxisWindow,
    pub y_domain: YDomain,
    pub is_zoomed: bool,
}

impl ZoomSnapshot {
    pub fn from_viewport(viewport: &Viewport, data_length: usize) -> Self {
        Self {
            x_axis: AxisWindow::new(viewport.x_min, viewport.x_max),
            y_domain: YDomain::from_range(viewport.y),
            is_zoomed: viewport.is_zoomed(data_length),
        }
    }
}

/// Pointer position relative to the container's top-left corner, in px.
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn distance_to(&self, other: &PointerSample) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Size of the gesture-capturing element, in px.
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor)]
pub struct ContainerGeometry {
    pub width: f64,
    pub height: f64,
}

/// Plot area inside the container once margins are removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Fraction of the plot width at container x `px`, clamped to `[0, 1]`.
    /// A plot area without width reports its centre.
    pub fn horizontal_fraction(&self, px: f64) -> f64 {
        if self.width <= 0.0 {
            return 0.5;
        }
        ((px - self.left) / self.width).clamp(0.0, 1.0)
    }

    /// Screen x of a data index, for hosts drawing their own overlays.
    pub fn index_to_x(&self, index: f64, viewport: &Viewport) -> f64 {
        let width = viewport.width();
        if width == 0.0 {
            return self.left;
        }
        self.left + (index - viewport.x_min) / width * self.width
    }
}

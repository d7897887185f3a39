use serde::{Deserialize, Serialize};

use crate::domain::chart::{ContainerGeometry, PlotArea};
use crate::domain::errors::{AppError, ConfigResult};

/// Layout and behaviour options for a zoom controller.
///
/// Deserializes from the camelCase JSON a JavaScript host passes in; missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomOptions {
    /// Narrowest window (index units) a zoom-in may reach.
    pub min_window: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    /// Container height used when the element reports none.
    pub chart_height: f64,
    /// Fraction of the visible value span added above and below the auto Y-range.
    pub y_padding: f64,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            min_window: 2.5,
            margin_left: 0.0,
            margin_right: 0.0,
            margin_top: 0.0,
            margin_bottom: 0.0,
            chart_height: 300.0,
            y_padding: 0.15,
        }
    }
}

impl ZoomOptions {
    pub fn with_margins(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    pub fn with_min_window(mut self, min_window: f64) -> Self {
        self.min_window = min_window;
        self
    }

    pub fn with_y_padding(mut self, y_padding: f64) -> Self {
        self.y_padding = y_padding;
        self
    }

    /// Parse options from JSON and validate them.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| AppError::ValidationError(format!("invalid zoom options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("minWindow", self.min_window),
            ("marginLeft", self.margin_left),
            ("marginRight", self.margin_right),
            ("marginTop", self.margin_top),
            ("marginBottom", self.margin_bottom),
            ("chartHeight", self.chart_height),
            ("yPadding", self.y_padding),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AppError::ValidationError(format!("{} must be finite", name)));
            }
            if value < 0.0 {
                return Err(AppError::ValidationError(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        if self.min_window <= 0.0 {
            return Err(AppError::ValidationError(
                "minWindow must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Plot area inside a container of the given size.
    pub fn plot_area(&self, container: ContainerGeometry) -> PlotArea {
        let height = if container.height > 0.0 { container.height } else { self.chart_height };
        PlotArea {
            left: self.margin_left,
            top: self.margin_top,
            width: container.width - self.margin_left - self.margin_right,
            height: height - self.margin_top - self.margin_bottom,
        }
    }
}

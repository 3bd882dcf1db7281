use serde::{Deserialize, Serialize};

/// Interactive affordances the render surface should expose for a chart.
///
/// The dashboard's standard set: zoom, polygon brush selection, view
/// restore, and image export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolboxCapabilities {
    pub data_zoom: bool,
    /// Axis index the zoom gesture also scales; `None` zooms x only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_zoom_y_axis: Option<usize>,
    pub brush_polygon: bool,
    pub restore: bool,
    pub save_as_image: bool,
}

impl ToolboxCapabilities {
    /// Full standard set with x-only zoom.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            data_zoom: true,
            data_zoom_y_axis: None,
            brush_polygon: true,
            restore: true,
            save_as_image: true,
        }
    }

    #[must_use]
    pub fn with_y_axis_zoom(mut self, axis_index: usize) -> Self {
        self.data_zoom_y_axis = Some(axis_index);
        self
    }
}

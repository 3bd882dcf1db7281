use serde::{Deserialize, Serialize};

use crate::spec::tooltip::TooltipFormat;

/// One rectangular plotting region, in percent of the chart canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRegion {
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
    /// Overrides the chart-level tooltip format inside this region.
    pub tooltip_format: TooltipFormat,
}

impl GridRegion {
    #[must_use]
    pub const fn new(
        left_pct: f64,
        top_pct: f64,
        width_pct: f64,
        height_pct: f64,
        tooltip_format: TooltipFormat,
    ) -> Self {
        Self {
            left_pct,
            top_pct,
            width_pct,
            height_pct,
            tooltip_format,
        }
    }
}

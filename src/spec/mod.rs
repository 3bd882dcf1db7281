//! Renderer-agnostic chart configuration model.
//!
//! A `ChartSpec` is built fresh for every render and handed to the charting
//! widget as plain data; nothing here knows how the widget paints.

pub mod axis;
pub mod json_contract;
pub mod layout;
pub mod series;
pub mod theme;
pub mod toolbox;
pub mod tooltip;

pub use axis::{AxisDomain, AxisKind, AxisOrientation, AxisSpec};
pub use json_contract::{CHART_SPEC_JSON_SCHEMA_V1, ChartSpecJsonContractV1};
pub use layout::GridRegion;
pub use series::{SeriesData, SeriesKind, SeriesSpec, ValueLabelPosition};
pub use theme::{ThemeMode, ThemeTokens, resolve_theme};
pub use toolbox::ToolboxCapabilities;
pub use tooltip::{
    TooltipFormat, TooltipSpec, TooltipTrigger, format_bin_range, format_indexed_pair,
};

use serde::{Deserialize, Serialize};

/// Chart heading block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    pub text_color: String,
    pub subtext_color: String,
}

impl TitleSpec {
    #[must_use]
    pub fn new(text: impl Into<String>, theme: ThemeTokens) -> Self {
        Self {
            text: text.into(),
            subtext: None,
            text_color: theme.text_color.to_owned(),
            subtext_color: theme.subtext_color.to_owned(),
        }
    }

    #[must_use]
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }
}

/// Legend placement; the dashboard pins legends under the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub position: LegendPosition,
}

impl LegendSpec {
    #[must_use]
    pub fn bottom() -> Self {
        Self {
            position: LegendPosition::Bottom,
        }
    }
}

/// One fully resolved, immutable chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub background: String,
    pub title: TitleSpec,
    pub toolbox: ToolboxCapabilities,
    pub axes: Vec<AxisSpec>,
    pub series: Vec<SeriesSpec>,
    pub tooltip: TooltipSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grids: Vec<GridRegion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendSpec>,
}

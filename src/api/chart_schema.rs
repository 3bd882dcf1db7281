use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ScalarValue;
use crate::error::ChartError;

/// Closed set of chart kinds the dashboard can persist.
///
/// Parsing is the single gate: an unrecognized name fails with
/// `UnsupportedChartType` instead of degrading into an empty chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChartType {
    Count,
    Bar,
    Line,
    Scatter,
    ScatterWithHistograms,
}

impl ChartType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::ScatterWithHistograms => "scatter_with_histograms",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "count" => Ok(Self::Count),
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "scatter" => Ok(Self::Scatter),
            "scatter_with_histograms" => Ok(Self::ScatterWithHistograms),
            other => Err(ChartError::UnsupportedChartType(other.to_owned())),
        }
    }
}

impl TryFrom<String> for ChartType {
    type Error = ChartError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl From<ChartType> for String {
    fn from(chart_type: ChartType) -> Self {
        chart_type.as_str().to_owned()
    }
}

/// Persisted descriptor naming which record column(s) and chart kind to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSchema {
    pub chart_type: ChartType,
    pub first_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    /// Overrides `DEFAULT_BIN_COUNT` for histogram panels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_count: Option<usize>,
    /// Literal series attached to the schema instead of record columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_data: Option<Vec<ScalarValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_data: Option<Vec<f64>>,
}

impl ChartSchema {
    #[must_use]
    pub fn new(chart_type: ChartType, first_column: impl Into<String>) -> Self {
        Self {
            chart_type,
            first_column: first_column.into(),
            second_column: None,
            chart_name: None,
            x_label: None,
            y_label: None,
            bin_count: None,
            x_data: None,
            y_data: None,
        }
    }

    #[must_use]
    pub fn with_second_column(mut self, column: impl Into<String>) -> Self {
        self.second_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_chart_name(mut self, name: impl Into<String>) -> Self {
        self.chart_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    #[must_use]
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = Some(bin_count);
        self
    }

    #[must_use]
    pub fn with_literal_data(mut self, x_data: Vec<ScalarValue>, y_data: Vec<f64>) -> Self {
        self.x_data = Some(x_data);
        self.y_data = Some(y_data);
        self
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, HistogramBin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Bar,
    Line,
    Scatter,
}

/// Where a bar series paints its per-item value labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueLabelPosition {
    Top,
    Right,
}

/// Payload of one series, shaped by what its axes expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesData {
    /// One value per category of the matching category axis.
    CategoryValues(Vec<f64>),
    /// Independent `(x, y)` samples in index order.
    Points(Vec<DataPoint>),
    /// Pre-binned histogram ranges.
    Bins(Vec<HistogramBin>),
}

impl SeriesData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::CategoryValues(values) => values.len(),
            Self::Points(points) => points.len(),
            Self::Bins(bins) => bins.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One fully resolved series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub kind: SeriesKind,
    /// Index into `ChartSpec::axes`.
    pub x_axis: usize,
    /// Index into `ChartSpec::axes`.
    pub y_axis: usize,
    pub data: SeriesData,
    /// Line charts may suppress per-point symbol markers.
    pub show_symbols: bool,
    /// Fraction of the bar slot the bar fills (histogram panels use 0.993).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_width_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_labels: Option<ValueLabelPosition>,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: SeriesKind,
        x_axis: usize,
        y_axis: usize,
        data: SeriesData,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            x_axis,
            y_axis,
            data,
            show_symbols: true,
            bar_width_fraction: None,
            value_labels: None,
        }
    }

    #[must_use]
    pub fn without_symbols(mut self) -> Self {
        self.show_symbols = false;
        self
    }

    #[must_use]
    pub fn with_bar_width_fraction(mut self, fraction: f64) -> Self {
        self.bar_width_fraction = Some(fraction);
        self
    }

    #[must_use]
    pub fn with_value_labels(mut self, position: ValueLabelPosition) -> Self {
        self.value_labels = Some(position);
        self
    }
}

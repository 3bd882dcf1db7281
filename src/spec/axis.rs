use serde::{Deserialize, Serialize};

use crate::spec::theme::ThemeTokens;

/// Screen direction an axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Continuous value axis or discrete category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Value,
    Category,
}

/// Pinned numeric span for a value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

/// One fully resolved axis of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub orientation: AxisOrientation,
    pub kind: AxisKind,
    /// Grid region this axis belongs to (0 for single-grid charts).
    pub grid_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<AxisDomain>,
    /// Forces the axis to start at zero (count axes of histogram panels).
    pub zero_baseline: bool,
    pub show_line: bool,
    pub show_ticks: bool,
    pub show_labels: bool,
    pub line_color: String,
    pub label_color: String,
    pub grid_line_color: String,
}

impl AxisSpec {
    /// Continuous axis styled from the theme.
    #[must_use]
    pub fn value(orientation: AxisOrientation, grid_index: usize, theme: ThemeTokens) -> Self {
        Self {
            orientation,
            kind: AxisKind::Value,
            grid_index,
            name: None,
            categories: Vec::new(),
            domain: None,
            zero_baseline: false,
            show_line: true,
            show_ticks: true,
            show_labels: true,
            line_color: theme.axis_line_color.to_owned(),
            label_color: theme.axis_label_color.to_owned(),
            grid_line_color: theme.grid_line_color.to_owned(),
        }
    }

    /// Discrete axis carrying explicit category labels.
    #[must_use]
    pub fn category(
        orientation: AxisOrientation,
        grid_index: usize,
        categories: Vec<String>,
        theme: ThemeTokens,
    ) -> Self {
        Self {
            categories,
            kind: AxisKind::Category,
            ..Self::value(orientation, grid_index, theme)
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some(AxisDomain { min, max });
        self
    }

    #[must_use]
    pub fn with_zero_baseline(mut self) -> Self {
        self.zero_baseline = true;
        self
    }

    /// Keeps the axis for layout but hides its line, ticks, and labels.
    #[must_use]
    pub fn decorations_hidden(mut self) -> Self {
        self.show_line = false;
        self.show_ticks = false;
        self.show_labels = false;
        self
    }
}

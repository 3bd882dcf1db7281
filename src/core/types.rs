use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One scalar cell of a monitored record.
///
/// JSON numbers, strings, and nulls map onto the variants directly, so
/// heterogeneous feature maps deserialize without a custom visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(f64),
    Text(String),
    Missing,
}

impl ScalarValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Missing => None,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Label used on category axes and in frequency tables.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::Text(text) => text.clone(),
            Self::Missing => "missing".to_owned(),
        }
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Formats a coordinate without a trailing `.0` on integral values.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// One monitored prediction row: the model output plus its input features.
///
/// Owned by the caller and borrowed by the core; nothing here is mutated
/// after the record set arrives from the data-fetching layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub prediction: ScalarValue,
    #[serde(default)]
    pub input_data: IndexMap<String, ScalarValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_date: Option<DateTime<Utc>>,
}

impl Record {
    #[must_use]
    pub fn new(prediction: impl Into<ScalarValue>) -> Self {
        Self {
            prediction: prediction.into(),
            input_data: IndexMap::new(),
            prediction_date: None,
        }
    }

    #[must_use]
    pub fn with_feature(mut self, name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.input_data.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_prediction_date(mut self, date: DateTime<Utc>) -> Self {
        self.prediction_date = Some(date);
        self
    }
}

/// Point in chart data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

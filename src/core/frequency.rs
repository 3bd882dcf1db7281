use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::ScalarValue;

/// One distinct value with its occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: ScalarValue,
    pub count: usize,
}

/// Distinct-value counts in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    #[must_use]
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all occurrence counts; equals the length of the counted input.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Category labels in discovery order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.value.label()).collect()
    }

    /// Counts aligned with `labels`, as chart-ready values.
    #[must_use]
    pub fn counts(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.count as f64).collect()
    }
}

/// Hashable identity for a scalar; floats compare by total order so repeated
/// NaN samples collapse into one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ScalarKey {
    Number(OrderedFloat<f64>),
    Text(String),
    Missing,
}

impl ScalarKey {
    fn of(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::Number(number) => Self::Number(OrderedFloat(*number)),
            ScalarValue::Text(text) => Self::Text(text.clone()),
            ScalarValue::Missing => Self::Missing,
        }
    }
}

/// Counts distinct values in first-seen order.
///
/// `Missing` cells count as their own category so gaps in the monitored
/// stream stay visible in count plots instead of silently shrinking them.
#[must_use]
pub fn count_unique_values(values: &[ScalarValue]) -> FrequencyTable {
    let mut counts: IndexMap<ScalarKey, (ScalarValue, usize)> = IndexMap::new();
    for value in values {
        counts
            .entry(ScalarKey::of(value))
            .and_modify(|(_, count)| *count += 1)
            .or_insert_with(|| (value.clone(), 1));
    }

    FrequencyTable {
        entries: counts
            .into_values()
            .map(|(value, count)| FrequencyEntry { value, count })
            .collect(),
    }
}

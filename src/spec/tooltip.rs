use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, HistogramBin, format_number};

/// Pointer interaction that raises the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Item,
    Axis,
}

/// Formatter contract the render surface should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipFormat {
    /// Renderer's stock single-item tooltip.
    Default,
    /// `"{series} ({index})"` followed by the raw `"({x}, {y})"` pair.
    IndexedPair,
    /// `"[{start}, {end}): {count}"` per histogram bin.
    BinRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipSpec {
    pub trigger: TooltipTrigger,
    pub format: TooltipFormat,
}

impl TooltipSpec {
    #[must_use]
    pub fn item_default() -> Self {
        Self {
            trigger: TooltipTrigger::Item,
            format: TooltipFormat::Default,
        }
    }
}

/// Reference rendering of `TooltipFormat::IndexedPair`.
#[must_use]
pub fn format_indexed_pair(series_name: &str, index: usize, point: DataPoint) -> String {
    format!(
        "{series_name} ({index})\n({x}, {y})",
        x = format_number(point.x),
        y = format_number(point.y)
    )
}

/// Reference rendering of `TooltipFormat::BinRange`.
///
/// The final bin is counted closed but keeps the half-open notation.
#[must_use]
pub fn format_bin_range(bin: HistogramBin) -> String {
    format!(
        "[{start}, {end}): {count}",
        start = format_number(bin.range_start),
        end = format_number(bin.range_end),
        count = bin.count
    )
}

use crate::core::{DataPoint, HistogramBin};
use crate::spec::{
    AxisOrientation, AxisSpec, ChartSpec, GridRegion, SeriesData, SeriesKind, SeriesSpec,
    ThemeTokens, TitleSpec, ToolboxCapabilities, TooltipFormat, TooltipSpec, ValueLabelPosition,
};

const SCATTER_GRID: usize = 0;
const FIRST_HISTOGRAM_GRID: usize = 1;
const SECOND_HISTOGRAM_GRID: usize = 2;

/// Histogram bars take almost the whole slot so adjacent bins read as one
/// continuous distribution.
const HISTOGRAM_BAR_WIDTH_FRACTION: f64 = 0.993;

fn bin_span(bins: &[HistogramBin]) -> Option<(f64, f64)> {
    match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => Some((first.range_start, last.range_end)),
        _ => None,
    }
}

fn with_span(axis: AxisSpec, span: Option<(f64, f64)>) -> AxisSpec {
    match span {
        Some((min, max)) => axis.with_domain(min, max),
        None => axis,
    }
}

/// Builds the three-panel composite: scatter top-left, the first column's
/// histogram below it, the second column's histogram to its right.
///
/// The scatter axes pin their domains to the histogram edge spans, which is
/// what keeps the three panels visually aligned.
#[must_use]
pub fn build_scatter_with_histograms_spec(
    points: &[DataPoint],
    first_column_bins: &[HistogramBin],
    second_column_bins: &[HistogramBin],
    first_column: &str,
    second_column: &str,
    theme: ThemeTokens,
) -> ChartSpec {
    let first_span = bin_span(first_column_bins);
    let second_span = bin_span(second_column_bins);

    let scatter_x = with_span(
        AxisSpec::value(AxisOrientation::Horizontal, SCATTER_GRID, theme).with_name(first_column),
        first_span,
    );
    let scatter_y = with_span(
        AxisSpec::value(AxisOrientation::Vertical, SCATTER_GRID, theme).with_name(second_column),
        second_span,
    );
    // The shared-span axes stay undecorated: the scatter already labels them.
    let first_hist_x = with_span(
        AxisSpec::value(AxisOrientation::Horizontal, FIRST_HISTOGRAM_GRID, theme)
            .decorations_hidden(),
        first_span,
    );
    let first_hist_y = AxisSpec::value(AxisOrientation::Vertical, FIRST_HISTOGRAM_GRID, theme)
        .with_zero_baseline();
    let second_hist_x = AxisSpec::value(AxisOrientation::Horizontal, SECOND_HISTOGRAM_GRID, theme)
        .with_zero_baseline();
    let second_hist_y = with_span(
        AxisSpec::value(AxisOrientation::Vertical, SECOND_HISTOGRAM_GRID, theme)
            .decorations_hidden(),
        second_span,
    );

    let scatter_series = SeriesSpec::new(
        format!("({first_column}, {second_column})"),
        SeriesKind::Scatter,
        0,
        1,
        SeriesData::Points(points.to_vec()),
    );
    let first_hist_series = SeriesSpec::new(
        first_column,
        SeriesKind::Bar,
        2,
        3,
        SeriesData::Bins(first_column_bins.to_vec()),
    )
    .with_bar_width_fraction(HISTOGRAM_BAR_WIDTH_FRACTION)
    .with_value_labels(ValueLabelPosition::Top);
    let second_hist_series = SeriesSpec::new(
        second_column,
        SeriesKind::Bar,
        4,
        5,
        SeriesData::Bins(second_column_bins.to_vec()),
    )
    .with_bar_width_fraction(HISTOGRAM_BAR_WIDTH_FRACTION)
    .with_value_labels(ValueLabelPosition::Right);

    ChartSpec {
        background: theme.background.to_owned(),
        title: TitleSpec::new(
            format!("Comparison of {first_column} and {second_column} features with histograms"),
            theme,
        )
        .with_subtext(format!("Number of bins: {}", first_column_bins.len())),
        toolbox: ToolboxCapabilities::standard(),
        axes: vec![
            scatter_x,
            scatter_y,
            first_hist_x,
            first_hist_y,
            second_hist_x,
            second_hist_y,
        ],
        series: vec![scatter_series, first_hist_series, second_hist_series],
        tooltip: TooltipSpec::item_default(),
        grids: vec![
            GridRegion::new(0.0, 0.0, 50.0, 50.0, TooltipFormat::IndexedPair),
            GridRegion::new(0.0, 50.0, 50.0, 50.0, TooltipFormat::BinRange),
            GridRegion::new(50.0, 0.0, 50.0, 50.0, TooltipFormat::BinRange),
        ],
        legend: None,
    }
}

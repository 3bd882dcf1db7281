use tracing::debug;

use crate::core::{DataPoint, ScalarValue};
use crate::error::{ChartError, ChartResult};
use crate::spec::{
    AxisOrientation, AxisSpec, ChartSpec, LegendSpec, SeriesData, SeriesKind, SeriesSpec,
    ThemeTokens, TitleSpec, ToolboxCapabilities, TooltipFormat, TooltipSpec, TooltipTrigger,
};

/// X/y chart kinds sharing one builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XyChartKind {
    Bar,
    Line,
    Scatter,
}

/// Text attached to an x/y chart: heading, series name, axis names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartLabels {
    pub chart_name: Option<String>,
    pub series_name: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

/// Builds a bar, line, or scatter chart from index-aligned x/y sequences.
///
/// Line points connect in index order, exactly as the data arrived; bar x
/// values become categories; scatter points stay independent. Rows whose x
/// coordinate is not numeric are dropped pairwise for line/scatter.
pub fn build_xy_spec(
    x_values: &[ScalarValue],
    y_values: &[f64],
    kind: XyChartKind,
    labels: &ChartLabels,
    theme: ThemeTokens,
) -> ChartResult<ChartSpec> {
    if x_values.len() != y_values.len() {
        return Err(ChartError::LengthMismatch {
            x_len: x_values.len(),
            y_len: y_values.len(),
        });
    }

    let mut x_axis = match kind {
        XyChartKind::Bar => {
            let categories: Vec<String> = x_values.iter().map(ScalarValue::label).collect();
            AxisSpec::category(AxisOrientation::Horizontal, 0, categories, theme)
        }
        XyChartKind::Line | XyChartKind::Scatter => {
            AxisSpec::value(AxisOrientation::Horizontal, 0, theme)
        }
    };
    if let Some(name) = &labels.x_label {
        x_axis = x_axis.with_name(name.as_str());
    }

    let mut y_axis = AxisSpec::value(AxisOrientation::Vertical, 0, theme);
    if let Some(name) = &labels.y_label {
        y_axis = y_axis.with_name(name.as_str());
    }

    let series = match kind {
        XyChartKind::Bar => SeriesSpec::new(
            labels.series_name.as_str(),
            SeriesKind::Bar,
            0,
            1,
            SeriesData::CategoryValues(y_values.to_vec()),
        ),
        XyChartKind::Line => SeriesSpec::new(
            labels.series_name.as_str(),
            SeriesKind::Line,
            0,
            1,
            SeriesData::Points(paired_points(x_values, y_values)),
        )
        .without_symbols(),
        XyChartKind::Scatter => SeriesSpec::new(
            labels.series_name.as_str(),
            SeriesKind::Scatter,
            0,
            1,
            SeriesData::Points(paired_points(x_values, y_values)),
        ),
    };

    let tooltip = match kind {
        XyChartKind::Bar => TooltipSpec::item_default(),
        XyChartKind::Line => TooltipSpec {
            trigger: TooltipTrigger::Axis,
            format: TooltipFormat::IndexedPair,
        },
        XyChartKind::Scatter => TooltipSpec {
            trigger: TooltipTrigger::Item,
            format: TooltipFormat::IndexedPair,
        },
    };

    let toolbox = match kind {
        // Scatter zoom also scales its value y axis; bar/line zoom x only.
        XyChartKind::Scatter => ToolboxCapabilities::standard().with_y_axis_zoom(0),
        XyChartKind::Bar | XyChartKind::Line => ToolboxCapabilities::standard(),
    };

    Ok(ChartSpec {
        background: theme.background.to_owned(),
        title: TitleSpec::new(labels.chart_name.clone().unwrap_or_default(), theme),
        toolbox,
        axes: vec![x_axis, y_axis],
        series: vec![series],
        tooltip,
        grids: Vec::new(),
        legend: Some(LegendSpec::bottom()),
    })
}

fn paired_points(x_values: &[ScalarValue], y_values: &[f64]) -> Vec<DataPoint> {
    let points: Vec<DataPoint> = x_values
        .iter()
        .zip(y_values)
        .filter_map(|(x, y)| Some(DataPoint::new(x.as_number()?, *y)))
        .collect();

    let dropped = x_values.len() - points.len();
    if dropped > 0 {
        debug!(dropped, "dropped rows with non-numeric x from paired series");
    }
    points
}

use crate::core::FrequencyTable;
use crate::spec::{
    AxisOrientation, AxisSpec, ChartSpec, SeriesData, SeriesKind, SeriesSpec, ThemeTokens,
    TitleSpec, ToolboxCapabilities, TooltipSpec,
};

/// Builds a count plot: one bar per distinct value, discovery order preserved.
///
/// An empty table still yields a complete spec with an empty series; the
/// caller decides whether to render a "no data" state instead.
#[must_use]
pub fn build_count_spec(
    table: &FrequencyTable,
    column_label: &str,
    theme: ThemeTokens,
) -> ChartSpec {
    let category_axis =
        AxisSpec::category(AxisOrientation::Horizontal, 0, table.labels(), theme)
            .with_name(column_label);
    let value_axis = AxisSpec::value(AxisOrientation::Vertical, 0, theme).with_zero_baseline();

    let series = SeriesSpec::new(
        column_label,
        SeriesKind::Bar,
        0,
        1,
        SeriesData::CategoryValues(table.counts()),
    );

    ChartSpec {
        background: theme.background.to_owned(),
        title: TitleSpec::new(format!("Count plot of {column_label}"), theme),
        toolbox: ToolboxCapabilities::standard(),
        axes: vec![category_axis, value_axis],
        series: vec![series],
        tooltip: TooltipSpec::item_default(),
        grids: Vec::new(),
        legend: None,
    }
}

use tracing::debug;

use crate::api::chart_schema::{ChartSchema, ChartType};
use crate::api::count_spec_builder::build_count_spec;
use crate::api::scatter_histogram_spec_builder::build_scatter_with_histograms_spec;
use crate::api::xy_spec_builder::{ChartLabels, XyChartKind, build_xy_spec};
use crate::core::{
    DEFAULT_BIN_COUNT, DataPoint, Record, ScalarValue, compute_histogram_bins, count_unique_values,
};
use crate::error::{ChartError, ChartResult};
use crate::spec::{ChartSpec, ThemeTokens};

/// Column name that maps to the model output instead of a feature.
pub const PREDICTION_COLUMN: &str = "prediction";

/// Pulls one column out of a record set, preserving row order.
///
/// A column absent from every record is `ColumnNotFound`; a column absent
/// from only some records fills the gaps with `Missing` markers so row
/// alignment survives. An empty record set extracts to an empty column.
pub fn extract_column(records: &[Record], column: &str) -> ChartResult<Vec<ScalarValue>> {
    if column == PREDICTION_COLUMN {
        return Ok(records
            .iter()
            .map(|record| record.prediction.clone())
            .collect());
    }

    if !records.is_empty()
        && records
            .iter()
            .all(|record| !record.input_data.contains_key(column))
    {
        return Err(ChartError::ColumnNotFound {
            column: column.to_owned(),
        });
    }

    Ok(records
        .iter()
        .map(|record| {
            record
                .input_data
                .get(column)
                .cloned()
                .unwrap_or(ScalarValue::Missing)
        })
        .collect())
}

/// Numeric view of a column; missing and text cells are skipped.
pub fn extract_numeric_column(records: &[Record], column: &str) -> ChartResult<Vec<f64>> {
    Ok(extract_column(records, column)?
        .iter()
        .filter_map(ScalarValue::as_number)
        .collect())
}

/// Index-aligned numeric pairs of two columns; rows where either side is
/// missing or non-numeric are dropped pairwise.
pub fn extract_numeric_pairs(
    records: &[Record],
    first: &str,
    second: &str,
) -> ChartResult<Vec<DataPoint>> {
    let first_values = extract_column(records, first)?;
    let second_values = extract_column(records, second)?;

    Ok(first_values
        .iter()
        .zip(&second_values)
        .filter_map(|(x, y)| Some(DataPoint::new(x.as_number()?, y.as_number()?)))
        .collect())
}

/// Chart-kind-specific inputs derived from a record set and its schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartInputs {
    /// One column's value sequence, ready for `count_unique_values`.
    Count {
        column: String,
        values: Vec<ScalarValue>,
    },
    /// Index-aligned x/y sequences for bar, line, and scatter charts.
    Xy {
        kind: XyChartKind,
        x_values: Vec<ScalarValue>,
        y_values: Vec<f64>,
    },
    /// Raw pairs plus both columns' full sequences for independent binning.
    ScatterWithHistograms {
        points: Vec<DataPoint>,
        first_values: Vec<f64>,
        second_values: Vec<f64>,
    },
}

/// Derives the inputs a chart kind needs from records and a persisted schema.
///
/// Dispatch is exhaustive over the closed `ChartType` set: a schema that
/// survived parsing always lands in exactly one arm.
pub fn build_chart_inputs(records: &[Record], schema: &ChartSchema) -> ChartResult<ChartInputs> {
    debug!(
        chart_type = %schema.chart_type,
        rows = records.len(),
        "build chart inputs"
    );

    match schema.chart_type {
        ChartType::Count => {
            let values = extract_column(records, &schema.first_column)?;
            Ok(ChartInputs::Count {
                column: schema.first_column.clone(),
                values,
            })
        }
        ChartType::Bar => {
            let (x_values, y_values) = xy_sequences(records, schema, false)?;
            Ok(ChartInputs::Xy {
                kind: XyChartKind::Bar,
                x_values,
                y_values,
            })
        }
        ChartType::Line => {
            let (x_values, y_values) = xy_sequences(records, schema, true)?;
            Ok(ChartInputs::Xy {
                kind: XyChartKind::Line,
                x_values,
                y_values,
            })
        }
        ChartType::Scatter => {
            let (x_values, y_values) = xy_sequences(records, schema, true)?;
            Ok(ChartInputs::Xy {
                kind: XyChartKind::Scatter,
                x_values,
                y_values,
            })
        }
        ChartType::ScatterWithHistograms => {
            let second = required_second_column(schema)?;
            Ok(ChartInputs::ScatterWithHistograms {
                points: extract_numeric_pairs(records, &schema.first_column, second)?,
                first_values: extract_numeric_column(records, &schema.first_column)?,
                second_values: extract_numeric_column(records, second)?,
            })
        }
    }
}

/// End-to-end construction for one persisted monitoring chart: derive the
/// inputs, compute the statistics the kind needs, and build the spec.
pub fn build_monitoring_chart_spec(
    records: &[Record],
    schema: &ChartSchema,
    theme: ThemeTokens,
) -> ChartResult<ChartSpec> {
    match build_chart_inputs(records, schema)? {
        ChartInputs::Count { column, values } => {
            let table = count_unique_values(&values);
            Ok(build_count_spec(&table, &column, theme))
        }
        ChartInputs::Xy {
            kind,
            x_values,
            y_values,
        } => {
            let labels = chart_labels(schema);
            build_xy_spec(&x_values, &y_values, kind, &labels, theme)
        }
        ChartInputs::ScatterWithHistograms {
            points,
            first_values,
            second_values,
        } => {
            let second = required_second_column(schema)?;
            let bin_count = schema.bin_count.unwrap_or(DEFAULT_BIN_COUNT);
            let first_bins = compute_histogram_bins(&first_values, bin_count)?;
            let second_bins = compute_histogram_bins(&second_values, bin_count)?;
            Ok(build_scatter_with_histograms_spec(
                &points,
                &first_bins,
                &second_bins,
                &schema.first_column,
                second,
                theme,
            ))
        }
    }
}

fn required_second_column(schema: &ChartSchema) -> ChartResult<&str> {
    schema.second_column.as_deref().ok_or_else(|| {
        ChartError::InvalidData(format!(
            "chart type `{}` requires second_column",
            schema.chart_type
        ))
    })
}

fn chart_labels(schema: &ChartSchema) -> ChartLabels {
    let series_name = schema.chart_name.clone().unwrap_or_else(|| {
        match &schema.second_column {
            Some(second) => format!("({}, {second})", schema.first_column),
            None => schema.first_column.clone(),
        }
    });

    ChartLabels {
        chart_name: schema.chart_name.clone(),
        series_name,
        x_label: schema.x_label.clone(),
        y_label: schema.y_label.clone(),
    }
}

/// Index-aligned x/y sequences from schema literals or record columns.
///
/// Literal `x_data`/`y_data` bypass the records entirely (iteration charts
/// attach their series inline); otherwise rows pair `first_column` against
/// `second_column`, dropping rows whose y (and, when `numeric_x`, x) cell is
/// missing or non-numeric.
fn xy_sequences(
    records: &[Record],
    schema: &ChartSchema,
    numeric_x: bool,
) -> ChartResult<(Vec<ScalarValue>, Vec<f64>)> {
    match (&schema.x_data, &schema.y_data) {
        (Some(x_data), Some(y_data)) => {
            if x_data.len() != y_data.len() {
                return Err(ChartError::LengthMismatch {
                    x_len: x_data.len(),
                    y_len: y_data.len(),
                });
            }
            return Ok((x_data.clone(), y_data.clone()));
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(ChartError::InvalidData(
                "x_data and y_data must be provided together".to_owned(),
            ));
        }
        (None, None) => {}
    }

    let second = required_second_column(schema)?;
    let x_column = extract_column(records, &schema.first_column)?;
    let y_column = extract_column(records, second)?;
    let total = x_column.len();

    let mut x_values = Vec::with_capacity(total);
    let mut y_values = Vec::with_capacity(total);
    for (x, y) in x_column.into_iter().zip(y_column) {
        let Some(y_number) = y.as_number() else {
            continue;
        };
        if numeric_x && x.as_number().is_none() {
            continue;
        }
        x_values.push(x);
        y_values.push(y_number);
    }

    let dropped = total - x_values.len();
    if dropped > 0 {
        debug!(dropped, "dropped rows with missing or non-numeric cells");
    }

    Ok((x_values, y_values))
}

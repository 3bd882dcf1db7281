//! Adapter and builders turning record sets and persisted chart schemas into
//! renderer-agnostic specs.

pub mod chart_schema;
pub mod count_spec_builder;
pub mod monitoring_adapter;
pub mod scatter_histogram_spec_builder;
pub mod xy_spec_builder;

pub use chart_schema::{ChartSchema, ChartType};
pub use count_spec_builder::build_count_spec;
pub use monitoring_adapter::{
    ChartInputs, PREDICTION_COLUMN, build_chart_inputs, build_monitoring_chart_spec,
    extract_column, extract_numeric_column, extract_numeric_pairs,
};
pub use scatter_histogram_spec_builder::build_scatter_with_histograms_spec;
pub use xy_spec_builder::{ChartLabels, XyChartKind, build_xy_spec};

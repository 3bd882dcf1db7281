//! mlchart-rs: chart-data transformation layer for ML monitoring dashboards.
//!
//! A pure, stateless pipeline: prediction records plus a persisted chart
//! schema go in, summary statistics and a renderer-agnostic [`ChartSpec`]
//! come out. The embedding page hands the spec to its charting widget
//! together with a theme name; nothing here fetches data or draws pixels.

pub mod api;
pub mod core;
pub mod error;
pub mod spec;
pub mod telemetry;

pub use api::{ChartSchema, ChartType, build_monitoring_chart_spec};
pub use error::{ChartError, ChartResult};
pub use spec::{ChartSpec, ThemeMode, resolve_theme};

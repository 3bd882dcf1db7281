use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("column `{column}` not found in any record")]
    ColumnNotFound { column: String },

    #[error("x/y length mismatch: x={x_len}, y={y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("unsupported chart type: `{0}`")]
    UnsupportedChartType(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub mod frequency;
pub mod histogram;
pub mod types;

pub use frequency::{FrequencyEntry, FrequencyTable, count_unique_values};
pub use histogram::{DEFAULT_BIN_COUNT, HistogramBin, compute_histogram_bins};
pub use types::{DataPoint, Record, ScalarValue, format_number};

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default bin count when a chart schema does not pin one.
///
/// Fixed rather than derived from the sample count so re-renders over a
/// growing prediction stream keep comparable bins.
pub const DEFAULT_BIN_COUNT: usize = 10;

#[cfg(feature = "parallel-stats")]
const PARALLEL_MIN_SAMPLES: usize = 4_096;

/// One contiguous numeric range and the number of samples that fell in it.
///
/// Ranges are half-open `[range_start, range_end)` except the final bin,
/// which also includes its upper edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: usize,
}

/// Bins numeric samples into `bin_count` equal-width ranges covering
/// `[min, max]` exactly.
///
/// Empty input produces no bins; all-equal input collapses to a single
/// zero-width bin holding every sample.
pub fn compute_histogram_bins(values: &[f64], bin_count: usize) -> ChartResult<Vec<HistogramBin>> {
    if bin_count == 0 {
        return Err(ChartError::InvalidData(
            "histogram bin count must be > 0".to_owned(),
        ));
    }
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "histogram samples must be finite".to_owned(),
            ));
        }
        min = min.min(*value);
        max = max.max(*value);
    }

    if min == max {
        return Ok(vec![HistogramBin {
            range_start: min,
            range_end: max,
            count: values.len(),
        }]);
    }

    let width = (max - min) / bin_count as f64;
    let counts = bin_counts(values, min, width, bin_count);

    let mut edges = Vec::with_capacity(bin_count + 1);
    for index in 0..=bin_count {
        edges.push(min + width * index as f64);
    }
    // Pin the last edge so accumulated rounding never shrinks the covered span.
    edges[bin_count] = max;

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| HistogramBin {
            range_start: edges[index],
            range_end: edges[index + 1],
            count,
        })
        .collect())
}

fn bin_index(value: f64, min: f64, width: f64, bin_count: usize) -> usize {
    // Values on the upper edge clamp into the final bin, closing it.
    (((value - min) / width) as usize).min(bin_count - 1)
}

fn bin_counts_serial(values: &[f64], min: f64, width: f64, bin_count: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bin_count];
    for value in values {
        counts[bin_index(*value, min, width, bin_count)] += 1;
    }
    counts
}

#[cfg(not(feature = "parallel-stats"))]
fn bin_counts(values: &[f64], min: f64, width: f64, bin_count: usize) -> Vec<usize> {
    bin_counts_serial(values, min, width, bin_count)
}

#[cfg(feature = "parallel-stats")]
fn bin_counts(values: &[f64], min: f64, width: f64, bin_count: usize) -> Vec<usize> {
    use rayon::prelude::*;

    if values.len() < PARALLEL_MIN_SAMPLES {
        return bin_counts_serial(values, min, width, bin_count);
    }

    values
        .par_iter()
        .fold(
            || vec![0usize; bin_count],
            |mut counts, value| {
                counts[bin_index(*value, min, width, bin_count)] += 1;
                counts
            },
        )
        .reduce(
            || vec![0usize; bin_count],
            |mut left, right| {
                for (total, partial) in left.iter_mut().zip(right) {
                    *total += partial;
                }
                left
            },
        )
}

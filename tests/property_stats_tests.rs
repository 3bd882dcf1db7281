use mlchart_rs::api::build_scatter_with_histograms_spec;
use mlchart_rs::core::{
    DEFAULT_BIN_COUNT, DataPoint, ScalarValue, compute_histogram_bins, count_unique_values,
};
use mlchart_rs::spec::{ThemeMode, resolve_theme};
use proptest::prelude::*;

fn scalar_strategy() -> impl Strategy<Value = ScalarValue> {
    prop_oneof![
        (-1_000i32..1_000).prop_map(|n| ScalarValue::Number(f64::from(n))),
        "[a-d]{1,2}".prop_map(ScalarValue::Text),
        Just(ScalarValue::Missing),
    ]
}

proptest! {
    #[test]
    fn frequency_counts_cover_every_row(
        values in proptest::collection::vec(scalar_strategy(), 0..256)
    ) {
        let table = count_unique_values(&values);
        prop_assert_eq!(table.total_count(), values.len());
        for entry in table.entries() {
            prop_assert!(entry.count >= 1);
        }
    }

    #[test]
    fn histogram_counts_cover_every_sample(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 0..256),
        bin_count in 1usize..32
    ) {
        let bins = compute_histogram_bins(&values, bin_count).expect("bins");
        let total: usize = bins.iter().map(|bin| bin.count).sum();
        prop_assert_eq!(total, values.len());
        for pair in bins.windows(2) {
            prop_assert_eq!(pair[0].range_end, pair[1].range_start);
        }
    }

    #[test]
    fn histogram_span_is_pinned_to_observed_extremes(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 1..256),
        bin_count in 1usize..32
    ) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bins = compute_histogram_bins(&values, bin_count).expect("bins");

        prop_assert_eq!(bins.first().expect("first bin").range_start, min);
        prop_assert_eq!(bins.last().expect("last bin").range_end, max);
    }

    #[test]
    fn composite_builder_is_deterministic(
        xs in proptest::collection::vec(-100.0f64..100.0, 0..64)
    ) {
        let ys: Vec<f64> = xs.iter().map(|x| x * 0.5 + 3.0).collect();
        let points: Vec<DataPoint> = xs
            .iter()
            .zip(&ys)
            .map(|(x, y)| DataPoint::new(*x, *y))
            .collect();
        let x_bins = compute_histogram_bins(&xs, DEFAULT_BIN_COUNT).expect("x bins");
        let y_bins = compute_histogram_bins(&ys, DEFAULT_BIN_COUNT).expect("y bins");
        let theme = resolve_theme(ThemeMode::Dark, true);

        let first =
            build_scatter_with_histograms_spec(&points, &x_bins, &y_bins, "x", "y", theme);
        let second =
            build_scatter_with_histograms_spec(&points, &x_bins, &y_bins, "x", "y", theme);
        prop_assert_eq!(first, second);
    }
}

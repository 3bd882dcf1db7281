use mlchart_rs::api::build_count_spec;
use mlchart_rs::core::{ScalarValue, count_unique_values};
use mlchart_rs::spec::{AxisKind, SeriesData, SeriesKind, ThemeMode, resolve_theme};

fn sample_table() -> mlchart_rs::core::FrequencyTable {
    let values = vec![
        ScalarValue::from("b"),
        ScalarValue::from("a"),
        ScalarValue::from("b"),
        ScalarValue::from("c"),
    ];
    count_unique_values(&values)
}

#[test]
fn category_axis_keeps_discovery_order() {
    let theme = resolve_theme(ThemeMode::Light, false);
    let spec = build_count_spec(&sample_table(), "sex", theme);

    assert_eq!(spec.axes.len(), 2);
    assert_eq!(spec.axes[0].kind, AxisKind::Category);
    assert_eq!(spec.axes[0].categories, vec!["b", "a", "c"]);
    assert_eq!(spec.axes[1].kind, AxisKind::Value);
    assert!(spec.axes[1].zero_baseline);
}

#[test]
fn single_bar_series_holds_the_counts() {
    let theme = resolve_theme(ThemeMode::Light, false);
    let spec = build_count_spec(&sample_table(), "sex", theme);

    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].kind, SeriesKind::Bar);
    assert_eq!(
        spec.series[0].data,
        SeriesData::CategoryValues(vec![2.0, 1.0, 1.0])
    );
}

#[test]
fn spec_carries_theme_background() {
    let dark = resolve_theme(ThemeMode::Dark, false);
    let spec = build_count_spec(&sample_table(), "sex", dark);

    assert_eq!(spec.background, "#1F2937");
    assert_eq!(spec.title.text, "Count plot of sex");
}

#[test]
fn empty_table_builds_valid_empty_spec() {
    let theme = resolve_theme(ThemeMode::Light, false);
    let table = count_unique_values(&[]);
    let spec = build_count_spec(&table, "sex", theme);

    assert!(spec.axes[0].categories.is_empty());
    assert!(spec.series[0].data.is_empty());
}

#[test]
fn building_twice_yields_identical_specs() {
    let theme = resolve_theme(ThemeMode::System, true);
    let table = sample_table();

    assert_eq!(
        build_count_spec(&table, "sex", theme),
        build_count_spec(&table, "sex", theme)
    );
}

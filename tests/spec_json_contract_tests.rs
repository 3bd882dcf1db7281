use mlchart_rs::api::build_scatter_with_histograms_spec;
use mlchart_rs::core::{DataPoint, compute_histogram_bins};
use mlchart_rs::spec::{
    CHART_SPEC_JSON_SCHEMA_V1, ChartSpec, ChartSpecJsonContractV1, ThemeMode, resolve_theme,
};

fn sample_spec() -> ChartSpec {
    let xs = vec![1.0, 2.0, 3.0, 4.0];
    let ys = vec![10.0, 20.0, 15.0, 30.0];
    let points: Vec<DataPoint> = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| DataPoint::new(*x, *y))
        .collect();
    let x_bins = compute_histogram_bins(&xs, 4).expect("x bins");
    let y_bins = compute_histogram_bins(&ys, 4).expect("y bins");
    let theme = resolve_theme(ThemeMode::Dark, true);

    build_scatter_with_histograms_spec(&points, &x_bins, &y_bins, "age", "fare", theme)
}

#[test]
fn chart_spec_round_trips_through_json() {
    let spec = sample_spec();
    let json = serde_json::to_string(&spec).expect("serialize");
    let parsed: ChartSpec = serde_json::from_str(&json).expect("parse");

    assert_eq!(parsed, spec);
}

#[test]
fn contract_v1_embeds_schema_version() {
    let json = sample_spec()
        .to_json_contract_v1_pretty()
        .expect("contract json");

    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"background\": \"#1F2937\""));
}

#[test]
fn compat_parser_accepts_bare_and_enveloped_specs() {
    let spec = sample_spec();

    let bare = serde_json::to_string(&spec).expect("serialize bare");
    let parsed_bare = ChartSpec::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed_bare, spec);

    let enveloped = spec.to_json_contract_v1_pretty().expect("contract json");
    let parsed_enveloped = ChartSpec::from_json_compat_str(&enveloped).expect("parse envelope");
    assert_eq!(parsed_enveloped, spec);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let payload = ChartSpecJsonContractV1 {
        schema_version: CHART_SPEC_JSON_SCHEMA_V1 + 1,
        spec: sample_spec(),
    };
    let json = serde_json::to_string(&payload).expect("serialize payload");

    let err = ChartSpec::from_json_compat_str(&json).expect_err("must reject version");
    assert!(format!("{err}").contains("unsupported chart spec schema version"));
}

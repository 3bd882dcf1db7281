use mlchart_rs::core::{ScalarValue, count_unique_values};

fn text(value: &str) -> ScalarValue {
    ScalarValue::Text(value.to_owned())
}

#[test]
fn discovery_order_matches_first_seen() {
    let values = vec![text("b"), text("a"), text("b"), text("c")];
    let table = count_unique_values(&values);

    assert_eq!(table.labels(), vec!["b", "a", "c"]);
    assert_eq!(table.counts(), vec![2.0, 1.0, 1.0]);
}

#[test]
fn counts_cover_every_input_row() {
    let values = vec![
        ScalarValue::Number(1.0),
        text("x"),
        ScalarValue::Number(1.0),
        ScalarValue::Missing,
        ScalarValue::Number(2.0),
    ];
    let table = count_unique_values(&values);

    assert_eq!(table.total_count(), values.len());
}

#[test]
fn missing_cells_form_their_own_category() {
    let values = vec![
        ScalarValue::Number(3.0),
        ScalarValue::Missing,
        ScalarValue::Missing,
    ];
    let table = count_unique_values(&values);

    assert_eq!(table.len(), 2);
    let missing = table
        .entries()
        .iter()
        .find(|entry| entry.value.is_missing())
        .expect("missing entry");
    assert_eq!(missing.count, 2);
}

#[test]
fn input_without_missing_cells_has_no_missing_category() {
    let values = vec![ScalarValue::Number(1.0), ScalarValue::Number(2.0)];
    let table = count_unique_values(&values);

    assert_eq!(table.len(), 2);
    assert!(table.entries().iter().all(|entry| !entry.value.is_missing()));
}

#[test]
fn empty_input_yields_empty_table() {
    let table = count_unique_values(&[]);

    assert!(table.is_empty());
    assert_eq!(table.total_count(), 0);
}

#[test]
fn numeric_and_text_values_never_merge() {
    let values = vec![ScalarValue::Number(1.0), text("1")];
    let table = count_unique_values(&values);

    assert_eq!(table.len(), 2);
    assert_eq!(table.labels(), vec!["1", "1"]);
}

use dashboard_charts::core::{
    CategoryDatum, DateInput, LayoutBox, Metric, UNAVAILABLE, Viewport, category_data_from_json,
    format_bytes, format_number, format_percent, responsive_size, time_series_from_json,
};
use serde_json::json;

#[test]
fn number_formatting_matches_dashboard_locale() {
    assert_eq!(format_number(1_234_567.891_2), "1,234,567.891");
    assert_eq!(format_number(42_i64), "42");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(-1_000.0), "-1,000");
}

#[test]
fn sentinel_and_missing_values_render_as_unavailable() {
    assert_eq!(format_number("N/A"), UNAVAILABLE);
    assert_eq!(format_number(" N/A "), UNAVAILABLE);
    assert_eq!(format_number(None::<f64>), UNAVAILABLE);
    assert_eq!(format_number(f64::INFINITY), UNAVAILABLE);
    assert_eq!(format_bytes("N/A"), UNAVAILABLE);
    assert_eq!(format_percent(f64::NAN), UNAVAILABLE);
}

#[test]
fn numeric_strings_are_formatted() {
    assert_eq!(format_number("2500"), "2,500");
    assert_eq!(format_bytes("2048"), "2.0 KB");
    assert_eq!(format_percent("12.345"), "12.3%");
}

#[test]
fn bytes_scale_through_units() {
    assert_eq!(format_bytes(512_u64), "512.0 B");
    assert_eq!(format_bytes(1_048_576_u64), "1.0 MB");
    assert_eq!(format_bytes(3.5 * 1024f64.powi(3)), "3.5 GB");
    assert_eq!(format_bytes(1024f64.powi(4)), "1.0 TB");
}

#[test]
fn metric_conversions() {
    assert_eq!(Metric::from(Some(3.0)), Metric::Value(3.0));
    assert_eq!(Metric::from("abc"), Metric::Unavailable);
    assert_eq!(Metric::from(&json!(true)), Metric::Unavailable);
    assert_eq!(Metric::from(f64::NAN).finite(), None);
}

#[test]
fn responsive_size_follows_container_width() {
    assert_eq!(responsive_size(LayoutBox::new(500.0, 0.0)), Viewport::new(500.0, 300.0));
    assert_eq!(responsive_size(LayoutBox::new(0.0, 0.0)), Viewport::new(200.0, 200.0));
    assert_eq!(responsive_size(LayoutBox::new(900.0, 50.0)), Viewport::new(900.0, 400.0));
}

#[test]
fn category_payload_keeps_malformed_entries() {
    let data = category_data_from_json(&json!([
        {"label": "Linux", "value": 12},
        {"label": "Windows", "value": null},
        {"label": "macOS"},
        "garbage"
    ]))
    .expect("array payload");
    assert_eq!(
        data,
        vec![
            CategoryDatum::new("Linux", Some(12.0)),
            CategoryDatum::new("Windows", None),
            CategoryDatum::new("macOS", None),
            CategoryDatum::new("", None),
        ]
    );
}

#[test]
fn time_series_payload_accepts_text_and_timestamps() {
    let data = time_series_from_json(&json!([
        {"date": "2024-01-01", "value": 1.5},
        {"date": 1_704_153_600_000_i64, "value": 2},
        {"date": null, "value": 3},
        {"value": 4}
    ]))
    .expect("array payload");
    assert_eq!(data.len(), 4);
    assert_eq!(data[0].date, Some(DateInput::from("2024-01-01")));
    assert_eq!(data[1].date, Some(DateInput::Timestamp(1_704_153_600_000)));
    assert_eq!(data[1].value, Some(2.0));
    assert!(data[2].date.is_none());
    assert!(data[3].present_date().is_none());
}

#[test]
fn non_array_payloads_are_absent() {
    assert!(category_data_from_json(&json!(null)).is_none());
    assert!(time_series_from_json(&json!({"date": "2024-01-01"})).is_none());
}

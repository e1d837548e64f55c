use approx::assert_relative_eq;
use dashboard_charts::api::{
    BAR_ALL_FILTERED_MESSAGE, BAR_GROW_DURATION_MS, BAR_NO_DATA_MESSAGE, BarConfig, Document,
    MountContent, build_bar, render_bar, render_bar_json,
};
use dashboard_charts::core::{CategoryDatum, LayoutBox, Viewport};
use dashboard_charts::interaction::HoverEffect;
use dashboard_charts::render::{Easing, palette};
use serde_json::json;

fn viewport() -> Viewport {
    Viewport::new(500.0, 300.0)
}

fn sample() -> Vec<CategoryDatum> {
    vec![
        CategoryDatum::new("api", Some(10.0)),
        CategoryDatum::new("web", Some(20.0)),
        CategoryDatum::new("db", Some(5.0)),
    ]
}

#[test]
fn vertical_bars_scale_to_max_plus_ten_percent() {
    let output = build_bar(Some(&sample()), &BarConfig::new("svc"), viewport());
    let scene = output.scene().expect("bar scene");
    assert_eq!(scene.frame.rects.len(), 3);

    // Plot area is 410 x 220 below a 20px top margin.
    let web = scene.frame.rects[1].geometry;
    assert_relative_eq!(web.height, 200.0, epsilon = 1e-9);
    assert_relative_eq!(web.y, 40.0, epsilon = 1e-9);
    assert_relative_eq!(web.y + web.height, 240.0, epsilon = 1e-9);

    let api = scene.frame.rects[0].geometry;
    assert_relative_eq!(api.height, 100.0, epsilon = 1e-9);
    assert_relative_eq!(api.x, 60.0 + 25.625, epsilon = 1e-9);
    assert_relative_eq!(api.width, 102.5, epsilon = 1e-9);
}

#[test]
fn horizontal_bars_grow_rightward() {
    let config = BarConfig::new("svc").with_horizontal(true);
    let output = build_bar(Some(&sample()), &config, viewport());
    let scene = output.scene().expect("bar scene");

    let web = scene.frame.rects[1].geometry;
    assert_relative_eq!(web.x, 120.0);
    assert_relative_eq!(web.width, 320.0 * 20.0 / 22.0, epsilon = 1e-9);

    let value_labels: Vec<&str> = scene
        .frame
        .texts
        .iter()
        .filter(|text| text.x > web.x + 1.0 && text.dy_em == 0.35)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(value_labels, ["10", "20", "5"]);
}

#[test]
fn zero_is_data_but_missing_is_not() {
    let data = vec![
        CategoryDatum::new("idle", Some(0.0)),
        CategoryDatum::new("busy", None),
    ];
    let output = build_bar(Some(&data), &BarConfig::new("svc"), viewport());
    let scene = output.scene().expect("bar scene");
    assert_eq!(scene.frame.rects.len(), 1);
    assert!(scene.frame.validate().is_ok());
}

#[test]
fn placeholder_only_when_nothing_is_plottable() {
    let output = build_bar(None, &BarConfig::new("svc"), viewport());
    assert_eq!(
        output.notice().map(|notice| notice.message.as_str()),
        Some(BAR_NO_DATA_MESSAGE)
    );

    let data = vec![
        CategoryDatum::new("a", None),
        CategoryDatum::new("b", Some(f64::INFINITY)),
    ];
    let output = build_bar(Some(&data), &BarConfig::new("svc"), viewport());
    assert_eq!(
        output.notice().map(|notice| notice.message.as_str()),
        Some(BAR_ALL_FILTERED_MESSAGE)
    );
}

#[test]
fn bars_declare_growth_from_baseline() {
    let output = build_bar(Some(&sample()), &BarConfig::new("svc"), viewport());
    let scene = output.scene().expect("bar scene");
    for rect in &scene.frame.rects {
        let enter = rect.enter.expect("enter transition");
        assert_eq!(enter.duration_ms, BAR_GROW_DURATION_MS);
        assert_eq!(enter.easing, Easing::CubicInOut);
        assert_eq!(enter.to, rect.geometry);
        assert_relative_eq!(enter.from.height, 0.0);
        assert_relative_eq!(enter.from.y, 240.0, epsilon = 1e-9);
    }
}

#[test]
fn value_labels_follow_config() {
    let with = build_bar(Some(&sample()), &BarConfig::new("svc"), viewport());
    let without = build_bar(
        Some(&sample()),
        &BarConfig::new("svc").with_show_values(false),
        viewport(),
    );
    let with = with.scene().expect("bar scene").frame.texts.len();
    let without = without.scene().expect("bar scene").frame.texts.len();
    assert_eq!(with - without, 3);
}

#[test]
fn hover_swaps_fill_in_both_orientations() {
    for horizontal in [false, true] {
        let config = BarConfig::new("svc")
            .with_horizontal(horizontal)
            .with_hover_color(palette::DANGER);
        let mut document = Document::new().with_mount("svc", LayoutBox::new(500.0, 300.0));
        render_bar(&mut document, Some(&sample()), &config);

        let target = document.mounted_chart("svc").expect("chart").scene().hover_targets[2].clone();
        assert_eq!(
            target.effect,
            HoverEffect::SwapFill {
                base: palette::PRIMARY,
                hover: palette::DANGER
            }
        );
        let rect = document.mounted_chart("svc").expect("chart").scene().frame.rects[2].geometry;
        let (x, y) = (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);

        assert!(document.pointer_move("svc", x, y));
        let chart = document.mounted_chart("svc").expect("chart");
        assert_eq!(chart.displayed_frame().rects[2].fill, palette::DANGER);
        assert_eq!(chart.displayed_frame().rects[0].fill, palette::PRIMARY);

        assert!(document.pointer_leave("svc"));
        let chart = document.mounted_chart("svc").expect("chart");
        assert_eq!(chart.displayed_frame().rects[2].fill, palette::PRIMARY);
    }
}

#[test]
fn bar_charts_get_no_tooltip_mount() {
    let mut document = Document::new().with_mount("svc", LayoutBox::new(500.0, 300.0));
    render_bar(&mut document, Some(&sample()), &BarConfig::new("svc"));
    assert!(!document.contains("svc-tooltip"));
}

#[test]
fn json_rendering_replaces_previous_content() {
    let mut document = Document::new().with_mount("svc", LayoutBox::new(500.0, 300.0));
    render_bar_json(&mut document, &json!([{"label": "a", "value": 3}]), &BarConfig::new("svc"));
    assert!(document.mounted_chart("svc").is_some());

    render_bar_json(&mut document, &json!([]), &BarConfig::new("svc"));
    match document.content("svc") {
        Some(MountContent::Notice(notice)) => assert_eq!(notice.message, BAR_NO_DATA_MESSAGE),
        other => panic!("expected notice, got {other:?}"),
    }
}

#[test]
fn near_max_values_still_mount_a_chart() {
    let data = vec![
        CategoryDatum::new("a", Some(1.7e308)),
        CategoryDatum::new("b", Some(1.0)),
    ];
    let output = build_bar(Some(&data), &BarConfig::new("svc"), viewport());
    let scene = output.scene().expect("bar scene");
    let tallest = scene.frame.rects[0].geometry;
    assert!(tallest.height.is_finite());
    assert_relative_eq!(tallest.height, 220.0 * 1.7e308 / f64::MAX, epsilon = 1e-9);
    assert!(scene.frame.validate().is_ok());

    let mut document = Document::new().with_mount("svc", LayoutBox::new(500.0, 300.0));
    render_bar(&mut document, Some(&data), &BarConfig::new("svc"));
    assert!(document.mounted_chart("svc").is_some());
}

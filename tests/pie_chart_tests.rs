use approx::assert_relative_eq;
use dashboard_charts::api::{
    Document, MountContent, PIE_ALL_FILTERED_MESSAGE, PIE_NO_DATA_MESSAGE, PieConfig, build_pie,
    render_pie, render_pie_json,
};
use dashboard_charts::core::{CategoryDatum, LayoutBox, Viewport};
use dashboard_charts::interaction::{HitShape, TooltipState};
use dashboard_charts::render::palette;
use serde_json::json;

fn viewport() -> Viewport {
    Viewport::new(500.0, 300.0)
}

fn two_slices() -> Vec<CategoryDatum> {
    vec![
        CategoryDatum::new("A", Some(10.0)),
        CategoryDatum::new("B", Some(30.0)),
    ]
}

fn document() -> Document {
    Document::new()
        .with_mount("os", LayoutBox::new(500.0, 320.0))
        .with_mount("os-legend", LayoutBox::new(500.0, 40.0))
}

#[test]
fn tooltip_reports_value_and_share() {
    let output = build_pie(Some(&two_slices()), &PieConfig::new("os"), viewport());
    let scene = output.scene().expect("pie scene");
    assert_eq!(scene.hover_targets.len(), 2);

    let b = scene.hover_targets[1].tooltip.as_ref().expect("tooltip");
    assert_eq!(b.title, "B");
    assert_eq!(b.lines, vec!["30 (75.0%)".to_owned()]);
    assert!(b.to_html().contains("(75.0%)"));

    let a = scene.hover_targets[0].tooltip.as_ref().expect("tooltip");
    assert_eq!(a.lines, vec!["10 (25.0%)".to_owned()]);
}

#[test]
fn slices_start_at_twelve_and_run_clockwise() {
    let output = build_pie(Some(&two_slices()), &PieConfig::new("os"), viewport());
    let scene = output.scene().expect("pie scene");
    let HitShape::Sector(a) = scene.hover_targets[0].shape else {
        panic!("expected sector");
    };
    let HitShape::Sector(b) = scene.hover_targets[1].shape else {
        panic!("expected sector");
    };
    assert_relative_eq!(a.start_angle, 0.0);
    assert_relative_eq!(a.end_angle, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(b.end_angle, std::f64::consts::TAU, epsilon = 1e-12);
    assert_relative_eq!(a.outer_radius, 130.0);
    assert_relative_eq!(a.inner_radius, 0.0);
    assert_eq!((a.cx, a.cy), (250.0, 150.0));
}

#[test]
fn donut_leaves_a_hole() {
    let config = PieConfig::new("os").with_donut(true);
    let output = build_pie(Some(&two_slices()), &config, viewport());
    let scene = output.scene().expect("pie scene");
    let HitShape::Sector(arc) = scene.hover_targets[0].shape else {
        panic!("expected sector");
    };
    assert_relative_eq!(arc.inner_radius, 130.0 * 0.55, epsilon = 1e-9);
    assert!(!arc.contains(250.0, 150.0));
}

#[test]
fn all_invalid_values_show_placeholder() {
    let data = vec![
        CategoryDatum::new("A", Some(0.0)),
        CategoryDatum::new("B", None),
        CategoryDatum::new("C", Some(-5.0)),
        CategoryDatum::new("D", Some(f64::NAN)),
    ];
    let output = build_pie(Some(&data), &PieConfig::new("os"), viewport());
    assert!(output.scene().is_none());
    assert_eq!(
        output.notice().map(|notice| notice.message.as_str()),
        Some(PIE_ALL_FILTERED_MESSAGE)
    );
}

#[test]
fn missing_and_empty_data_show_placeholder() {
    for data in [None, Some(&[][..])] {
        let output = build_pie(data, &PieConfig::new("os"), viewport());
        assert_eq!(
            output.notice().map(|notice| notice.message.as_str()),
            Some(PIE_NO_DATA_MESSAGE)
        );
    }
}

#[test]
fn invalid_slices_are_dropped_from_shares() {
    let data = vec![
        CategoryDatum::new("A", Some(1.0)),
        CategoryDatum::new("skip", Some(0.0)),
        CategoryDatum::new("B", Some(3.0)),
    ];
    let output = build_pie(Some(&data), &PieConfig::new("os"), viewport());
    let scene = output.scene().expect("pie scene");
    assert_eq!(scene.frame.paths.len(), 2);
    let legend = scene.legend.as_ref().expect("legend entries");
    let labels: Vec<&str> = legend.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels, ["A", "B"]);
}

#[test]
fn labels_hidden_for_crowded_pies() {
    let data: Vec<CategoryDatum> = (0..7)
        .map(|i| CategoryDatum::new(format!("s{i}"), Some(10.0)))
        .collect();
    let output = build_pie(Some(&data), &PieConfig::new("os"), viewport());
    let scene = output.scene().expect("pie scene");
    assert_eq!(scene.frame.paths.len(), 7);
    assert!(scene.frame.texts.is_empty());
}

#[test]
fn labels_can_be_disabled() {
    let config = PieConfig::new("os").with_show_labels(false);
    let output = build_pie(Some(&two_slices()), &config, viewport());
    assert!(output.scene().expect("pie scene").frame.texts.is_empty());

    let output = build_pie(Some(&two_slices()), &PieConfig::new("os"), viewport());
    let texts: Vec<&str> = output
        .scene()
        .expect("pie scene")
        .frame
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(texts, ["25%", "75%"]);
}

#[test]
fn colours_cycle_through_configured_range() {
    let config = PieConfig::new("os").with_colors(vec![palette::SUCCESS, palette::DANGER]);
    let data = vec![
        CategoryDatum::new("A", Some(1.0)),
        CategoryDatum::new("B", Some(1.0)),
        CategoryDatum::new("C", Some(1.0)),
    ];
    let output = build_pie(Some(&data), &config, viewport());
    let fills: Vec<_> = output
        .scene()
        .expect("pie scene")
        .frame
        .paths
        .iter()
        .map(|path| path.fill)
        .collect();
    assert_eq!(
        fills,
        vec![Some(palette::SUCCESS), Some(palette::DANGER), Some(palette::SUCCESS)]
    );
}

#[test]
fn render_mounts_chart_legend_and_tooltip() {
    let mut document = document();
    render_pie(&mut document, Some(&two_slices()), &PieConfig::new("os"));

    let chart = document.mounted_chart("os").expect("mounted chart");
    assert_eq!(chart.scene().frame.paths.len(), 2);
    assert!(chart.scene().legend.is_none());

    let legend = document.mount_html("os-legend").expect("legend mount");
    assert!(legend.contains("<span class=\"legend-label\">A (10)</span>"));
    assert!(legend.contains("<span class=\"legend-label\">B (30)</span>"));

    assert_eq!(
        document.content("os-tooltip"),
        Some(&MountContent::Tooltip(TooltipState::default()))
    );
}

#[test]
fn legend_needs_an_existing_mount() {
    let mut document = Document::new().with_mount("os", LayoutBox::new(500.0, 320.0));
    render_pie(&mut document, Some(&two_slices()), &PieConfig::new("os"));
    assert!(!document.contains("os-legend"));
    assert!(document.mounted_chart("os").is_some());
}

#[test]
fn hover_enlarges_slice_and_shows_tooltip() {
    let mut document = document();
    render_pie(&mut document, Some(&two_slices()), &PieConfig::new("os"));

    assert!(document.pointer_move("os", 300.0, 100.0));
    let chart = document.mounted_chart("os").expect("mounted chart");
    let HitShape::Sector(arc) = chart.scene().hover_targets[0].shape else {
        panic!("expected sector");
    };
    assert_eq!(
        chart.displayed_frame().paths[0].data,
        arc.with_outer_radius(arc.outer_radius + 5.0).path()
    );
    assert_eq!(chart.displayed_frame().paths[1], chart.scene().frame.paths[1]);

    let tooltip = document.mount_html("os-tooltip").expect("tooltip mount");
    assert!(tooltip.contains("display: block; left: 310px; top: 90px"));
    assert!(tooltip.contains("<strong>A</strong><br/>10 (25.0%)"));

    assert!(document.pointer_leave("os"));
    let chart = document.mounted_chart("os").expect("mounted chart");
    assert_eq!(chart.displayed_frame(), &chart.scene().frame);
    let tooltip = document.mount_html("os-tooltip").expect("tooltip mount");
    assert!(tooltip.contains("display: none"));
}

#[test]
fn json_payload_guardrails() {
    let mut document = document();
    render_pie_json(&mut document, &json!({"label": "A"}), &PieConfig::new("os"));
    assert_eq!(
        document.content("os"),
        Some(&MountContent::Notice(dashboard_charts::api::NoDataNotice::new(
            PIE_NO_DATA_MESSAGE
        )))
    );

    render_pie_json(
        &mut document,
        &json!([{"label": "A", "value": "N/A"}, {"label": "B", "value": 0}]),
        &PieConfig::new("os"),
    );
    let html = document.mount_html("os").expect("mount");
    assert!(html.contains(PIE_ALL_FILTERED_MESSAGE));

    render_pie_json(
        &mut document,
        &json!([{"label": "A", "value": 4}]),
        &PieConfig::new("os"),
    );
    let html = document.mount_html("os").expect("mount");
    assert!(html.starts_with("<svg"));
}

#[test]
fn unmounted_target_is_a_no_op() {
    let mut document = Document::new();
    render_pie(&mut document, Some(&two_slices()), &PieConfig::new("os"));
    assert_eq!(document.mount_ids().count(), 0);
}

#[test]
fn zero_and_null_pair_is_a_placeholder() {
    let data = vec![CategoryDatum::new("A", Some(0.0)), CategoryDatum::new("B", None)];
    let mut document = document();
    render_pie(&mut document, Some(&data), &PieConfig::new("os"));
    assert!(document.mounted_chart("os").is_none());
    assert!(!document.contains("os-tooltip"));
    let html = document.mount_html("os").expect("mount");
    assert!(html.contains("<p>All values are zero or unavailable</p>"));
    assert_eq!(document.content("os-legend"), Some(&MountContent::Empty));
}

#[test]
fn huge_values_still_split_evenly() {
    let data = vec![
        CategoryDatum::new("A", Some(1e308)),
        CategoryDatum::new("B", Some(1e308)),
    ];
    let output = build_pie(Some(&data), &PieConfig::new("os"), viewport());
    let scene = output.scene().expect("pie scene");
    for target in &scene.hover_targets {
        let tooltip = target.tooltip.as_ref().expect("tooltip");
        assert!(tooltip.lines[0].ends_with("(50.0%)"), "{:?}", tooltip.lines);
    }
    let HitShape::Sector(b) = scene.hover_targets[1].shape else {
        panic!("expected sector");
    };
    assert_relative_eq!(b.start_angle, std::f64::consts::PI, epsilon = 1e-12);
    assert_relative_eq!(b.end_angle, std::f64::consts::TAU, epsilon = 1e-12);
    assert!(scene.frame.validate().is_ok());
}

#[test]
fn hover_holds_across_the_enlarged_band() {
    let mut document = document();
    render_pie(&mut document, Some(&two_slices()), &PieConfig::new("os"));
    // Slice A spans twelve to three o'clock around (250, 150) with radius 130.
    let at_radius = |radius: f64| {
        let offset = radius * std::f64::consts::FRAC_1_SQRT_2;
        (250.0 + offset, 150.0 - offset)
    };

    let (x, y) = at_radius(120.0);
    assert!(document.pointer_move("os", x, y));
    let (x, y) = at_radius(133.0);
    assert!(!document.pointer_move("os", x, y));
    let chart = document.mounted_chart("os").expect("mounted chart");
    assert_eq!(chart.pointer().hovered(), Some(0));
    let tooltip = document.mount_html("os-tooltip").expect("tooltip mount");
    assert!(tooltip.contains("display: block"));

    let (x, y) = at_radius(137.0);
    assert!(document.pointer_move("os", x, y));
    let chart = document.mounted_chart("os").expect("mounted chart");
    assert_eq!(chart.pointer().hovered(), None);
}

use approx::assert_relative_eq;
use dashboard_charts::api::{
    Document, GAUGE_INVALID_RANGE_MESSAGE, GAUGE_UNAVAILABLE_MESSAGE, GAUGE_VIEWPORT, GaugeConfig,
    MountContent, build_gauge, gauge_arc, render_gauge,
};
use dashboard_charts::core::{GaugeThreshold, LayoutBox};
use dashboard_charts::core::gauge::{GAUGE_END_ANGLE, GAUGE_START_ANGLE};
use dashboard_charts::render::{PathAnimation, palette};

fn value_fill(config: &GaugeConfig) -> Option<dashboard_charts::render::Color> {
    build_gauge(config).scene().expect("gauge scene").frame.paths[1].fill
}

#[test]
fn out_of_range_value_is_clamped() {
    let output = build_gauge(&GaugeConfig::new("cpu", Some(150.0)).with_animate(false));
    let scene = output.scene().expect("gauge scene");
    assert_eq!(scene.frame.viewport, GAUGE_VIEWPORT);
    assert_eq!(scene.frame.paths.len(), 2);
    assert_eq!(scene.frame.paths[0].data, gauge_arc(GAUGE_END_ANGLE).path());
    assert_eq!(scene.frame.paths[1].data, gauge_arc(GAUGE_END_ANGLE).path());
    assert_eq!(scene.frame.texts[0].text, "100");
    assert_eq!(scene.frame.texts[1].text, "%");

    let low = build_gauge(&GaugeConfig::new("cpu", Some(-40.0)).with_animate(false));
    let scene = low.scene().expect("gauge scene");
    assert_eq!(scene.frame.paths[1].data, gauge_arc(GAUGE_START_ANGLE).path());
}

#[test]
fn custom_range_maps_linearly() {
    let config = GaugeConfig::new("temp", Some(40.0))
        .with_range(20.0, 60.0)
        .with_unit("°C")
        .with_animate(false);
    let output = build_gauge(&config);
    let scene = output.scene().expect("gauge scene");
    assert_eq!(scene.frame.paths[1].data, gauge_arc(0.0).path());
    assert_eq!(scene.frame.texts[1].text, "°C");
    let arc = gauge_arc(0.0);
    assert_relative_eq!(arc.outer_radius - arc.inner_radius, 15.0);
}

#[test]
fn default_thresholds_pick_colour() {
    assert_eq!(value_fill(&GaugeConfig::new("g", Some(30.0))), Some(palette::DANGER));
    assert_eq!(value_fill(&GaugeConfig::new("g", Some(50.0))), Some(palette::DANGER));
    assert_eq!(value_fill(&GaugeConfig::new("g", Some(60.0))), Some(palette::WARNING));
    assert_eq!(value_fill(&GaugeConfig::new("g", Some(99.0))), Some(palette::SUCCESS));
}

#[test]
fn custom_thresholds_are_used_in_order() {
    let thresholds = vec![
        GaugeThreshold::new(10.0, palette::SUCCESS),
        GaugeThreshold::new(20.0, palette::PURPLE),
    ];
    let config = GaugeConfig::new("g", Some(80.0)).with_thresholds(thresholds);
    assert_eq!(value_fill(&config), Some(palette::PURPLE));

    let empty = GaugeConfig::new("g", Some(80.0)).with_thresholds(Vec::new());
    assert_eq!(value_fill(&empty), Some(palette::SUCCESS));
}

#[test]
fn unit_can_be_empty() {
    let output = build_gauge(&GaugeConfig::new("g", Some(3.0)).with_unit(""));
    assert_eq!(output.scene().expect("gauge scene").frame.texts.len(), 1);
}

#[test]
fn missing_or_non_finite_value_is_unavailable() {
    for value in [None, Some(f64::NAN), Some(f64::INFINITY)] {
        let output = build_gauge(&GaugeConfig::new("g", value));
        assert_eq!(
            output.notice().map(|notice| notice.message.as_str()),
            Some(GAUGE_UNAVAILABLE_MESSAGE)
        );
    }
}

#[test]
fn empty_range_is_rejected() {
    let output = build_gauge(&GaugeConfig::new("g", Some(5.0)).with_range(10.0, 0.0));
    assert_eq!(
        output.notice().map(|notice| notice.message.as_str()),
        Some(GAUGE_INVALID_RANGE_MESSAGE)
    );
}

#[test]
fn sweep_keyframes_run_from_empty_to_value() {
    let output = build_gauge(&GaugeConfig::new("g", Some(75.0)));
    let scene = output.scene().expect("gauge scene");
    let Some(PathAnimation::Keyframes { frames, .. }) = &scene.frame.paths[1].animation else {
        panic!("expected sweep keyframes");
    };
    assert_eq!(frames.len(), 31);
    assert_eq!(frames[0], gauge_arc(GAUGE_START_ANGLE).path());
    assert_eq!(frames.last(), Some(&scene.frame.paths[1].data));
}

#[test]
fn render_gauge_uses_mount_and_renders_svg() {
    let mut document = Document::new().with_mount("cpu", LayoutBox::new(180.0, 100.0));
    render_gauge(&mut document, &GaugeConfig::new("cpu", Some(42.0)));
    let html = document.mount_html("cpu").expect("mount");
    assert!(html.contains("width=\"180\" height=\"100\""));
    assert!(html.contains(">42</text>"));
    assert!(!document.contains("cpu-tooltip"));

    render_gauge(&mut document, &GaugeConfig::new("cpu", None));
    assert!(matches!(document.content("cpu"), Some(MountContent::Notice(_))));

    render_gauge(&mut document, &GaugeConfig::new("missing", Some(1.0)));
    assert!(!document.contains("missing"));
}

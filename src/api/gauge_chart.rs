use tracing::{debug, trace, warn};

use super::{ChartOutput, ChartScene, Document, GaugeConfig};
use crate::core::gauge::{GAUGE_END_ANGLE, GAUGE_START_ANGLE};
use crate::core::{
    Viewport, clamp_gauge_value, format_number, gauge_angle, interpolate_angle, threshold_color,
};
use crate::render::{
    ArcGeometry, Easing, PathAnimation, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    palette,
};

pub const GAUGE_UNAVAILABLE_MESSAGE: &str = "Value unavailable";
pub const GAUGE_INVALID_RANGE_MESSAGE: &str = "Invalid gauge range";

pub const GAUGE_VIEWPORT: Viewport = Viewport::new(180.0, 100.0);
pub const GAUGE_RADIUS: f64 = 70.0;
pub const GAUGE_THICKNESS: f64 = 15.0;
pub const GAUGE_SWEEP_DURATION_MS: u32 = 1000;

const GAUGE_CENTER: (f64, f64) = (90.0, 90.0);
const SWEEP_KEYFRAMES: usize = 30;
const VALUE_FONT_SIZE_PX: f64 = 24.0;
const UNIT_FONT_SIZE_PX: f64 = 12.0;

/// Half-ring geometry from `-π/2` to `end_angle`.
#[must_use]
pub fn gauge_arc(end_angle: f64) -> ArcGeometry {
    ArcGeometry {
        cx: GAUGE_CENTER.0,
        cy: GAUGE_CENTER.1,
        inner_radius: GAUGE_RADIUS - GAUGE_THICKNESS,
        outer_radius: GAUGE_RADIUS,
        start_angle: GAUGE_START_ANGLE,
        end_angle,
    }
}

/// Builds the gauge scene without touching any document.
#[must_use]
pub fn build_gauge(config: &GaugeConfig) -> ChartOutput {
    let Some(raw) = config.value.filter(|value| value.is_finite()) else {
        return ChartOutput::placeholder(GAUGE_UNAVAILABLE_MESSAGE);
    };
    if !config.min.is_finite() || !config.max.is_finite() || config.max <= config.min {
        warn!(min = config.min, max = config.max, "gauge range is empty");
        return ChartOutput::placeholder(GAUGE_INVALID_RANGE_MESSAGE);
    }

    let value = clamp_gauge_value(raw, config.min, config.max);
    let angle = gauge_angle(value, config.min, config.max);
    let color = threshold_color(value, &config.effective_thresholds()).unwrap_or(palette::PRIMARY);
    trace!(raw, value, angle, "gauge reading");

    let mut frame = RenderFrame::new(GAUGE_VIEWPORT);
    frame.push_path(PathPrimitive::filled(
        gauge_arc(GAUGE_END_ANGLE).path(),
        palette::GAUGE_TRACK,
    ));

    let mut value_arc = PathPrimitive::filled(gauge_arc(angle).path(), color);
    if config.animate {
        value_arc = value_arc.with_animation(PathAnimation::Keyframes {
            frames: (0..=SWEEP_KEYFRAMES)
                .map(|step| {
                    if step == SWEEP_KEYFRAMES {
                        return gauge_arc(angle).path();
                    }
                    let t = Easing::CubicInOut.apply(step as f64 / SWEEP_KEYFRAMES as f64);
                    gauge_arc(interpolate_angle(GAUGE_START_ANGLE, angle, t)).path()
                })
                .collect(),
            duration_ms: GAUGE_SWEEP_DURATION_MS,
        });
    }
    frame.push_path(value_arc);

    let (cx, cy) = GAUGE_CENTER;
    frame.texts.push(
        TextPrimitive::new(
            format_number(value),
            cx,
            cy,
            VALUE_FONT_SIZE_PX,
            palette::TEXT,
            TextHAlign::Center,
        )
        .with_weight(700)
        .with_dy(-0.5),
    );
    if !config.unit.is_empty() {
        frame.texts.push(
            TextPrimitive::new(
                &config.unit,
                cx,
                cy,
                UNIT_FONT_SIZE_PX,
                palette::TEXT_SECONDARY,
                TextHAlign::Center,
            )
            .with_dy(1.0),
        );
    }

    ChartOutput::Chart(ChartScene::new(frame))
}

/// Renders a gauge into mount point `config.id`.
pub fn render_gauge(document: &mut Document, config: &GaugeConfig) {
    if !document.contains(&config.id) {
        trace!(id = %config.id, "gauge target not mounted");
        return;
    }
    let output = build_gauge(config);
    debug!(id = %config.id, placeholder = output.notice().is_some(), "render gauge");
    document.apply_output(&config.id, output, false);
}

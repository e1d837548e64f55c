use serde_json::Value;
use tracing::{debug, trace};

use super::axis_builder::{AxisTick, bottom_axis, horizontal_grid, left_axis};
use super::{ChartOutput, ChartScene, Document, LineConfig};
use crate::core::{
    LinearScale, Margin, TimeScale, TimeSeriesDatum, TrendPoint, Viewport,
    datetime_to_unix_millis, format_number, format_time, headroom_domain, monotone_area_path,
    monotone_line_path, parse_date, project_trend, time_series_from_json,
};
use crate::interaction::{
    HitShape, HoverEffect, HoverTarget, MARKER_HOVER_RADIUS, MARKER_RADIUS, TooltipContent,
};
use crate::render::{
    CirclePrimitive, Easing, PathAnimation, PathPrimitive, RenderFrame, Stroke, palette,
};

pub const LINE_NO_DATA_MESSAGE: &str = "Time series data not available";
pub const LINE_ALL_FILTERED_MESSAGE: &str = "All time series values are unavailable";
pub const LINE_INVALID_DATES_MESSAGE: &str = "Insufficient valid dates for trend";

pub const LINE_MARGIN: Margin = Margin::new(20.0, 30.0, 40.0, 60.0);
pub const LINE_WIPE_DURATION_MS: u32 = 1500;
pub const AREA_FILL_OPACITY: f64 = 0.15;

const LINE_STROKE_WIDTH: f64 = 2.0;
const MARKER_STROKE_WIDTH: f64 = 2.0;
const TIME_AXIS_TICKS: usize = 7;
const TIME_AXIS_FORMAT: &str = "%b %d";
const TOOLTIP_DATE_FORMAT: &str = "%Y-%m-%d";
const VALUE_AXIS_TICKS: usize = 5;
const GRID_TICKS: usize = 10;
const VALUE_NICE_COUNT: usize = 10;

/// Placeholder text for a series with exactly one usable point.
#[must_use]
pub fn single_point_message(date: &str, value: f64) -> String {
    format!(
        "Insufficient data for trend (single point: {date} = {})",
        format_number(value)
    )
}

/// Builds the time-series scene without touching any document.
///
/// A trend needs at least two points with both a date and a value, checked
/// before and after date parsing. Entries with a parseable date but no value
/// stay in the path source and break the line.
#[must_use]
pub fn build_line(data: Option<&[TimeSeriesDatum]>, config: &LineConfig, viewport: Viewport) -> ChartOutput {
    let Some(data) = data.filter(|data| !data.is_empty()) else {
        return ChartOutput::placeholder(LINE_NO_DATA_MESSAGE);
    };

    let complete: Vec<&TimeSeriesDatum> = data
        .iter()
        .filter(|datum| datum.present_date().is_some() && datum.finite_value().is_some())
        .collect();
    match complete.as_slice() {
        [] => return ChartOutput::placeholder(LINE_ALL_FILTERED_MESSAGE),
        [only] => {
            let date = only.present_date().map(ToString::to_string).unwrap_or_default();
            let value = only.finite_value().unwrap_or_default();
            return ChartOutput::placeholder(single_point_message(&date, value));
        }
        _ => {}
    }

    let points: Vec<TrendPoint> = data
        .iter()
        .filter_map(|datum| {
            let time = parse_date(datum.present_date()?, &config.date_format)?;
            Some(TrendPoint {
                time_ms: datetime_to_unix_millis(time),
                value: datum.finite_value(),
            })
        })
        .collect();
    let valued = points.iter().filter(|point| point.value.is_some()).count();
    if valued < 2 {
        debug!(parsed = points.len(), valued, "too few parseable dates");
        return ChartOutput::placeholder(LINE_INVALID_DATES_MESSAGE);
    }

    let (inner_width, inner_height) = LINE_MARGIN.inner_size(viewport);
    let scales = TimeScale::from_extent(points.iter().map(|point| point.time_ms), (0.0, inner_width))
        .and_then(|time_scale| {
            let domain = headroom_domain(points.iter().filter_map(|point| point.value));
            let value_scale =
                LinearScale::new(domain, (inner_height, 0.0))?.nice(VALUE_NICE_COUNT);
            Ok((time_scale, value_scale))
        });
    let (time_scale, value_scale) = match scales {
        Ok(scales) => scales,
        Err(err) => {
            debug!(error = %err, "line scales unavailable");
            return ChartOutput::placeholder(LINE_INVALID_DATES_MESSAGE);
        }
    };
    trace!(
        points = points.len(),
        valued,
        value_domain_max = value_scale.domain().1,
        "line scales"
    );

    let origin = (LINE_MARGIN.left, LINE_MARGIN.top);
    let mut frame = RenderFrame::new(viewport);

    if config.show_grid {
        let offsets: Vec<f64> = value_scale
            .ticks(GRID_TICKS)
            .into_iter()
            .map(|tick| value_scale.map(tick))
            .collect();
        horizontal_grid(&mut frame, origin, inner_width, &offsets);
    }

    let time_ticks: Vec<AxisTick> = time_scale
        .ticks(TIME_AXIS_TICKS)
        .into_iter()
        .map(|tick| AxisTick::new(time_scale.time_to_pixel(tick), format_time(tick, TIME_AXIS_FORMAT)))
        .collect();
    let value_ticks: Vec<AxisTick> = value_scale
        .ticks(VALUE_AXIS_TICKS)
        .into_iter()
        .map(|tick| AxisTick::new(value_scale.map(tick), format_number(tick)))
        .collect();
    bottom_axis(&mut frame, (origin.0, origin.1 + inner_height), inner_width, &time_ticks, false);
    left_axis(&mut frame, origin, inner_height, &value_ticks);

    let projected = project_trend(&points, time_scale, value_scale, origin);
    if config.show_area {
        frame.push_path(
            PathPrimitive::filled(
                monotone_area_path(&projected, origin.1 + inner_height),
                config.color,
            )
            .with_fill_opacity(AREA_FILL_OPACITY),
        );
    }

    let line_data = monotone_line_path(&projected);
    let wipe_length = line_data.approximate_length();
    let mut line = PathPrimitive::stroked(line_data, Stroke::new(config.color, LINE_STROKE_WIDTH));
    if config.animate {
        line = line.with_animation(PathAnimation::DashWipe {
            length: wipe_length,
            duration_ms: LINE_WIPE_DURATION_MS,
            easing: Easing::Linear,
        });
    }
    frame.push_path(line);

    let mut hover_targets = Vec::new();
    if config.show_points {
        for (point, projected) in points.iter().zip(&projected) {
            let (Some(value), Some((x, y))) = (point.value, projected.defined()) else {
                continue;
            };
            let element = frame.push_circle(
                CirclePrimitive::new(x, y, MARKER_RADIUS, config.color)
                    .with_stroke(Stroke::new(palette::WHITE, MARKER_STROKE_WIDTH)),
            );
            hover_targets.push(HoverTarget {
                shape: HitShape::Circle {
                    cx: x,
                    cy: y,
                    radius: MARKER_HOVER_RADIUS,
                },
                element,
                effect: HoverEffect::grow_marker(),
                tooltip: Some(TooltipContent::new(
                    format_time(point.time_ms, TOOLTIP_DATE_FORMAT),
                    vec![format!("Value: {}", format_number(value))],
                )),
            });
        }
    }

    ChartOutput::Chart(ChartScene {
        frame,
        hover_targets,
        legend: None,
    })
}

/// Renders a time-series chart into mount point `config.id`.
pub fn render_line(document: &mut Document, data: Option<&[TimeSeriesDatum]>, config: &LineConfig) {
    let Some(viewport) = document.chart_viewport(&config.id) else {
        trace!(id = %config.id, "line target not mounted");
        return;
    };
    let output = build_line(data, config, viewport);
    debug!(id = %config.id, placeholder = output.notice().is_some(), "render line chart");
    document.apply_output(&config.id, output, true);
}

/// Like [`render_line`], for an untrusted JSON payload.
pub fn render_line_json(document: &mut Document, payload: &Value, config: &LineConfig) {
    let data = time_series_from_json(payload);
    render_line(document, data.as_deref(), config);
}

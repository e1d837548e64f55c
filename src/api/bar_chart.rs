use serde_json::Value;
use tracing::{debug, trace};

use super::axis_builder::{AxisTick, bottom_axis, left_axis};
use super::{BarConfig, ChartOutput, ChartScene, Document};
use crate::core::{
    BandScale, BarOrientation, CategoryDatum, LinearScale, Margin, Viewport,
    category_data_from_json, format_number, headroom_domain, project_bars,
};
use crate::interaction::{HitShape, HoverEffect, HoverTarget};
use crate::render::{
    Easing, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, Transition, palette,
};

pub const BAR_NO_DATA_MESSAGE: &str = "No data available for this chart";
pub const BAR_ALL_FILTERED_MESSAGE: &str = "All values are unavailable";

pub const HORIZONTAL_BAR_MARGIN: Margin = Margin::new(20.0, 60.0, 30.0, 120.0);
pub const VERTICAL_BAR_MARGIN: Margin = Margin::new(20.0, 30.0, 60.0, 60.0);

pub const BAR_PADDING: f64 = 0.2;
pub const BAR_GROW_DURATION_MS: u32 = 750;
const VALUE_AXIS_TICKS: usize = 5;
const VALUE_FONT_SIZE_PX: f64 = 11.0;

/// Builds the bar scene without touching any document.
///
/// Zero is kept as real data; only missing or non-finite values are dropped.
/// The value domain is `[0, max * 1.1]`.
#[must_use]
pub fn build_bar(data: Option<&[CategoryDatum]>, config: &BarConfig, viewport: Viewport) -> ChartOutput {
    let Some(data) = data.filter(|data| !data.is_empty()) else {
        return ChartOutput::placeholder(BAR_NO_DATA_MESSAGE);
    };

    let valid: Vec<CategoryDatum> = data
        .iter()
        .filter(|datum| datum.finite_value().is_some())
        .cloned()
        .collect();
    if valid.is_empty() {
        return ChartOutput::placeholder(BAR_ALL_FILTERED_MESSAGE);
    }

    let (orientation, margin) = if config.horizontal {
        (BarOrientation::Horizontal, HORIZONTAL_BAR_MARGIN)
    } else {
        (BarOrientation::Vertical, VERTICAL_BAR_MARGIN)
    };
    let (inner_width, inner_height) = margin.inner_size(viewport);
    let domain = headroom_domain(valid.iter().filter_map(CategoryDatum::finite_value));
    let labels = valid.iter().map(|datum| datum.label.as_str());

    let scales = match orientation {
        BarOrientation::Vertical => BandScale::new(labels, (0.0, inner_width), BAR_PADDING)
            .and_then(|band| Ok((band, LinearScale::new(domain, (inner_height, 0.0))?))),
        BarOrientation::Horizontal => BandScale::new(labels, (0.0, inner_height), BAR_PADDING)
            .and_then(|band| Ok((band, LinearScale::new(domain, (0.0, inner_width))?))),
    };
    let (band_scale, value_scale) = match scales {
        Ok(scales) => scales,
        Err(err) => {
            debug!(error = %err, "bar scales unavailable");
            return ChartOutput::placeholder(BAR_ALL_FILTERED_MESSAGE);
        }
    };
    trace!(
        bars = valid.len(),
        domain_max = domain.1,
        bandwidth = band_scale.bandwidth(),
        "bar scales"
    );

    let origin = (margin.left, margin.top);
    let mut frame = RenderFrame::new(viewport);

    let value_ticks: Vec<AxisTick> = value_scale
        .ticks(VALUE_AXIS_TICKS)
        .into_iter()
        .map(|tick| AxisTick::new(value_scale.map(tick), format_number(tick)))
        .collect();
    let band_ticks: Vec<AxisTick> = band_scale
        .labels()
        .filter_map(|label| Some(AxisTick::new(band_scale.center(label)?, label)))
        .collect();
    match orientation {
        BarOrientation::Vertical => {
            bottom_axis(&mut frame, (origin.0, origin.1 + inner_height), inner_width, &band_ticks, true);
            left_axis(&mut frame, origin, inner_height, &value_ticks);
        }
        BarOrientation::Horizontal => {
            bottom_axis(&mut frame, (origin.0, origin.1 + inner_height), inner_width, &value_ticks, false);
            left_axis(&mut frame, origin, inner_height, &band_ticks);
        }
    }

    let duration_ms = if config.animate { BAR_GROW_DURATION_MS } else { 0 };
    let bars = project_bars(&valid, value_scale, &band_scale, orientation, origin);
    let mut hover_targets = Vec::with_capacity(bars.len());
    for bar in &bars {
        let element = frame.push_rect(
            RectPrimitive::new(bar.rect, config.bar_color).with_enter(Transition::new(
                bar.baseline,
                bar.rect,
                duration_ms,
                Easing::CubicInOut,
            )),
        );
        hover_targets.push(HoverTarget {
            shape: HitShape::Rect(bar.rect),
            element,
            effect: HoverEffect::SwapFill {
                base: config.bar_color,
                hover: config.hover_color,
            },
            tooltip: None,
        });

        if config.show_values {
            let (x, y) = bar.label_anchor;
            let text = TextPrimitive::new(
                format_number(bar.value),
                x,
                y,
                VALUE_FONT_SIZE_PX,
                palette::TEXT_SECONDARY,
                match orientation {
                    BarOrientation::Vertical => TextHAlign::Center,
                    BarOrientation::Horizontal => TextHAlign::Left,
                },
            );
            frame.texts.push(match orientation {
                BarOrientation::Vertical => text,
                BarOrientation::Horizontal => text.with_dy(0.35),
            });
        }
    }

    ChartOutput::Chart(ChartScene {
        frame,
        hover_targets,
        legend: None,
    })
}

/// Renders a bar chart into mount point `config.id`.
pub fn render_bar(document: &mut Document, data: Option<&[CategoryDatum]>, config: &BarConfig) {
    let Some(viewport) = document.chart_viewport(&config.id) else {
        trace!(id = %config.id, "bar target not mounted");
        return;
    };
    let output = build_bar(data, config, viewport);
    debug!(
        id = %config.id,
        horizontal = config.horizontal,
        placeholder = output.notice().is_some(),
        "render bar chart"
    );
    document.apply_output(&config.id, output, false);
}

/// Like [`render_bar`], for an untrusted JSON payload.
pub fn render_bar_json(document: &mut Document, payload: &Value, config: &BarConfig) {
    let data = category_data_from_json(payload);
    render_bar(document, data.as_deref(), config);
}

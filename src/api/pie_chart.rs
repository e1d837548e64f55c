use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use super::{ChartOutput, ChartScene, Document, LegendEntry, PieConfig};
use crate::core::format::to_fixed;
use crate::core::{CategoryDatum, Viewport, category_data_from_json, format_number, project_pie};
use crate::interaction::{HitShape, HoverEffect, HoverTarget, TooltipContent};
use crate::render::{
    Color, PathPrimitive, RenderFrame, Stroke, TextHAlign, TextPrimitive, palette,
};

pub const PIE_NO_DATA_MESSAGE: &str = "No data available for this chart";
pub const PIE_ALL_FILTERED_MESSAGE: &str = "All values are zero or unavailable";

/// Slice labels are drawn only for datasets up to this size.
pub const MAX_LABELLED_SLICES: usize = 6;
/// Slices below this share (in percent) get no label.
pub const MIN_LABEL_PERCENT: f64 = 5.0;

const SLICE_STROKE_WIDTH: f64 = 2.0;
const LABEL_FONT_SIZE_PX: f64 = 11.0;

/// Builds the pie or donut scene without touching any document.
///
/// Only strictly positive finite values become slices; shares are taken over
/// that filtered total.
#[must_use]
pub fn build_pie(data: Option<&[CategoryDatum]>, config: &PieConfig, viewport: Viewport) -> ChartOutput {
    let Some(data) = data.filter(|data| !data.is_empty()) else {
        return ChartOutput::placeholder(PIE_NO_DATA_MESSAGE);
    };

    let valid: Vec<CategoryDatum> = data
        .iter()
        .filter(|datum| datum.finite_value().is_some_and(|value| value > 0.0))
        .cloned()
        .collect();
    if valid.is_empty() {
        return ChartOutput::placeholder(PIE_ALL_FILTERED_MESSAGE);
    }

    let layout = project_pie(&valid, viewport, config.donut);
    let colors = ordinal_colors(valid.iter().map(|datum| datum.label.as_str()), &config.colors);
    let color_of = |label: &str| colors.get(label).copied().unwrap_or(palette::PRIMARY);
    trace!(
        slices = layout.slices.len(),
        total = layout.total,
        outer_radius = layout.outer_radius,
        "pie layout"
    );

    let mut frame = RenderFrame::new(viewport);
    let mut hover_targets = Vec::with_capacity(layout.slices.len());
    for slice in &layout.slices {
        let element = frame.push_path(
            PathPrimitive::filled(slice.arc.path(), color_of(&slice.label))
                .with_stroke(Stroke::new(palette::WHITE, SLICE_STROKE_WIDTH)),
        );
        hover_targets.push(HoverTarget {
            shape: HitShape::Sector(slice.arc),
            element,
            effect: HoverEffect::enlarge_arc(),
            tooltip: Some(TooltipContent::new(
                slice.label.clone(),
                vec![format!(
                    "{} ({}%)",
                    format_number(slice.value),
                    to_fixed(slice.percent(), 1)
                )],
            )),
        });
    }

    if config.show_labels && valid.len() <= MAX_LABELLED_SLICES {
        for slice in layout.slices.iter().filter(|slice| slice.percent() >= MIN_LABEL_PERCENT) {
            let (x, y) = slice.arc.centroid();
            frame.texts.push(
                TextPrimitive::new(
                    format!("{}%", to_fixed(slice.percent(), 0)),
                    x,
                    y,
                    LABEL_FONT_SIZE_PX,
                    palette::WHITE,
                    TextHAlign::Center,
                )
                .with_weight(500)
                .with_dy(0.35),
            );
        }
    }

    let legend = config.show_legend.then(|| {
        valid
            .iter()
            .map(|datum| LegendEntry {
                label: datum.label.clone(),
                value: format_number(datum.value),
                color: color_of(&datum.label),
            })
            .collect()
    });

    ChartOutput::Chart(ChartScene {
        frame,
        hover_targets,
        legend,
    })
}

/// Renders a pie chart into mount point `config.id`.
pub fn render_pie(document: &mut Document, data: Option<&[CategoryDatum]>, config: &PieConfig) {
    let Some(viewport) = document.chart_viewport(&config.id) else {
        trace!(id = %config.id, "pie target not mounted");
        return;
    };
    let output = build_pie(data, config, viewport);
    debug!(id = %config.id, placeholder = output.notice().is_some(), "render pie chart");
    document.apply_output(&config.id, output, true);
}

/// Like [`render_pie`], for an untrusted JSON payload.
pub fn render_pie_json(document: &mut Document, payload: &Value, config: &PieConfig) {
    let data = category_data_from_json(payload);
    render_pie(document, data.as_deref(), config);
}

/// Ordinal colour scale: labels take colours in first-seen order, cycling.
pub(crate) fn ordinal_colors<'a>(
    labels: impl IntoIterator<Item = &'a str>,
    range: &[Color],
) -> IndexMap<String, Color> {
    let range: &[Color] = if range.is_empty() {
        &palette::CATEGORICAL
    } else {
        range
    };
    let mut colors = IndexMap::new();
    for label in labels {
        if !colors.contains_key(label) {
            let color = range[colors.len() % range.len()];
            colors.insert(label.to_owned(), color);
        }
    }
    colors
}

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::{CategoryDatum, Viewport};
use crate::render::ArcGeometry;

/// Gap between the pie and the viewport edge.
pub const PIE_RADIUS_INSET: f64 = 20.0;
/// Donut hole as a fraction of the outer radius.
pub const DONUT_INNER_RATIO: f64 = 0.55;

/// One wedge of a pie layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the layout total in `[0, 1]`.
    pub share: f64,
    pub arc: ArcGeometry,
}

impl PieSlice {
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.share * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub total: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub slices: Vec<PieSlice>,
}

/// Lays out wedges in input order, clockwise from twelve o'clock.
///
/// Shares are relative to the sum of `data` only, so callers must pass the
/// already-filtered positive values.
#[must_use]
pub fn project_pie(data: &[CategoryDatum], viewport: Viewport, donut: bool) -> PieLayout {
    let outer_radius = (viewport.width.min(viewport.height) / 2.0 - PIE_RADIUS_INSET).max(0.0);
    let inner_radius = if donut {
        outer_radius * DONUT_INNER_RATIO
    } else {
        0.0
    };
    let cx = viewport.width / 2.0;
    let cy = viewport.height / 2.0;

    let values: Vec<f64> = data
        .iter()
        .map(|datum| datum.finite_value().unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = values.iter().sum();
    // Shares come from values scaled by the largest one; the raw sum of
    // large finite values can overflow.
    let largest = values.iter().copied().fold(0.0, f64::max);
    let scaled_total: f64 = if largest > 0.0 {
        values.iter().map(|value| value / largest).sum()
    } else {
        0.0
    };

    let mut angle = 0.0;
    let slices = data
        .iter()
        .zip(values)
        .map(|(datum, value)| {
            let share = if scaled_total > 0.0 {
                value / largest / scaled_total
            } else {
                0.0
            };
            let start_angle = angle;
            angle += share * TAU;
            PieSlice {
                label: datum.label.clone(),
                value,
                share,
                arc: ArcGeometry {
                    cx,
                    cy,
                    inner_radius,
                    outer_radius,
                    start_angle,
                    end_angle: angle,
                },
            }
        })
        .collect();

    PieLayout {
        total,
        outer_radius,
        inner_radius,
        slices,
    }
}

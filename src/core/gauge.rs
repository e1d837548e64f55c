use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::render::{Color, palette};

/// Angle of the empty gauge (nine o'clock).
pub const GAUGE_START_ANGLE: f64 = -FRAC_PI_2;
/// Angle of the full gauge (three o'clock).
pub const GAUGE_END_ANGLE: f64 = FRAC_PI_2;

/// Colour band; applies to gauge values up to and including `value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeThreshold {
    pub value: f64,
    pub color: Color,
}

impl GaugeThreshold {
    #[must_use]
    pub const fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

#[must_use]
pub fn default_thresholds() -> Vec<GaugeThreshold> {
    vec![
        GaugeThreshold::new(50.0, palette::DANGER),
        GaugeThreshold::new(75.0, palette::WARNING),
        GaugeThreshold::new(100.0, palette::SUCCESS),
    ]
}

/// Caps `value` into `[min, max]`. Callers guarantee `min < max`.
#[must_use]
pub fn clamp_gauge_value(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear `[min, max] -> [-π/2, π/2]` after clamping.
#[must_use]
pub fn gauge_angle(value: f64, min: f64, max: f64) -> f64 {
    let clamped = clamp_gauge_value(value, min, max);
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return GAUGE_START_ANGLE;
    }
    GAUGE_START_ANGLE + (clamped - min) / span * (GAUGE_END_ANGLE - GAUGE_START_ANGLE)
}

/// First threshold (in list order) whose value is `>= value`, else the last.
///
/// The list is taken as given; unsorted thresholds give unsorted results.
#[must_use]
pub fn threshold_color(value: f64, thresholds: &[GaugeThreshold]) -> Option<Color> {
    thresholds
        .iter()
        .find(|threshold| value <= threshold.value)
        .or_else(|| thresholds.last())
        .map(|threshold| threshold.color)
}

/// Angle at progress `t` of a sweep from `from` to `to`.
#[must_use]
pub fn interpolate_angle(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

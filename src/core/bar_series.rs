use serde::{Deserialize, Serialize};

use crate::core::{BandScale, CategoryDatum, LinearScale};
use crate::render::RectGeometry;

/// Which axis carries the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BarOrientation {
    /// Categories along x, values grow upward.
    #[default]
    Vertical,
    /// Categories along y, values grow rightward.
    Horizontal,
}

/// Deterministic bar geometry in frame pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    /// Final rectangle.
    pub rect: RectGeometry,
    /// Zero-length rectangle on the baseline the bar grows from.
    pub baseline: RectGeometry,
    /// Anchor for the value label, just outside the bar end.
    pub label_anchor: (f64, f64),
}

/// Gap between a bar end and its value label.
pub const VALUE_LABEL_OFFSET: f64 = 5.0;

/// Projects category values into bars.
///
/// `origin` is the plot-area top-left corner. The value scale range must run
/// from the baseline outward: `[plot_height, 0]` for vertical bars and
/// `[0, plot_width]` for horizontal bars. Negative values collapse onto the
/// baseline.
#[must_use]
pub fn project_bars(
    data: &[CategoryDatum],
    value_scale: LinearScale,
    band_scale: &BandScale,
    orientation: BarOrientation,
    origin: (f64, f64),
) -> Vec<BarGeometry> {
    let (left, top) = origin;
    let bandwidth = band_scale.bandwidth();
    let baseline_px = value_scale.map(0.0);

    data.iter()
        .filter_map(|datum| {
            let value = datum.finite_value()?;
            let band = band_scale.position(&datum.label)?;
            let end_px = value_scale.map(value.max(0.0));

            let (rect, baseline, label_anchor) = match orientation {
                BarOrientation::Vertical => {
                    let x = left + band;
                    let rect = RectGeometry::new(x, top + end_px, bandwidth, baseline_px - end_px);
                    let baseline = RectGeometry::new(x, top + baseline_px, bandwidth, 0.0);
                    let anchor = (x + bandwidth / 2.0, rect.y - VALUE_LABEL_OFFSET);
                    (rect, baseline, anchor)
                }
                BarOrientation::Horizontal => {
                    let y = top + band;
                    let rect = RectGeometry::new(left + baseline_px, y, end_px - baseline_px, bandwidth);
                    let baseline = RectGeometry::new(left + baseline_px, y, 0.0, bandwidth);
                    let anchor = (rect.x + rect.width + VALUE_LABEL_OFFSET, y + bandwidth / 2.0);
                    (rect, baseline, anchor)
                }
            };

            Some(BarGeometry {
                label: datum.label.clone(),
                value,
                rect,
                baseline,
                label_anchor,
            })
        })
        .collect()
}

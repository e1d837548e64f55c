use crate::core::{LayoutBox, Viewport};

pub const MIN_CHART_WIDTH: f64 = 200.0;
pub const MIN_CHART_HEIGHT: f64 = 200.0;
pub const MAX_CHART_HEIGHT: f64 = 400.0;
pub const HEIGHT_TO_WIDTH_RATIO: f64 = 0.6;

/// Derives chart pixel size from a container box measured at call time.
///
/// Later container resizes are not observed; callers re-render on resize.
#[must_use]
pub fn responsive_size(container: LayoutBox) -> Viewport {
    let measured = if container.width.is_finite() {
        container.width
    } else {
        0.0
    };
    Viewport::new(
        measured.max(MIN_CHART_WIDTH),
        (measured * HEIGHT_TO_WIDTH_RATIO).clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT),
    )
}

use crate::core::line_series::{CurveMode, MonotoneX};
use crate::core::ProjectedPoint;
use crate::render::PathData;

/// Monotone area between the trend line and `baseline_y`.
///
/// Each run of defined points closes its own region, so gaps in the line are
/// gaps in the fill too.
#[must_use]
pub fn monotone_area_path(points: &[ProjectedPoint], baseline_y: f64) -> PathData {
    let mut path = PathData::new();
    let mut curve = MonotoneX::new(&mut path, CurveMode::AreaTop);
    let mut run: Vec<f64> = Vec::new();

    for point in points {
        match point.defined() {
            Some((x, y)) => {
                if run.is_empty() {
                    curve.line_start();
                }
                curve.point(x, y);
                run.push(x);
            }
            None => close_run(&mut curve, &mut run, baseline_y),
        }
    }
    close_run(&mut curve, &mut run, baseline_y);
    path
}

fn close_run(curve: &mut MonotoneX<'_>, run: &mut Vec<f64>, baseline_y: f64) {
    if run.is_empty() {
        return;
    }
    curve.line_end();
    curve.line_start();
    for &x in run.iter().rev() {
        curve.point(x, baseline_y);
    }
    curve.line_end();
    run.clear();
}

use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, TimeScale};
use crate::render::PathData;

/// Parsed trend sample; `value == None` marks a gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub time_ms: f64,
    pub value: Option<f64>,
}

/// Trend sample in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: Option<f64>,
}

impl ProjectedPoint {
    #[must_use]
    pub fn defined(self) -> Option<(f64, f64)> {
        self.y.filter(|y| y.is_finite() && self.x.is_finite()).map(|y| (self.x, y))
    }
}

/// Maps trend samples through both scales, offset by the plot-area `origin`.
#[must_use]
pub fn project_trend(
    points: &[TrendPoint],
    time_scale: TimeScale,
    value_scale: LinearScale,
    origin: (f64, f64),
) -> Vec<ProjectedPoint> {
    points
        .iter()
        .map(|point| ProjectedPoint {
            x: origin.0 + time_scale.time_to_pixel(point.time_ms),
            y: point
                .value
                .filter(|value| value.is_finite())
                .map(|value| origin.1 + value_scale.map(value)),
        })
        .collect()
}

/// Monotone-in-x cubic line through the defined points.
///
/// Every run of defined points becomes its own subpath, so an undefined
/// sample leaves a visible gap. An isolated point yields `M x,y Z`.
#[must_use]
pub fn monotone_line_path(points: &[ProjectedPoint]) -> PathData {
    let mut path = PathData::new();
    let mut curve = MonotoneX::new(&mut path, CurveMode::Line);
    let mut in_run = false;

    for point in points {
        match point.defined() {
            Some((x, y)) => {
                if !in_run {
                    curve.line_start();
                    in_run = true;
                }
                curve.point(x, y);
            }
            None if in_run => {
                curve.line_end();
                in_run = false;
            }
            None => {}
        }
    }
    if in_run {
        curve.line_end();
    }
    path
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CurveMode {
    Line,
    AreaTop,
    AreaBottom,
}

/// Fritsch-Carlson style monotone interpolation, emitted as cubic Béziers.
pub(crate) struct MonotoneX<'a> {
    path: &'a mut PathData,
    mode: CurveMode,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
    seen: u8,
}

impl<'a> MonotoneX<'a> {
    pub(crate) fn new(path: &'a mut PathData, mode: CurveMode) -> Self {
        Self {
            path,
            mode,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            t0: f64::NAN,
            seen: 0,
        }
    }

    pub(crate) fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.t0 = f64::NAN;
        self.seen = 0;
    }

    pub(crate) fn line_end(&mut self) {
        match self.seen {
            2 => {
                self.path.line_to(self.x1, self.y1);
            }
            3 => {
                let t1 = self.slope2(self.t0);
                self.segment(self.t0, t1);
            }
            _ => {}
        }
        let close = match self.mode {
            CurveMode::Line => self.seen == 1,
            CurveMode::AreaTop => false,
            CurveMode::AreaBottom => true,
        };
        if close {
            self.path.close();
        }
        self.mode = match self.mode {
            CurveMode::Line => CurveMode::Line,
            CurveMode::AreaTop => CurveMode::AreaBottom,
            CurveMode::AreaBottom => CurveMode::AreaTop,
        };
    }

    pub(crate) fn point(&mut self, x: f64, y: f64) {
        if x == self.x1 && y == self.y1 {
            return;
        }
        let mut t1 = f64::NAN;
        match self.seen {
            0 => {
                self.seen = 1;
                if self.mode == CurveMode::AreaBottom {
                    self.path.line_to(x, y);
                } else {
                    self.path.move_to(x, y);
                }
            }
            1 => self.seen = 2,
            2 => {
                self.seen = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.segment(t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.segment(self.t0, t1);
            }
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }

    fn segment(&mut self, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        self.path.cubic_to(
            self.x0 + dx,
            self.y0 + dx * t0,
            self.x1 - dx,
            self.y1 - dx * t1,
            self.x1,
            self.y1,
        );
    }

    /// Slope at the middle point from both neighbouring secants.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let s0 = (self.y1 - self.y0) / zero_signed(h0, h1);
        let s1 = (y2 - self.y1) / zero_signed(h1, h0);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if slope.is_nan() { 0.0 } else { slope }
    }

    /// One-sided slope at an end point.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 && !h.is_nan() {
            (3.0 * (self.y1 - self.y0) / h - t) / 2.0
        } else {
            t
        }
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

fn zero_signed(h: f64, other: f64) -> f64 {
    if h != 0.0 {
        h
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    }
}

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const EPSILON: f64 = 1e-12;
const CURVE_FLATTEN_STEPS: usize = 16;

/// One outline command in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// Circular arc to `(x, y)`; `sweep` is clockwise on screen.
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// Ordered outline commands, serializable as SVG path data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
        self
    }

    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of disconnected pieces (one per `MoveTo`).
    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::MoveTo { .. }))
            .count()
    }

    /// Outline length with curves flattened; used for dash animations.
    #[must_use]
    pub fn approximate_length(&self) -> f64 {
        let mut length = 0.0;
        let mut current = (0.0, 0.0);
        let mut subpath_start = (0.0, 0.0);

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { x, y } => {
                    current = (x, y);
                    subpath_start = current;
                }
                PathCommand::LineTo { x, y } => {
                    length += distance(current, (x, y));
                    current = (x, y);
                }
                PathCommand::CubicTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    let mut previous = current;
                    for step in 1..=CURVE_FLATTEN_STEPS {
                        let t = step as f64 / CURVE_FLATTEN_STEPS as f64;
                        let point = cubic_point(current, (x1, y1), (x2, y2), (x, y), t);
                        length += distance(previous, point);
                        previous = point;
                    }
                    current = (x, y);
                }
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    x,
                    y,
                    ..
                } => {
                    let chord = distance(current, (x, y));
                    if radius > EPSILON {
                        let half = (chord / (2.0 * radius)).clamp(-1.0, 1.0).asin();
                        let angle = if large_arc { TAU - 2.0 * half } else { 2.0 * half };
                        length += radius * angle;
                    } else {
                        length += chord;
                    }
                    current = (x, y);
                }
                PathCommand::Close => {
                    length += distance(current, subpath_start);
                    current = subpath_start;
                }
            }
        }
        length
    }

    pub fn validate(&self) -> ChartResult<()> {
        let finite = |values: &[f64]| values.iter().all(|value| value.is_finite());
        for command in &self.commands {
            let ok = match *command {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => finite(&[x, y]),
                PathCommand::CubicTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => finite(&[x1, y1, x2, y2, x, y]),
                PathCommand::ArcTo { radius, x, y, .. } => finite(&[radius, x, y]) && radius >= 0.0,
                PathCommand::Close => true,
            };
            if !ok {
                return Err(ChartError::InvalidData(
                    "path commands must have finite coordinates".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// SVG `d` attribute value.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 16);
        for command in &self.commands {
            let _ = match *command {
                PathCommand::MoveTo { x, y } => write!(out, "M{},{}", num(x), num(y)),
                PathCommand::LineTo { x, y } => write!(out, "L{},{}", num(x), num(y)),
                PathCommand::CubicTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => write!(
                    out,
                    "C{},{},{},{},{},{}",
                    num(x1),
                    num(y1),
                    num(x2),
                    num(y2),
                    num(x),
                    num(y)
                ),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => write!(
                    out,
                    "A{r},{r},0,{},{},{},{}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    num(x),
                    num(y),
                    r = num(radius)
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }
}

/// Annular sector with angles in radians, clockwise from twelve o'clock.
///
/// An inner radius of zero yields a pie wedge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcGeometry {
    #[must_use]
    pub fn with_outer_radius(mut self, outer_radius: f64) -> Self {
        self.outer_radius = outer_radius;
        self
    }

    #[must_use]
    pub fn with_end_angle(mut self, end_angle: f64) -> Self {
        self.end_angle = end_angle;
        self
    }

    #[must_use]
    pub fn point_at(self, radius: f64, angle: f64) -> (f64, f64) {
        (self.cx + radius * angle.sin(), self.cy - radius * angle.cos())
    }

    /// Midpoint between the radii at the middle angle; used for labels.
    #[must_use]
    pub fn centroid(self) -> (f64, f64) {
        self.point_at(
            (self.inner_radius + self.outer_radius) / 2.0,
            (self.start_angle + self.end_angle) / 2.0,
        )
    }

    /// Whether `(x, y)` falls inside the sector.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        let radius = dx.hypot(dy);
        if radius < self.inner_radius || radius > self.outer_radius {
            return false;
        }
        let (low, high) = if self.end_angle >= self.start_angle {
            (self.start_angle, self.end_angle)
        } else {
            (self.end_angle, self.start_angle)
        };
        if high - low >= TAU - EPSILON {
            return true;
        }
        let angle = dx.atan2(-dy);
        (angle - low).rem_euclid(TAU) <= high - low
    }

    #[must_use]
    pub fn path(self) -> PathData {
        let mut path = PathData::new();
        let outer = self.outer_radius;
        let inner = self.inner_radius.max(0.0);

        if outer <= EPSILON {
            path.move_to(self.cx, self.cy).close();
            return path;
        }

        let span = (self.end_angle - self.start_angle).abs();
        let clockwise = self.end_angle >= self.start_angle;

        if span >= TAU - EPSILON {
            let (sx, sy) = self.point_at(outer, self.start_angle);
            let (mx, my) = self.point_at(outer, self.start_angle + PI);
            path.move_to(sx, sy)
                .arc_to(outer, true, true, mx, my)
                .arc_to(outer, true, true, sx, sy);
            if inner > EPSILON {
                let (isx, isy) = self.point_at(inner, self.start_angle);
                let (imx, imy) = self.point_at(inner, self.start_angle + PI);
                path.move_to(isx, isy)
                    .arc_to(inner, true, false, imx, imy)
                    .arc_to(inner, true, false, isx, isy);
            }
            path.close();
            return path;
        }

        let large_arc = span > PI;
        let (osx, osy) = self.point_at(outer, self.start_angle);
        let (oex, oey) = self.point_at(outer, self.end_angle);
        path.move_to(osx, osy)
            .arc_to(outer, large_arc, clockwise, oex, oey);
        if inner > EPSILON {
            let (iex, iey) = self.point_at(inner, self.end_angle);
            let (isx, isy) = self.point_at(inner, self.start_angle);
            path.line_to(iex, iey)
                .arc_to(inner, large_arc, !clockwise, isx, isy);
        } else {
            path.line_to(self.cx, self.cy);
        }
        path.close();
        path
    }
}

/// Compact SVG number: at most three decimals, no trailing zeros.
#[must_use]
pub fn num(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

fn cubic_point(
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    t: f64,
) -> (f64, f64) {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}

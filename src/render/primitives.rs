use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::PathData;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidColor(input.to_owned());
        let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |text: &str| u8::from_str_radix(text, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let expand = |index: usize| channel(&hex[index..=index].repeat(2));
                Ok(Self::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::from_rgb8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// `#rrggbb` form; alpha is carried separately as an opacity.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

/// Timing curve of a declared transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    CubicInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled * doubled / 2.0
                } else {
                    let shifted = doubled - 2.0;
                    (shifted * shifted * shifted + 2.0) / 2.0
                }
            }
        }
    }
}

/// Start and end state of an animated attribute.
///
/// Only the declaration lives here; backends schedule the frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T> {
    pub from: T,
    pub to: T,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl<T> Transition<T> {
    #[must_use]
    pub const fn new(from: T, to: T, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

/// Stroke paint shared by paths and circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub dash: Option<(f64, f64)>,
    pub opacity: f64,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: None,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn with_dash(mut self, on: f64, off: f64) -> Self {
        self.dash = Some((on, off));
        self
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "line opacity must be in [0, 1]".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Position and size of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectGeometry {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Filled rectangle; `enter` declares how it grows into `geometry`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub geometry: RectGeometry,
    pub fill: Color,
    pub enter: Option<Transition<RectGeometry>>,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(geometry: RectGeometry, fill: Color) -> Self {
        Self {
            geometry,
            fill,
            enter: None,
        }
    }

    #[must_use]
    pub const fn with_enter(mut self, enter: Transition<RectGeometry>) -> Self {
        self.enter = Some(enter);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        let RectGeometry {
            x,
            y,
            width,
            height,
        } = self.geometry;
        if !x.is_finite() || !y.is_finite() || !width.is_finite() || !height.is_finite() {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Declared animation of a path outline.
#[derive(Debug, Clone, PartialEq)]
pub enum PathAnimation {
    /// Reveals the stroke by moving the dash offset from `length` to zero.
    DashWipe {
        length: f64,
        duration_ms: u32,
        easing: Easing,
    },
    /// Interpolated outlines sampled at equal time steps.
    Keyframes {
        frames: Vec<PathData>,
        duration_ms: u32,
    },
}

/// Filled and/or stroked outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub data: PathData,
    pub fill: Option<Color>,
    pub fill_opacity: f64,
    pub stroke: Option<Stroke>,
    pub animation: Option<PathAnimation>,
}

impl PathPrimitive {
    #[must_use]
    pub fn filled(data: PathData, fill: Color) -> Self {
        Self {
            data,
            fill: Some(fill),
            fill_opacity: 1.0,
            stroke: None,
            animation: None,
        }
    }

    #[must_use]
    pub fn stroked(data: PathData, stroke: Stroke) -> Self {
        Self {
            data,
            fill: None,
            fill_opacity: 1.0,
            stroke: Some(stroke),
            animation: None,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: PathAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.data.validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(ChartError::InvalidData(
                "fill opacity must be in [0, 1]".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        match &self.animation {
            Some(PathAnimation::DashWipe { length, .. })
                if !length.is_finite() || *length < 0.0 =>
            {
                Err(ChartError::InvalidData(
                    "dash wipe length must be finite and >= 0".to_owned(),
                ))
            }
            Some(PathAnimation::Keyframes { frames, .. }) => {
                frames.iter().try_for_each(PathData::validate)
            }
            _ => Ok(()),
        }
    }
}

/// Filled circle marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
            stroke: None,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub font_weight: u16,
    /// Baseline shift in `em`.
    pub dy_em: f64,
    /// Clockwise rotation in degrees around `(x, y)`.
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            font_weight: 400,
            dy_em: 0.0,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    #[must_use]
    pub fn with_dy(mut self, dy_em: f64) -> Self {
        self.dy_em = dy_em;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.dy_em.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text offsets must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::path::num;
use crate::render::{
    CirclePrimitive, Easing, LinePrimitive, PathAnimation, PathPrimitive, RectGeometry,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, escape_markup,
};

/// Renders frames to standalone SVG markup.
///
/// Declared transitions become SMIL `<animate>` elements; instant
/// transitions emit only the final state.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    markup: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn into_markup(self) -> String {
        self.markup
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = num(frame.viewport.width);
        let height = num(frame.viewport.height);
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        for line in &frame.lines {
            write_line(&mut svg, line);
        }
        for rect in &frame.rects {
            write_rect(&mut svg, rect);
        }
        for path in &frame.paths {
            write_path(&mut svg, path);
        }
        for circle in &frame.circles {
            write_circle(&mut svg, circle);
        }
        for text in &frame.texts {
            write_text(&mut svg, text);
        }
        svg.push_str("</svg>\n");

        self.markup = svg;
        Ok(())
    }
}

fn write_line(svg: &mut String, line: &LinePrimitive) {
    let _ = write!(
        svg,
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.color.to_hex(),
        num(line.stroke_width)
    );
    if let Some((on, off)) = line.dash {
        let _ = write!(svg, " stroke-dasharray=\"{},{}\"", num(on), num(off));
    }
    let opacity = line.opacity * line.color.alpha;
    if opacity < 1.0 {
        let _ = write!(svg, " opacity=\"{}\"", num(opacity));
    }
    svg.push_str("/>\n");
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) {
    let animated = rect.enter.filter(|enter| !enter.is_instant());
    let shown = animated.map_or(rect.geometry, |enter| enter.from);
    let _ = write!(
        svg,
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
        num(shown.x),
        num(shown.y),
        num(shown.width),
        num(shown.height),
        rect.fill.to_hex()
    );

    let Some(enter) = animated else {
        svg.push_str("/>\n");
        return;
    };
    svg.push_str(">\n");
    let attributes: [(&str, fn(RectGeometry) -> f64); 4] = [
        ("x", |g| g.x),
        ("y", |g| g.y),
        ("width", |g| g.width),
        ("height", |g| g.height),
    ];
    for (name, read) in attributes {
        let (from, to) = (read(enter.from), read(enter.to));
        if from != to {
            write_animate(svg, name, &num(from), &num(to), enter.duration_ms, enter.easing);
        }
    }
    svg.push_str("  </rect>\n");
}

fn write_path(svg: &mut String, path: &PathPrimitive) {
    let initial_d = match &path.animation {
        Some(PathAnimation::Keyframes {
            frames,
            duration_ms,
        }) if *duration_ms > 0 && !frames.is_empty() => frames[0].to_svg(),
        Some(PathAnimation::Keyframes { frames, .. }) => frames
            .last()
            .map_or_else(|| path.data.to_svg(), |last| last.to_svg()),
        _ => path.data.to_svg(),
    };
    let _ = write!(svg, "  <path d=\"{initial_d}\"");
    match path.fill {
        Some(fill) => {
            let _ = write!(svg, " fill=\"{}\"", fill.to_hex());
            let opacity = path.fill_opacity * fill.alpha;
            if opacity < 1.0 {
                let _ = write!(svg, " fill-opacity=\"{}\"", num(opacity));
            }
        }
        None => svg.push_str(" fill=\"none\""),
    }
    if let Some(stroke) = path.stroke {
        let _ = write!(
            svg,
            " stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color.to_hex(),
            num(stroke.width)
        );
    }

    match &path.animation {
        Some(PathAnimation::DashWipe {
            length,
            duration_ms,
            easing,
        }) if *duration_ms > 0 => {
            let length = num(*length);
            let _ = writeln!(
                svg,
                " stroke-dasharray=\"{length}\" stroke-dashoffset=\"{length}\">"
            );
            write_animate(svg, "stroke-dashoffset", &length, "0", *duration_ms, *easing);
            svg.push_str("  </path>\n");
        }
        Some(PathAnimation::Keyframes {
            frames,
            duration_ms,
        }) if *duration_ms > 0 && frames.len() > 1 => {
            svg.push_str(">\n");
            let values: Vec<String> = frames.iter().map(|frame| frame.to_svg()).collect();
            let _ = writeln!(
                svg,
                "    <animate attributeName=\"d\" values=\"{}\" dur=\"{duration_ms}ms\" calcMode=\"discrete\" fill=\"freeze\"/>",
                values.join(";")
            );
            svg.push_str("  </path>\n");
        }
        _ => svg.push_str("/>\n"),
    }
}

fn write_circle(svg: &mut String, circle: &CirclePrimitive) {
    let _ = write!(
        svg,
        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
        num(circle.cx),
        num(circle.cy),
        num(circle.radius),
        circle.fill.to_hex()
    );
    if let Some(stroke) = circle.stroke {
        let _ = write!(
            svg,
            " stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color.to_hex(),
            num(stroke.width)
        );
    }
    svg.push_str("/>\n");
}

fn write_text(svg: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let _ = write!(
        svg,
        "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\"",
        num(text.x),
        num(text.y),
        num(text.font_size_px),
        text.color.to_hex()
    );
    if text.font_weight != 400 {
        let _ = write!(svg, " font-weight=\"{}\"", text.font_weight);
    }
    if text.dy_em != 0.0 {
        let _ = write!(svg, " dy=\"{}em\"", num(text.dy_em));
    }
    if text.rotation_deg != 0.0 {
        let _ = write!(
            svg,
            " transform=\"rotate({} {} {})\"",
            num(text.rotation_deg),
            num(text.x),
            num(text.y)
        );
    }
    let _ = writeln!(svg, ">{}</text>", escape_markup(&text.text));
}

fn write_animate(svg: &mut String, attribute: &str, from: &str, to: &str, duration_ms: u32, easing: Easing) {
    let _ = write!(
        svg,
        "    <animate attributeName=\"{attribute}\" from=\"{from}\" to=\"{to}\" dur=\"{duration_ms}ms\" fill=\"freeze\""
    );
    if easing == Easing::CubicInOut {
        svg.push_str(" calcMode=\"spline\" keyTimes=\"0;1\" keySplines=\"0.645 0.045 0.355 1\"");
    }
    svg.push_str("/>\n");
}

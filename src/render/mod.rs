mod frame;
mod null_renderer;
pub mod palette;
mod path;
mod primitives;
mod svg_renderer;

pub use frame::{ElementRef, RenderFrame};
pub use null_renderer::NullRenderer;
pub use path::{ArcGeometry, PathCommand, PathData, num};
pub use primitives::{
    CirclePrimitive, Color, Easing, LinePrimitive, PathAnimation, PathPrimitive, RectGeometry,
    RectPrimitive, Stroke, TextHAlign, TextPrimitive, Transition,
};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart data and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

/// Escapes text for HTML and SVG content or attribute values.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

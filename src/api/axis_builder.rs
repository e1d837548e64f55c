use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, palette};

const TICK_SIZE_PX: f64 = 6.0;
const TICK_PADDING_PX: f64 = 3.0;
const AXIS_FONT_SIZE_PX: f64 = 10.0;
const GRID_DASH: (f64, f64) = (3.0, 3.0);
const GRID_OPACITY: f64 = 0.2;

/// One labelled tick; `offset` is measured along the axis from its origin.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AxisTick {
    pub offset: f64,
    pub label: String,
}

impl AxisTick {
    pub(crate) fn new(offset: f64, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }
}

/// Horizontal axis whose domain line starts at `origin` and runs `length` px.
pub(crate) fn bottom_axis(
    frame: &mut RenderFrame,
    origin: (f64, f64),
    length: f64,
    ticks: &[AxisTick],
    rotate_labels: bool,
) {
    let (x0, y0) = origin;
    frame
        .lines
        .push(LinePrimitive::new(x0, y0, x0 + length, y0, 1.0, palette::AXIS));
    for tick in ticks {
        let x = x0 + tick.offset;
        frame
            .lines
            .push(LinePrimitive::new(x, y0, x, y0 + TICK_SIZE_PX, 1.0, palette::AXIS));
        if tick.label.is_empty() {
            continue;
        }
        let label_y = y0 + TICK_SIZE_PX + TICK_PADDING_PX;
        let text = if rotate_labels {
            TextPrimitive::new(
                &tick.label,
                x - AXIS_FONT_SIZE_PX / 2.0,
                label_y,
                AXIS_FONT_SIZE_PX,
                palette::TEXT_SECONDARY,
                TextHAlign::Right,
            )
            .with_dy(0.5)
            .with_rotation(-45.0)
        } else {
            TextPrimitive::new(
                &tick.label,
                x,
                label_y,
                AXIS_FONT_SIZE_PX,
                palette::TEXT_SECONDARY,
                TextHAlign::Center,
            )
            .with_dy(0.71)
        };
        frame.texts.push(text);
    }
}

/// Vertical axis whose domain line starts at `origin` and runs `length` px down.
pub(crate) fn left_axis(frame: &mut RenderFrame, origin: (f64, f64), length: f64, ticks: &[AxisTick]) {
    let (x0, y0) = origin;
    frame
        .lines
        .push(LinePrimitive::new(x0, y0, x0, y0 + length, 1.0, palette::AXIS));
    for tick in ticks {
        let y = y0 + tick.offset;
        frame
            .lines
            .push(LinePrimitive::new(x0 - TICK_SIZE_PX, y, x0, y, 1.0, palette::AXIS));
        if tick.label.is_empty() {
            continue;
        }
        frame.texts.push(
            TextPrimitive::new(
                &tick.label,
                x0 - TICK_SIZE_PX - TICK_PADDING_PX,
                y,
                AXIS_FONT_SIZE_PX,
                palette::TEXT_SECONDARY,
                TextHAlign::Right,
            )
            .with_dy(0.32),
        );
    }
}

/// Dashed full-width guide lines at the given vertical offsets.
pub(crate) fn horizontal_grid(frame: &mut RenderFrame, origin: (f64, f64), width: f64, offsets: &[f64]) {
    let (x0, y0) = origin;
    for &offset in offsets {
        let y = y0 + offset;
        frame.lines.push(
            LinePrimitive::new(x0, y, x0 + width, y, 1.0, palette::AXIS)
                .with_dash(GRID_DASH.0, GRID_DASH.1)
                .with_opacity(GRID_OPACITY),
        );
    }
}

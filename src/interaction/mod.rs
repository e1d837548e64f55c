use serde::{Deserialize, Serialize};

use crate::render::{
    ArcGeometry, Color, ElementRef, PathAnimation, RectGeometry, RenderFrame, escape_markup,
};

/// Tooltip placement relative to the pointer.
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -10.0;

pub const ARC_HOVER_GROWTH_PX: f64 = 5.0;
pub const ARC_HOVER_DURATION_MS: u32 = 200;
pub const MARKER_RADIUS: f64 = 4.0;
pub const MARKER_HOVER_RADIUS: f64 = 6.0;

const ARC_HOVER_KEYFRAMES: usize = 5;

/// Pointer-sensitive region of one drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HitShape {
    Sector(ArcGeometry),
    Rect(RectGeometry),
    Circle { cx: f64, cy: f64, radius: f64 },
}

impl HitShape {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        match self {
            Self::Sector(arc) => arc.contains(x, y),
            Self::Rect(rect) => rect.contains(x, y),
            Self::Circle { cx, cy, radius } => (x - cx).hypot(y - cy) <= radius,
        }
    }
}

/// Visual change applied to the hovered element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HoverEffect {
    /// Grows a sector's outer radius.
    EnlargeArc { growth_px: f64, duration_ms: u32 },
    SwapFill { base: Color, hover: Color },
    GrowMarker { base_radius: f64, hover_radius: f64 },
}

impl HoverEffect {
    #[must_use]
    pub const fn enlarge_arc() -> Self {
        Self::EnlargeArc {
            growth_px: ARC_HOVER_GROWTH_PX,
            duration_ms: ARC_HOVER_DURATION_MS,
        }
    }

    #[must_use]
    pub const fn grow_marker() -> Self {
        Self::GrowMarker {
            base_radius: MARKER_RADIUS,
            hover_radius: MARKER_HOVER_RADIUS,
        }
    }
}

/// Tooltip body: a bold title followed by plain lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<String>,
}

impl TooltipContent {
    #[must_use]
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!("<strong>{}</strong>", escape_markup(&self.title));
        for line in &self.lines {
            html.push_str("<br/>");
            html.push_str(&escape_markup(line));
        }
        html
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub shape: HitShape,
    pub element: ElementRef,
    pub effect: HoverEffect,
    pub tooltip: Option<TooltipContent>,
}

impl HoverTarget {
    /// Region covered while this target is drawn hovered.
    #[must_use]
    pub fn hovered_shape(&self) -> HitShape {
        match (self.effect, self.shape) {
            (HoverEffect::EnlargeArc { growth_px, .. }, HitShape::Sector(arc)) => {
                HitShape::Sector(arc.with_outer_radius(arc.outer_radius + growth_px))
            }
            (_, shape) => shape,
        }
    }
}

/// Index of the topmost target containing `(x, y)`.
///
/// Targets are stored in paint order, so the last match wins.
#[must_use]
pub fn hit_test(targets: &[HoverTarget], x: f64, y: f64) -> Option<usize> {
    hit_test_hovered(targets, None, x, y)
}

/// Like [`hit_test`], but the target at `hovered` is tested against its
/// hovered shape.
#[must_use]
pub fn hit_test_hovered(
    targets: &[HoverTarget],
    hovered: Option<usize>,
    x: f64,
    y: f64,
) -> Option<usize> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    targets.iter().enumerate().rev().find_map(|(index, target)| {
        let shape = if hovered == Some(index) {
            target.hovered_shape()
        } else {
            target.shape
        };
        shape.contains(x, y).then_some(index)
    })
}

/// Derives the frame shown while `target` is hovered.
///
/// Unknown element references leave the frame unchanged.
#[must_use]
pub fn apply_hover(frame: &RenderFrame, target: &HoverTarget) -> RenderFrame {
    let mut hovered = frame.clone();
    match (target.effect, target.element, target.shape) {
        (HoverEffect::EnlargeArc { growth_px, duration_ms }, ElementRef::Path(index), HitShape::Sector(arc)) => {
            if let Some(path) = hovered.paths.get_mut(index) {
                let target_radius = arc.outer_radius + growth_px;
                let enlarged = arc.with_outer_radius(target_radius);
                path.data = enlarged.path();
                path.animation = (duration_ms > 0).then(|| PathAnimation::Keyframes {
                    frames: (0..=ARC_HOVER_KEYFRAMES)
                        .map(|step| {
                            let t = step as f64 / ARC_HOVER_KEYFRAMES as f64;
                            arc.with_outer_radius(arc.outer_radius + growth_px * t).path()
                        })
                        .collect(),
                    duration_ms,
                });
            }
        }
        (HoverEffect::SwapFill { hover, .. }, ElementRef::Rect(index), _) => {
            if let Some(rect) = hovered.rects.get_mut(index) {
                rect.fill = hover;
                rect.enter = None;
            }
        }
        (HoverEffect::SwapFill { hover, .. }, ElementRef::Path(index), _) => {
            if let Some(path) = hovered.paths.get_mut(index) {
                path.fill = Some(hover);
                path.animation = None;
            }
        }
        (HoverEffect::GrowMarker { hover_radius, .. }, ElementRef::Circle(index), _) => {
            if let Some(circle) = hovered.circles.get_mut(index) {
                circle.radius = hover_radius;
            }
        }
        _ => {}
    }
    hovered
}

/// Tooltip slot state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub content: Option<TooltipContent>,
}

/// Pointer tracking for one mounted chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerState {
    cursor: Option<(f64, f64)>,
    hovered: Option<usize>,
    tooltip: TooltipState,
}

impl PointerState {
    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Updates hover and tooltip; returns whether the hovered target changed.
    pub fn on_pointer_move(&mut self, targets: &[HoverTarget], x: f64, y: f64) -> bool {
        self.cursor = Some((x, y));
        let hit = hit_test_hovered(targets, self.hovered, x, y);
        let changed = hit != self.hovered;
        self.hovered = hit;

        match hit.and_then(|index| targets[index].tooltip.clone()) {
            Some(content) => {
                self.tooltip.visible = true;
                self.tooltip.left = x + TOOLTIP_OFFSET_X;
                self.tooltip.top = y + TOOLTIP_OFFSET_Y;
                self.tooltip.content = Some(content);
            }
            None => self.tooltip.visible = false,
        }
        changed
    }

    /// Hides the tooltip; returns whether a target was hovered.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.cursor = None;
        self.tooltip.visible = false;
        self.hovered.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use crate::render::{CirclePrimitive, RectPrimitive, palette};

    fn marker_target(cx: f64, element: ElementRef) -> HoverTarget {
        HoverTarget {
            shape: HitShape::Circle {
                cx,
                cy: 10.0,
                radius: MARKER_HOVER_RADIUS,
            },
            element,
            effect: HoverEffect::grow_marker(),
            tooltip: Some(TooltipContent::new("2024-01-01", vec!["Value: 3".to_owned()])),
        }
    }

    #[test]
    fn last_overlapping_target_wins() {
        let targets = vec![
            marker_target(10.0, ElementRef::Circle(0)),
            marker_target(12.0, ElementRef::Circle(1)),
        ];
        assert_eq!(hit_test(&targets, 11.0, 10.0), Some(1));
        assert_eq!(hit_test(&targets, 100.0, 10.0), None);
    }

    #[test]
    fn tooltip_follows_pointer_with_offset() {
        let targets = vec![marker_target(10.0, ElementRef::Circle(0))];
        let mut pointer = PointerState::default();
        assert!(pointer.on_pointer_move(&targets, 11.0, 9.0));
        assert!(pointer.tooltip().visible);
        assert_eq!(pointer.tooltip().left, 21.0);
        assert_eq!(pointer.tooltip().top, -1.0);
        assert!(!pointer.on_pointer_move(&targets, 10.0, 10.0));
        assert!(pointer.on_pointer_leave());
        assert!(!pointer.tooltip().visible);
    }

    #[test]
    fn hover_effects_touch_only_the_target() {
        let mut frame = RenderFrame::new(Viewport::new(100.0, 100.0));
        let rect = frame.push_rect(RectPrimitive::new(
            RectGeometry::new(0.0, 0.0, 10.0, 10.0),
            palette::PRIMARY,
        ));
        frame.push_circle(CirclePrimitive::new(10.0, 10.0, MARKER_RADIUS, palette::PRIMARY));

        let swap = HoverTarget {
            shape: HitShape::Rect(RectGeometry::new(0.0, 0.0, 10.0, 10.0)),
            element: rect,
            effect: HoverEffect::SwapFill {
                base: palette::PRIMARY,
                hover: palette::PRIMARY_DARK,
            },
            tooltip: None,
        };
        let hovered = apply_hover(&frame, &swap);
        assert_eq!(hovered.rects[0].fill, palette::PRIMARY_DARK);
        assert_eq!(hovered.circles[0].radius, MARKER_RADIUS);

        let grown = apply_hover(&frame, &marker_target(10.0, ElementRef::Circle(0)));
        assert_eq!(grown.circles[0].radius, MARKER_HOVER_RADIUS);
    }

    #[test]
    fn enlarged_sector_keeps_its_hover() {
        let arc = ArcGeometry {
            cx: 0.0,
            cy: 0.0,
            inner_radius: 0.0,
            outer_radius: 100.0,
            start_angle: 0.0,
            end_angle: std::f64::consts::PI,
        };
        let targets = vec![HoverTarget {
            shape: HitShape::Sector(arc),
            element: ElementRef::Path(0),
            effect: HoverEffect::enlarge_arc(),
            tooltip: Some(TooltipContent::new("A", vec!["1 (100.0%)".to_owned()])),
        }];
        let mut pointer = PointerState::default();
        assert!(!pointer.on_pointer_move(&targets, 103.0, 0.0));
        assert_eq!(pointer.hovered(), None);

        assert!(pointer.on_pointer_move(&targets, 95.0, 0.0));
        assert!(!pointer.on_pointer_move(&targets, 103.0, 0.0));
        assert_eq!(pointer.hovered(), Some(0));
        assert!(pointer.tooltip().visible);

        assert!(pointer.on_pointer_move(&targets, 106.0, 0.0));
        assert_eq!(pointer.hovered(), None);
    }

    #[test]
    fn tooltip_html_is_escaped() {
        let content = TooltipContent::new("<b>", vec!["1 & 2".to_owned()]);
        assert_eq!(content.to_html(), "<strong>&lt;b&gt;</strong><br/>1 &amp; 2");
    }
}

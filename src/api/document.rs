use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use super::{ChartOutput, ChartScene, LegendEntry, NoDataNotice, show_no_data};
use crate::core::{LayoutBox, Viewport, responsive_size};
use crate::interaction::{PointerState, TooltipState, apply_hover};
use crate::render::{RenderFrame, Renderer, SvgRenderer, escape_markup};
use crate::table::Table;

/// What a mount point currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MountContent {
    #[default]
    Empty,
    Chart(MountedChart),
    Notice(NoDataNotice),
    Legend(Vec<LegendEntry>),
    Tooltip(TooltipState),
}

/// A chart scene together with its live pointer state.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedChart {
    scene: ChartScene,
    displayed: RenderFrame,
    pointer: PointerState,
}

impl MountedChart {
    #[must_use]
    pub fn new(scene: ChartScene) -> Self {
        Self {
            displayed: scene.frame.clone(),
            scene,
            pointer: PointerState::default(),
        }
    }

    #[must_use]
    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    /// Frame currently on screen, with any hover effect applied.
    #[must_use]
    pub fn displayed_frame(&self) -> &RenderFrame {
        &self.displayed
    }

    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    fn refresh_displayed(&mut self) {
        self.displayed = match self.pointer.hovered() {
            Some(index) => match self.scene.hover_targets.get(index) {
                Some(target) => apply_hover(&self.scene.frame, target),
                None => self.scene.frame.clone(),
            },
            None => self.scene.frame.clone(),
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MountPoint {
    pub layout: LayoutBox,
    pub content: MountContent,
}

/// In-memory stand-in for the host page: named mount points and tables.
#[derive(Debug, Clone, Default)]
pub struct Document {
    mounts: IndexMap<String, MountPoint>,
    tables: IndexMap<String, Table>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or re-measures) an empty mount point.
    pub fn add_mount(&mut self, id: impl Into<String>, layout: LayoutBox) -> &mut Self {
        self.mounts.insert(
            id.into(),
            MountPoint {
                layout,
                content: MountContent::Empty,
            },
        );
        self
    }

    #[must_use]
    pub fn with_mount(mut self, id: impl Into<String>, layout: LayoutBox) -> Self {
        self.add_mount(id, layout);
        self
    }

    pub fn remove_mount(&mut self, id: &str) -> Option<MountPoint> {
        self.mounts.shift_remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.mounts.contains_key(id)
    }

    #[must_use]
    pub fn mount(&self, id: &str) -> Option<&MountPoint> {
        self.mounts.get(id)
    }

    #[must_use]
    pub fn content(&self, id: &str) -> Option<&MountContent> {
        self.mounts.get(id).map(|mount| &mount.content)
    }

    #[must_use]
    pub fn mounted_chart(&self, id: &str) -> Option<&MountedChart> {
        match self.content(id)? {
            MountContent::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    #[must_use]
    pub fn mount_ids(&self) -> impl Iterator<Item = &str> {
        self.mounts.keys().map(String::as_str)
    }

    /// Chart size for mount point `id`, derived from its measured box.
    #[must_use]
    pub fn chart_viewport(&self, id: &str) -> Option<Viewport> {
        self.mounts.get(id).map(|mount| responsive_size(mount.layout))
    }

    /// Replaces the content of `id`; returns `false` when it is not mounted.
    pub fn set_content(&mut self, id: &str, content: MountContent) -> bool {
        match self.mounts.get_mut(id) {
            Some(mount) => {
                mount.content = content;
                true
            }
            None => false,
        }
    }

    /// Apply phase shared by all chart kinds.
    ///
    /// Replaces whatever `id` showed before, which also drops any transition
    /// still declared by the previous frame.
    pub(crate) fn apply_output(&mut self, id: &str, output: ChartOutput, with_tooltip: bool) {
        let mut scene = match output {
            ChartOutput::Placeholder(notice) => {
                show_no_data(self, id, Some(&notice.message));
                return;
            }
            ChartOutput::Chart(scene) => scene,
        };
        if let Err(err) = scene.frame.validate() {
            warn!(id, error = %err, "discarding invalid chart frame");
            show_no_data(self, id, None);
            return;
        }

        if let Some(entries) = scene.legend.take() {
            let legend_id = legend_id(id);
            if self.set_content(&legend_id, MountContent::Legend(entries)) {
                trace!(id = %legend_id, "legend mounted");
            }
        }
        if with_tooltip {
            let tooltip_id = tooltip_id(id);
            if !self.contains(&tooltip_id) {
                self.add_mount(tooltip_id.clone(), LayoutBox::new(0.0, 0.0));
            }
            self.set_content(&tooltip_id, MountContent::Tooltip(TooltipState::default()));
        }
        debug!(
            id,
            hover_targets = scene.hover_targets.len(),
            "chart mounted"
        );
        self.set_content(id, MountContent::Chart(MountedChart::new(scene)));
    }

    /// Dispatches a pointer move to the chart at `id`.
    ///
    /// Returns whether the hovered element changed.
    pub fn pointer_move(&mut self, id: &str, x: f64, y: f64) -> bool {
        let Some(MountContent::Chart(chart)) = self.mounts.get_mut(id).map(|mount| &mut mount.content)
        else {
            trace!(id, "pointer move outside a mounted chart");
            return false;
        };
        let changed = chart
            .pointer
            .on_pointer_move(&chart.scene.hover_targets, x, y);
        if changed {
            chart.refresh_displayed();
        }
        let tooltip = chart.pointer.tooltip().clone();
        self.update_tooltip(id, tooltip);
        changed
    }

    /// Dispatches a pointer leave to the chart at `id`.
    pub fn pointer_leave(&mut self, id: &str) -> bool {
        let Some(MountContent::Chart(chart)) = self.mounts.get_mut(id).map(|mount| &mut mount.content)
        else {
            return false;
        };
        let changed = chart.pointer.on_pointer_leave();
        if changed {
            chart.refresh_displayed();
        }
        let tooltip = chart.pointer.tooltip().clone();
        self.update_tooltip(id, tooltip);
        changed
    }

    fn update_tooltip(&mut self, chart_id: &str, state: TooltipState) {
        let tooltip_id = tooltip_id(chart_id);
        if let Some(mount) = self.mounts.get_mut(&tooltip_id) {
            if matches!(mount.content, MountContent::Tooltip(_)) {
                mount.content = MountContent::Tooltip(state);
            }
        }
    }

    /// Markup for the current content of `id`.
    #[must_use]
    pub fn mount_html(&self, id: &str) -> Option<String> {
        let mount = self.mounts.get(id)?;
        let html = match &mount.content {
            MountContent::Empty => String::new(),
            MountContent::Notice(notice) => notice.to_html(),
            MountContent::Legend(entries) => entries.iter().map(LegendEntry::to_html).collect(),
            MountContent::Tooltip(state) => tooltip_html(id, state),
            MountContent::Chart(chart) => {
                let mut renderer = SvgRenderer::new();
                match renderer.render(chart.displayed_frame()) {
                    Ok(()) => renderer.into_markup(),
                    Err(err) => {
                        warn!(id, error = %err, "chart frame failed to render");
                        String::new()
                    }
                }
            }
        };
        Some(html)
    }

    pub fn add_table(&mut self, table: Table) -> &mut Self {
        self.tables.insert(table.id.clone(), table);
        self
    }

    #[must_use]
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.get(id)
    }

    pub fn table_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.tables.get_mut(id)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }
}

#[must_use]
pub fn legend_id(chart_id: &str) -> String {
    format!("{chart_id}-legend")
}

#[must_use]
pub fn tooltip_id(chart_id: &str) -> String {
    format!("{chart_id}-tooltip")
}

fn tooltip_html(id: &str, state: &TooltipState) -> String {
    let body = state
        .content
        .as_ref()
        .map(|content| content.to_html())
        .unwrap_or_default();
    if state.visible {
        format!(
            "<div id=\"{}\" class=\"chart-tooltip\" style=\"display: block; left: {}px; top: {}px\">{body}</div>",
            escape_markup(id),
            crate::render::num(state.left),
            crate::render::num(state.top)
        )
    } else {
        format!(
            "<div id=\"{}\" class=\"chart-tooltip\" style=\"display: none\">{body}</div>",
            escape_markup(id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_content_on_missing_mount_is_rejected() {
        let mut document = Document::new();
        assert!(!document.set_content("nowhere", MountContent::Empty));
        assert_eq!(document.mount_html("nowhere"), None);
    }

    #[test]
    fn viewport_follows_responsive_sizing() {
        let document = Document::new().with_mount("chart", LayoutBox::new(150.0, 80.0));
        assert_eq!(document.chart_viewport("chart"), Some(Viewport::new(200.0, 200.0)));
    }

    #[test]
    fn hidden_tooltip_markup() {
        let html = tooltip_html("c-tooltip", &TooltipState::default());
        assert_eq!(html, "<div id=\"c-tooltip\" class=\"chart-tooltip\" style=\"display: none\"></div>");
    }
}

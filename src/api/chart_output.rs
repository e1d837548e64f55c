use serde::{Deserialize, Serialize};

use super::NoDataNotice;
use crate::interaction::HoverTarget;
use crate::render::{Color, RenderFrame, escape_markup};

/// Result of the pure build phase of a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Placeholder(NoDataNotice),
    Chart(ChartScene),
}

impl ChartOutput {
    #[must_use]
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self::Placeholder(NoDataNotice::new(message))
    }

    #[must_use]
    pub fn notice(&self) -> Option<&NoDataNotice> {
        match self {
            Self::Placeholder(notice) => Some(notice),
            Self::Chart(_) => None,
        }
    }

    #[must_use]
    pub fn scene(&self) -> Option<&ChartScene> {
        match self {
            Self::Chart(scene) => Some(scene),
            Self::Placeholder(_) => None,
        }
    }
}

/// Draw commands plus the interaction and legend data derived with them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub frame: RenderFrame,
    /// In paint order.
    pub hover_targets: Vec<HoverTarget>,
    pub legend: Option<Vec<LegendEntry>>,
}

impl ChartScene {
    #[must_use]
    pub fn new(frame: RenderFrame) -> Self {
        Self {
            frame,
            hover_targets: Vec::new(),
            legend: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    /// Already formatted for display.
    pub value: String,
    pub color: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"legend-item\"><span class=\"legend-color\" style=\"background-color: {}\"></span><span class=\"legend-label\">{} ({})</span></div>",
            self.color.to_hex(),
            escape_markup(&self.label),
            escape_markup(&self.value)
        )
    }
}

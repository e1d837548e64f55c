use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_DATE_FORMAT, GaugeThreshold, default_thresholds};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, palette};

/// Pie and donut chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieConfig {
    /// Mount point key; the legend goes to `{id}-legend`.
    pub id: String,
    #[serde(default = "default_colors")]
    pub colors: Vec<Color>,
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default)]
    pub donut: bool,
}

impl PieConfig {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            colors: default_colors(),
            show_labels: true,
            show_legend: true,
            donut: false,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub fn with_donut(mut self, donut: bool) -> Self {
        self.donut = donut;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        parse_config(input, "pie")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarConfig {
    pub id: String,
    #[serde(default = "default_bar_color")]
    pub bar_color: Color,
    #[serde(default = "default_hover_color")]
    pub hover_color: Color,
    #[serde(default)]
    pub horizontal: bool,
    #[serde(default = "default_true")]
    pub show_values: bool,
    #[serde(default = "default_true")]
    pub animate: bool,
}

impl BarConfig {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bar_color: default_bar_color(),
            hover_color: default_hover_color(),
            horizontal: false,
            show_values: true,
            animate: true,
        }
    }

    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    #[must_use]
    pub fn with_show_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        parse_config(input, "bar")
    }
}

/// Time-series line chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineConfig {
    pub id: String,
    /// strftime-style pattern for text dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default)]
    pub show_area: bool,
    #[serde(default = "default_true")]
    pub show_points: bool,
    #[serde(default = "default_true")]
    pub animate: bool,
    #[serde(default = "default_line_color")]
    pub color: Color,
}

impl LineConfig {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date_format: default_date_format(),
            show_grid: true,
            show_area: false,
            show_points: true,
            animate: true,
            color: default_line_color(),
        }
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn with_show_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_show_area(mut self, show: bool) -> Self {
        self.show_area = show;
        self
    }

    #[must_use]
    pub fn with_show_points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        parse_config(input, "line")
    }
}

/// Gauge options; the reading itself travels in the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeConfig {
    pub id: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub min: f64,
    #[serde(default = "default_gauge_max")]
    pub max: f64,
    /// Evaluated in list order; an empty list falls back to the defaults.
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<GaugeThreshold>,
    #[serde(default = "default_true")]
    pub animate: bool,
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl GaugeConfig {
    #[must_use]
    pub fn new(id: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            id: id.into(),
            value,
            min: 0.0,
            max: default_gauge_max(),
            thresholds: default_thresholds(),
            animate: true,
            unit: default_unit(),
        }
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Vec<GaugeThreshold>) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Thresholds actually used for colour selection.
    #[must_use]
    pub fn effective_thresholds(&self) -> Vec<GaugeThreshold> {
        if self.thresholds.is_empty() {
            default_thresholds()
        } else {
            self.thresholds.clone()
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        parse_config(input, "gauge")
    }
}

fn parse_config<T: for<'de> Deserialize<'de>>(input: &str, kind: &str) -> ChartResult<T> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidConfig(format!("failed to parse {kind} config: {e}")))
}

fn default_true() -> bool {
    true
}

fn default_colors() -> Vec<Color> {
    palette::CATEGORICAL.to_vec()
}

fn default_bar_color() -> Color {
    palette::PRIMARY
}

fn default_hover_color() -> Color {
    palette::PRIMARY_DARK
}

fn default_line_color() -> Color {
    palette::PRIMARY
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_owned()
}

fn default_gauge_max() -> f64 {
    100.0
}

fn default_unit() -> String {
    "%".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_keys_and_defaults() {
        let config = BarConfig::from_json_str(
            r##"{"id":"events","horizontal":true,"showValues":false,"barColor":"#22c55e"}"##,
        )
        .expect("bar config");
        assert!(config.horizontal);
        assert!(!config.show_values);
        assert!(config.animate);
        assert_eq!(config.bar_color, palette::SUCCESS);
        assert_eq!(config.hover_color, palette::PRIMARY_DARK);
    }

    #[test]
    fn gauge_defaults_match_builder() {
        let parsed = GaugeConfig::from_json_str(r#"{"id":"g","value":42}"#).expect("gauge config");
        assert_eq!(parsed, GaugeConfig::new("g", Some(42.0)));
    }

    #[test]
    fn missing_id_is_a_config_error() {
        let err = PieConfig::from_json_str("{}").expect_err("id is required");
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }

    #[test]
    fn empty_thresholds_fall_back_to_defaults() {
        let config = GaugeConfig::new("g", Some(1.0)).with_thresholds(Vec::new());
        assert_eq!(config.effective_thresholds(), default_thresholds());
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::date::DateInput;

/// Pixel size of one chart drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Measured on-screen box of a mount point at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Plot margins in pixels, CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Plot area left after subtracting the margins, never negative.
    #[must_use]
    pub fn inner_size(self, viewport: Viewport) -> (f64, f64) {
        (
            (viewport.width - self.left - self.right).max(0.0),
            (viewport.height - self.top - self.bottom).max(0.0),
        )
    }
}

/// One labelled value of a pie or bar chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryDatum {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl CategoryDatum {
    #[must_use]
    pub fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Value when present and finite.
    #[must_use]
    pub fn finite_value(&self) -> Option<f64> {
        self.value.filter(|value| value.is_finite())
    }
}

/// One sample of a line chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeriesDatum {
    #[serde(default)]
    pub date: Option<DateInput>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl TimeSeriesDatum {
    #[must_use]
    pub fn new(date: impl Into<DateInput>, value: Option<f64>) -> Self {
        Self {
            date: Some(date.into()),
            value,
        }
    }

    #[must_use]
    pub fn finite_value(&self) -> Option<f64> {
        self.value.filter(|value| value.is_finite())
    }

    /// A date that is present and non-empty.
    #[must_use]
    pub fn present_date(&self) -> Option<&DateInput> {
        self.date.as_ref().filter(|date| !date.is_blank())
    }
}

/// Converts an untrusted JSON payload into category data.
///
/// Returns `None` when the payload is not an array. Entries that are not
/// objects, or whose value is not a number, keep their slot with no value so
/// the chart guardrails see them.
#[must_use]
pub fn category_data_from_json(payload: &Value) -> Option<Vec<CategoryDatum>> {
    let entries = payload.as_array()?;
    Some(
        entries
            .iter()
            .map(|entry| CategoryDatum {
                label: entry.get("label").map(json_label).unwrap_or_default(),
                value: entry.get("value").and_then(Value::as_f64),
            })
            .collect(),
    )
}

/// Converts an untrusted JSON payload into time-series data.
///
/// Numeric dates are taken as millisecond timestamps.
#[must_use]
pub fn time_series_from_json(payload: &Value) -> Option<Vec<TimeSeriesDatum>> {
    let entries = payload.as_array()?;
    Some(
        entries
            .iter()
            .map(|entry| TimeSeriesDatum {
                date: entry.get("date").and_then(|date| match date {
                    Value::String(text) => Some(DateInput::Text(text.clone())),
                    Value::Number(number) => number.as_i64().map(DateInput::Timestamp),
                    _ => None,
                }),
                value: entry.get("value").and_then(Value::as_f64),
            })
            .collect(),
    )
}

fn json_label(label: &Value) -> String {
    match label {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Ordinal scale that splits a pixel range into equal bands, one per
/// distinct category in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl BandScale {
    /// Builds a band scale with the same inner and outer `padding`.
    pub fn new<'a>(
        labels: impl IntoIterator<Item = &'a str>,
        range: (f64, f64),
        padding: f64,
    ) -> ChartResult<Self> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() {
            return Err(ChartError::InvalidData(
                "band padding must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain: labels.into_iter().map(str::to_owned).collect(),
            range_start: range.0,
            range_end: range.1,
            padding_inner: padding.clamp(0.0, 1.0),
            padding_outer: padding.max(0.0),
            align: 0.5,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Distance between the starts of two adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        let (start, stop) = self.ordered_range();
        (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start pixel of the band for `label`, `None` for unknown labels.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f64> {
        let index = self.domain.get_index_of(label)?;
        let n = self.domain.len();
        let step = self.step();
        let (start, stop) = self.ordered_range();
        let first = start + (stop - start - step * (n as f64 - self.padding_inner)) * self.align;

        let slot = if self.range_end < self.range_start {
            n - 1 - index
        } else {
            index
        };
        Some(first + step * slot as f64)
    }

    /// Center pixel of the band for `label`.
    #[must_use]
    pub fn center(&self, label: &str) -> Option<f64> {
        self.position(label).map(|start| start + self.bandwidth() / 2.0)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    fn ordered_range(&self) -> (f64, f64) {
        if self.range_end < self.range_start {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        }
    }
}

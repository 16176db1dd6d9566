use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Read-only capability mapping a category name to the start of its pixel band.
pub trait CategoryAxis {
    fn category_to_pixel(&self, name: &str) -> ChartResult<f64>;

    /// Pixel width allocated to every category.
    fn bandwidth(&self) -> f64;
}

/// Discrete scale allocating each category an equal-width band.
///
/// Layout rules:
/// - `step = span / max(1, n - padding_inner + 2 * padding_outer)`
/// - the leftover space is distributed according to `align` (0 = start, 1 = end)
/// - `bandwidth = step * (1 - padding_inner)`
/// - with `round` enabled, `step` is floored and start/bandwidth are rounded
/// - an inverted range (`range_start > range_end`) reverses band order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BandScaleFields")]
pub struct BandScale {
    categories: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
}

#[derive(Deserialize)]
struct BandScaleFields {
    categories: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    #[serde(default)]
    padding_inner: f64,
    #[serde(default)]
    padding_outer: f64,
    #[serde(default = "default_align")]
    align: f64,
    #[serde(default)]
    round: bool,
}

fn default_align() -> f64 {
    0.5
}

impl TryFrom<BandScaleFields> for BandScale {
    type Error = ChartError;

    fn try_from(fields: BandScaleFields) -> ChartResult<Self> {
        Ok(Self::new(fields.categories, fields.range_start, fields.range_end)?
            .with_padding_inner(fields.padding_inner)?
            .with_padding_outer(fields.padding_outer)?
            .with_align(fields.align)?
            .with_round(fields.round))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct BandLayout {
    start: f64,
    step: f64,
    bandwidth: f64,
    reverse: bool,
}

impl BandScale {
    /// Builds a band scale over `categories`; duplicates keep their first position.
    pub fn new<I, S>(categories: I, range_start: f64, range_end: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            categories: categories.into_iter().map(Into::into).collect(),
            range_start,
            range_end,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: default_align(),
            round: false,
        })
    }

    /// Sets inner and outer padding to the same ratio.
    pub fn with_padding(self, padding: f64) -> ChartResult<Self> {
        self.with_padding_inner(padding)?.with_padding_outer(padding)
    }

    pub fn with_padding_inner(mut self, padding_inner: f64) -> ChartResult<Self> {
        if !padding_inner.is_finite() || !(0.0..=1.0).contains(&padding_inner) {
            return Err(ChartError::InvalidData(
                "band inner padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.padding_inner = padding_inner;
        Ok(self)
    }

    pub fn with_padding_outer(mut self, padding_outer: f64) -> ChartResult<Self> {
        if !padding_outer.is_finite() || padding_outer < 0.0 {
            return Err(ChartError::InvalidData(
                "band outer padding must be finite and >= 0".to_owned(),
            ));
        }
        self.padding_outer = padding_outer;
        Ok(self)
    }

    pub fn with_align(mut self, align: f64) -> ChartResult<Self> {
        if !align.is_finite() || !(0.0..=1.0).contains(&align) {
            return Err(ChartError::InvalidData(
                "band align must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.align = align;
        Ok(self)
    }

    #[must_use]
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Distance between the starts of two adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.layout().step
    }

    fn layout(&self) -> BandLayout {
        let n = self.categories.len() as f64;
        let reverse = self.range_end < self.range_start;
        let (mut start, stop) = if reverse {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        };

        let mut step = (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        if self.round {
            step = step.floor();
        }
        start += (stop - start - step * (n - self.padding_inner)) * self.align;
        let mut bandwidth = step * (1.0 - self.padding_inner);
        if self.round {
            start = start.round();
            bandwidth = bandwidth.round();
        }

        BandLayout {
            start,
            step,
            bandwidth,
            reverse,
        }
    }
}

impl CategoryAxis for BandScale {
    fn category_to_pixel(&self, name: &str) -> ChartResult<f64> {
        let index = self
            .categories
            .get_index_of(name)
            .ok_or_else(|| ChartError::UnknownCategory(name.to_owned()))?;
        let layout = self.layout();
        let slot = if layout.reverse {
            self.categories.len() - 1 - index
        } else {
            index
        };
        Ok(layout.start + layout.step * slot as f64)
    }

    fn bandwidth(&self) -> f64 {
        self.layout().bandwidth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_layout_floors_step_and_centers_leftover() {
        let scale = BandScale::new(["a", "b", "c"], 0.0, 100.0)
            .expect("scale")
            .with_round(true);
        // step = floor(100 / 3) = 33, leftover = 1, start = round(0.5) = 1
        assert_eq!(scale.step(), 33.0);
        assert_eq!(scale.category_to_pixel("a").expect("a"), 1.0);
        assert_eq!(scale.category_to_pixel("c").expect("c"), 67.0);
    }
}

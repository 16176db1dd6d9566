use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Lower quartile, median and upper quartile of one box group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    #[must_use]
    pub fn as_array(self) -> [f64; 3] {
        [self.q1, self.median, self.q3]
    }
}

/// Minimum and maximum observed value of one box group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhiskerExtent {
    pub min: f64,
    pub max: f64,
}

impl WhiskerExtent {
    /// Builds a validated extent.
    ///
    /// Invariants:
    /// - both bounds are finite
    /// - `min <= max`
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "whisker bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(
                "whisker min must be <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }
}

/// Interpolated quantile over an ascending slice.
///
/// For probability `p` the rank is `p * (n - 1)`; the result interpolates
/// linearly between the order statistics on either side of that rank.
/// Returns `None` for empty input or a probability outside `[0, 1]`.
#[must_use]
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let rank = p * (sorted.len() - 1) as f64;
    let lower_index = rank.floor() as usize;
    let upper_index = rank.ceil() as usize;
    let lower = sorted[lower_index];
    let upper = sorted[upper_index];
    Some(lower + (rank - rank.floor()) * (upper - lower))
}

/// Sorted copy of `values`; the input is left untouched.
#[must_use]
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by_key(|value| OrderedFloat(*value));
    sorted
}

/// Computes the 25th, 50th and 75th percentile. `None` when `values` is empty.
#[must_use]
pub fn box_quartiles(values: &[f64]) -> Option<Quartiles> {
    let sorted = sorted_copy(values);
    quartiles_of_sorted(&sorted)
}

pub(crate) fn quartiles_of_sorted(sorted: &[f64]) -> Option<Quartiles> {
    Some(Quartiles {
        q1: quantile_sorted(sorted, 0.25)?,
        median: quantile_sorted(sorted, 0.5)?,
        q3: quantile_sorted(sorted, 0.75)?,
    })
}

/// Computes the whisker extent. `None` when `values` is empty.
#[must_use]
pub fn box_extent(values: &[f64]) -> Option<WhiskerExtent> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    Some(WhiskerExtent { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_between_order_statistics() {
        let sorted = [1.0, 2.0, 4.0, 8.0];
        // rank = 0.5 * 3 = 1.5 -> halfway between 2 and 4
        assert_eq!(quantile_sorted(&sorted, 0.5), Some(3.0));
        assert_eq!(quantile_sorted(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(8.0));
    }

    #[test]
    fn quantile_rejects_out_of_range_probability() {
        assert_eq!(quantile_sorted(&[1.0], 1.5), None);
        assert_eq!(quantile_sorted(&[1.0], f64::NAN), None);
    }
}

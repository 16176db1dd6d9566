use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Read-only capability mapping a continuous value to a pixel coordinate.
pub trait ValueAxis {
    fn value_to_pixel(&self, value: f64) -> ChartResult<f64>;
}

/// Continuous scale mapping `[domain_start, domain_end]` onto
/// `[range_start, range_end]` pixels.
///
/// Ranges may be inverted (`range_start > range_end`), which is the usual
/// setup for a vertical value axis where larger values sit higher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinearScaleFields")]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

#[derive(Deserialize)]
struct LinearScaleFields {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl TryFrom<LinearScaleFields> for LinearScale {
    type Error = ChartError;

    fn try_from(fields: LinearScaleFields) -> ChartResult<Self> {
        Self::new(
            fields.domain_start,
            fields.domain_end,
            fields.range_start,
            fields.range_end,
        )
    }
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a zero-width range".to_owned(),
            ));
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

impl ValueAxis for LinearScale {
    fn value_to_pixel(&self, value: f64) -> ChartResult<f64> {
        self.domain_to_pixel(value)
    }
}

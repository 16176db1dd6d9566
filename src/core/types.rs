use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{coerce_text_to_f64, datetime_to_unix_millis, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Raw observation value as supplied by the host.
///
/// Dates take part in ordering and interpolation through their unix timestamp
/// in milliseconds. Text is coerced loosely and may end up as NaN.
///
/// On the wire a value is a JSON number, an RFC 3339 date string or any other
/// string, tried in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Number(f64),
    Date(DateTime<Utc>),
    Text(String),
}

impl SampleValue {
    /// Numeric view of the value. Never fails; malformed input yields NaN.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Date(time) => datetime_to_unix_millis(*time),
            Self::Text(text) => coerce_text_to_f64(text),
        }
    }
}

impl fmt::Display for SampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Date(time) => write!(f, "{}", time.to_rfc3339()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for SampleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for SampleValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl TryFrom<Decimal> for SampleValue {
    type Error = ChartError;

    fn try_from(value: Decimal) -> ChartResult<Self> {
        decimal_to_f64(value, "sample value").map(Self::Number)
    }
}

/// One observation inside a box group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub name: String,
    pub value: SampleValue,
}

impl Sample {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<SampleValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Named collection of samples. One group produces exactly one box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub name: String,
    pub series: Vec<Sample>,
}

impl SeriesGroup {
    #[must_use]
    pub fn new(name: impl Into<String>, series: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            series,
        }
    }

    /// Builds a group from plain numbers, naming samples by their index.
    #[must_use]
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        let series = values
            .iter()
            .enumerate()
            .map(|(index, value)| Sample::new(index.to_string(), *value))
            .collect();
        Self::new(name, series)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Coerces every sample to `f64`, rejecting the first non-finite one.
    pub fn numeric_values(&self) -> ChartResult<Vec<f64>> {
        let mut values = Vec::with_capacity(self.series.len());
        for (index, sample) in self.series.iter().enumerate() {
            let value = sample.value.to_f64();
            if !value.is_finite() {
                return Err(ChartError::InvalidSample {
                    group: self.name.clone(),
                    index,
                    value: sample.value.to_string(),
                });
            }
            values.push(value);
        }
        Ok(values)
    }
}

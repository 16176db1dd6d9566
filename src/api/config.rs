use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::LabelLocale;

/// Presentation settings for one box series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSeriesConfig {
    /// Outline color of the box and color of the whisker/marker lines.
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub locale: LabelLocale,
    /// Snap the band width to whole pixels before laying out the box.
    #[serde(default = "default_round_box_width")]
    pub round_box_width: bool,
}

fn default_stroke_color() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_round_box_width() -> bool {
    true
}

impl Default for BoxSeriesConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            locale: LabelLocale::default(),
            round_box_width: default_round_box_width(),
        }
    }
}

impl BoxSeriesConfig {
    #[must_use]
    pub fn with_stroke(mut self, stroke_color: Color, stroke_width: f64) -> Self {
        self.stroke_color = stroke_color;
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_round_box_width(mut self, round_box_width: bool) -> Self {
        self.round_box_width = round_box_width;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_color.validate()?;
        Ok(self)
    }

    /// Parses and validates a JSON config; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse box series config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize box series config: {e}"))
        })
    }
}

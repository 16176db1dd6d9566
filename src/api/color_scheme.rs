use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Read-only capability resolving the fill color of a category.
pub trait ColorLookup {
    fn color_for(&self, name: &str) -> Color;
}

/// Built-in ordinal palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorPalette {
    #[default]
    Vivid,
    Cool,
}

impl ColorPalette {
    #[must_use]
    pub fn hex_colors(self) -> &'static [&'static str] {
        match self {
            Self::Vivid => &[
                "#647c8a", "#3f51b5", "#2196f3", "#00b862", "#afdf0a", "#a7b61a", "#f3e562",
                "#ff9800", "#ff5722", "#ff4514",
            ],
            Self::Cool => &[
                "#a8385d", "#7aa3e5", "#a27ea8", "#aae3f5", "#adcded", "#a95963", "#8796c0",
                "#7ed3ed", "#50abcc", "#ad6886",
            ],
        }
    }

    pub fn colors(self) -> ChartResult<Vec<Color>> {
        self.hex_colors().iter().map(|hex| Color::from_hex(hex)).collect()
    }
}

/// Ordinal color scheme: the n-th category in `domain` gets the n-th palette
/// entry, wrapping around when the domain is longer than the palette.
///
/// Names outside the domain resolve to `fallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrdinalColorSchemeFields")]
pub struct OrdinalColorScheme {
    domain: IndexSet<String>,
    colors: Vec<Color>,
    fallback: Color,
}

/// Unchecked wire form; deserialized schemes go through `OrdinalColorScheme::new`.
#[derive(Deserialize)]
struct OrdinalColorSchemeFields {
    domain: IndexSet<String>,
    colors: Vec<Color>,
    fallback: Option<Color>,
}

impl TryFrom<OrdinalColorSchemeFields> for OrdinalColorScheme {
    type Error = ChartError;

    fn try_from(fields: OrdinalColorSchemeFields) -> ChartResult<Self> {
        let scheme = Self::new(fields.domain, fields.colors)?;
        match fields.fallback {
            Some(fallback) => scheme.with_fallback(fallback),
            None => Ok(scheme),
        }
    }
}

impl OrdinalColorScheme {
    pub fn new<I, S>(domain: I, colors: Vec<Color>) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(first) = colors.first().copied() else {
            return Err(ChartError::InvalidData(
                "color scheme needs at least one color".to_owned(),
            ));
        };
        for color in &colors {
            color.validate()?;
        }

        Ok(Self {
            domain: domain.into_iter().map(Into::into).collect(),
            colors,
            fallback: first,
        })
    }

    pub fn from_palette<I, S>(domain: I, palette: ColorPalette) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(domain, palette.colors()?)
    }

    pub fn with_fallback(mut self, fallback: Color) -> ChartResult<Self> {
        fallback.validate()?;
        self.fallback = fallback;
        Ok(self)
    }
}

impl ColorLookup for OrdinalColorScheme {
    fn color_for(&self, name: &str) -> Color {
        self.domain
            .get_index_of(name)
            .map_or(self.fallback, |index| self.colors[index % self.colors.len()])
    }
}

/// Same color for every category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedColor(pub Color);

impl ColorLookup for FixedColor {
    fn color_for(&self, _name: &str) -> Color {
        self.0
    }
}

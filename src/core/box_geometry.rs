use serde::{Deserialize, Serialize};

use crate::core::{CategoryAxis, Quartiles, ValueAxis, WhiskerExtent};
use crate::error::{ChartError, ChartResult};

/// Pixel-space point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Pixel-space segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSegment {
    pub v1: PixelPoint,
    pub v2: PixelPoint,
}

impl PixelSegment {
    #[must_use]
    pub fn horizontal(x1: f64, x2: f64, y: f64) -> Self {
        Self {
            v1: PixelPoint { x: x1, y },
            v2: PixelPoint { x: x2, y },
        }
    }
}

/// Projected box-and-whisker geometry in pixel coordinates.
///
/// `x` is the left edge of the category band and the rectangle spans the full
/// `width`, so its horizontal center coincides with the whisker line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical whisker line as `[x1, y1, x2, y2]`, from the low to the high whisker.
    pub line_coordinates: [f64; 4],
    /// Low whisker cap, median line and high whisker cap, in that order.
    pub horizontal_lines: [PixelSegment; 3],
}

impl BoxGeometry {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.line_coordinates[0]
    }

    #[must_use]
    pub fn low_whisker_line(&self) -> PixelSegment {
        self.horizontal_lines[0]
    }

    #[must_use]
    pub fn median_line(&self) -> PixelSegment {
        self.horizontal_lines[1]
    }

    #[must_use]
    pub fn high_whisker_line(&self) -> PixelSegment {
        self.horizontal_lines[2]
    }
}

/// Resolves the box width for a group with `sample_count` samples.
///
/// Returns `None` for empty groups: there is nothing to draw and every
/// downstream coordinate would be meaningless.
#[must_use]
pub fn resolve_box_width(
    sample_count: usize,
    category_axis: &(impl CategoryAxis + ?Sized),
    round_to_pixel: bool,
) -> Option<f64> {
    if sample_count == 0 {
        return None;
    }
    let bandwidth = category_axis.bandwidth();
    if round_to_pixel {
        Some(bandwidth.round())
    } else {
        Some(bandwidth)
    }
}

/// Vertical whisker line centered on the category band.
pub fn whisker_line_coordinates(
    name: &str,
    extent: WhiskerExtent,
    width: f64,
    category_axis: &(impl CategoryAxis + ?Sized),
    value_axis: &(impl ValueAxis + ?Sized),
) -> ChartResult<[f64; 4]> {
    let center_x = category_axis.category_to_pixel(name)? + width / 2.0;
    let y1 = value_axis.value_to_pixel(extent.min)?;
    let y2 = value_axis.value_to_pixel(extent.max)?;
    Ok([center_x, y1, center_x, y2])
}

/// Low whisker cap, median line and high whisker cap, each one box wide.
pub fn horizontal_lines(
    name: &str,
    extent: WhiskerExtent,
    quartiles: Quartiles,
    width: f64,
    category_axis: &(impl CategoryAxis + ?Sized),
    value_axis: &(impl ValueAxis + ?Sized),
) -> ChartResult<[PixelSegment; 3]> {
    let center_x = category_axis.category_to_pixel(name)? + width / 2.0;
    let right = center_x + width / 2.0;
    let left = center_x - width / 2.0;

    Ok([
        PixelSegment::horizontal(right, left, value_axis.value_to_pixel(extent.min)?),
        PixelSegment::horizontal(right, left, value_axis.value_to_pixel(quartiles.median)?),
        PixelSegment::horizontal(right, left, value_axis.value_to_pixel(extent.max)?),
    ])
}

/// Projects one group's statistics into deterministic box geometry.
///
/// The function is pure: identical inputs always produce identical output.
/// An inverted extent (`min > max`) is rejected.
pub fn project_box(
    name: &str,
    extent: WhiskerExtent,
    quartiles: Quartiles,
    width: f64,
    category_axis: &(impl CategoryAxis + ?Sized),
    value_axis: &(impl ValueAxis + ?Sized),
) -> ChartResult<BoxGeometry> {
    if !width.is_finite() || width < 0.0 {
        return Err(ChartError::InvalidData(
            "box width must be finite and >= 0".to_owned(),
        ));
    }
    let extent = WhiskerExtent::new(extent.min, extent.max)?;

    let line_coordinates =
        whisker_line_coordinates(name, extent, width, category_axis, value_axis)?;
    let horizontal_lines =
        horizontal_lines(name, extent, quartiles, width, category_axis, value_axis)?;

    let q1_y = value_axis.value_to_pixel(quartiles.q1)?;
    let q3_y = value_axis.value_to_pixel(quartiles.q3)?;

    Ok(BoxGeometry {
        x: category_axis.category_to_pixel(name)?,
        y: q3_y,
        width,
        height: (q1_y - q3_y).abs(),
        line_coordinates,
        horizontal_lines,
    })
}

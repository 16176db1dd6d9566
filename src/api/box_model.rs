use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::quantile::quartiles_of_sorted;
use crate::core::{
    BoxGeometry, CategoryAxis, PixelSegment, Quartiles, Sample, SeriesGroup, ValueAxis,
    WhiskerExtent, box_extent, project_box, resolve_box_width, sorted_copy,
};
use crate::error::ChartResult;
use crate::render::Color;

use super::{ColorLookup, LabelFormatter};

/// Complete render model of one box, rebuilt from scratch on every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxModel {
    /// Median of the group.
    pub value: f64,
    pub data: Vec<Sample>,
    pub label: String,
    pub formatted_label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub quartiles: Quartiles,
    pub extent: WhiskerExtent,
    pub line_coordinates: [f64; 4],
    pub horizontal_lines: [PixelSegment; 3],
    pub color: Color,
    pub aria_label: String,
}

/// Everything one box recomputation reads. Axes, colors and the formatter are
/// borrowed as read-only capabilities.
#[derive(Clone, Copy)]
pub struct BoxModelInputs<'a> {
    pub group: &'a SeriesGroup,
    pub category_axis: &'a dyn CategoryAxis,
    pub value_axis: &'a dyn ValueAxis,
    pub colors: &'a dyn ColorLookup,
    pub formatter: &'a dyn LabelFormatter,
    pub round_box_width: bool,
}

/// Merges statistics and geometry into the final model.
#[must_use]
pub fn build_box_model(
    group: &SeriesGroup,
    quartiles: Quartiles,
    extent: WhiskerExtent,
    geometry: BoxGeometry,
    colors: &(impl ColorLookup + ?Sized),
    formatter: &(impl LabelFormatter + ?Sized),
) -> BoxModel {
    let value = quartiles.median;
    let formatted_label = formatter.format_name(&group.name);
    let aria_label = format!(
        "{formatted_label} - Quantile 50%: {}",
        formatter.format_value(value)
    );

    BoxModel {
        value,
        data: group.series.clone(),
        label: group.name.clone(),
        formatted_label,
        x: geometry.x,
        y: geometry.y,
        width: geometry.width,
        height: geometry.height,
        quartiles,
        extent,
        line_coordinates: geometry.line_coordinates,
        horizontal_lines: geometry.horizontal_lines,
        color: colors.color_for(&group.name),
        aria_label,
    }
}

/// Recomputes one group's box model.
///
/// - `Ok(None)`: the group is empty and nothing should be drawn
/// - `Err(ChartError::InvalidSample { .. })`: a sample does not coerce to a finite number
/// - `Err(..)` from the axes, e.g. an unknown category
pub fn recompute(inputs: BoxModelInputs<'_>) -> ChartResult<Option<BoxModel>> {
    let group = inputs.group;
    let values = group.numeric_values()?;
    let Some(width) = resolve_box_width(values.len(), inputs.category_axis, inputs.round_box_width)
    else {
        trace!(group = %group.name, "empty box group, nothing to lay out");
        return Ok(None);
    };

    let sorted = sorted_copy(&values);
    let (Some(quartiles), Some(extent)) = (quartiles_of_sorted(&sorted), box_extent(&sorted))
    else {
        return Ok(None);
    };

    let geometry = project_box(
        &group.name,
        extent,
        quartiles,
        width,
        inputs.category_axis,
        inputs.value_axis,
    )?;
    let model = build_box_model(
        group,
        quartiles,
        extent,
        geometry,
        inputs.colors,
        inputs.formatter,
    );

    debug!(
        group = %group.name,
        x = model.x,
        y = model.y,
        q1 = quartiles.q1,
        median = quartiles.median,
        q3 = quartiles.q3,
        "recomputed box"
    );
    Ok(Some(model))
}

/// Recomputes many groups independently.
///
/// The output is index-aligned with `groups`. A group that fails is logged and
/// yields `None`; the remaining groups are unaffected.
pub fn recompute_groups<C, V, L, F>(
    groups: &[SeriesGroup],
    category_axis: &C,
    value_axis: &V,
    colors: &L,
    formatter: &F,
    round_box_width: bool,
) -> Vec<Option<BoxModel>>
where
    C: CategoryAxis + Sync,
    V: ValueAxis + Sync,
    L: ColorLookup + Sync,
    F: LabelFormatter + Sync,
{
    let recompute_one = |group: &SeriesGroup| {
        let inputs = BoxModelInputs {
            group,
            category_axis,
            value_axis,
            colors,
            formatter,
            round_box_width,
        };
        match recompute(inputs) {
            Ok(model) => model,
            Err(err) => {
                warn!(
                    group = %group.name,
                    error = %err,
                    "skipping box group with invalid input"
                );
                None
            }
        }
    };

    #[cfg(feature = "parallel-projection")]
    {
        groups.par_iter().map(recompute_one).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        groups.iter().map(recompute_one).collect()
    }
}

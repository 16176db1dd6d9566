use crate::core::Viewport;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame};

use super::{BoxModel, BoxSeriesConfig};

/// Materializes one box model as draw commands.
///
/// Order matters for painters: the filled rectangle comes first, then the
/// whisker line, then the low cap, median and high cap.
#[must_use]
pub fn build_box_render_frame(
    model: &BoxModel,
    viewport: Viewport,
    config: &BoxSeriesConfig,
) -> RenderFrame {
    let stroke_width = config.stroke_width;
    let stroke_color = config.stroke_color;

    let body = RectPrimitive::new(model.x, model.y, model.width, model.height, model.color)
        .with_border(stroke_width, stroke_color);
    let [x1, y1, x2, y2] = model.line_coordinates;

    let mut frame = RenderFrame::new(viewport)
        .with_rect(body)
        .with_line(LinePrimitive::new(x1, y1, x2, y2, stroke_width, stroke_color));
    for segment in model.horizontal_lines {
        frame = frame.with_line(LinePrimitive::new(
            segment.v1.x,
            segment.v1.y,
            segment.v2.x,
            segment.v2.y,
            stroke_width,
            stroke_color,
        ));
    }
    frame
}

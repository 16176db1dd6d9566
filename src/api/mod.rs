mod box_model;
mod box_render_frame_builder;
mod box_series;
mod color_scheme;
mod config;
mod label_format;

pub use box_model::{BoxModel, BoxModelInputs, build_box_model, recompute, recompute_groups};
pub use box_render_frame_builder::build_box_render_frame;
pub use box_series::{BoxSeries, BoxSeriesEvent, BoxSeriesListener};
pub use color_scheme::{ColorLookup, ColorPalette, FixedColor, OrdinalColorScheme};
pub use config::BoxSeriesConfig;
pub use label_format::{
    LabelFormatter, LabelLocale, LocaleLabelFormatter, format_label, format_localized_number,
};

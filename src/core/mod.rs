pub mod band_scale;
pub mod box_geometry;
pub mod primitives;
pub mod quantile;
pub mod scale;
pub mod types;

pub use band_scale::{BandScale, CategoryAxis};
pub use box_geometry::{
    BoxGeometry, PixelPoint, PixelSegment, horizontal_lines, project_box, resolve_box_width,
    whisker_line_coordinates,
};
pub use quantile::{
    Quartiles, WhiskerExtent, box_extent, box_quartiles, quantile_sorted, sorted_copy,
};
pub use scale::{LinearScale, ValueAxis};
pub use types::{Sample, SampleValue, SeriesGroup, Viewport};

//! box-series: box-and-whisker series geometry.
//!
//! Grouped samples go in, quartiles, whisker extents and a pixel-space box
//! model come out. Axes, colors and label formatting are read-only
//! capabilities supplied by the host; drawing happens behind the `Renderer`
//! contract.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BoxModel, BoxSeries, BoxSeriesConfig, recompute};
pub use error::{ChartError, ChartResult};

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid sample in group `{group}` at index {index}: `{value}` is not a finite number")]
    InvalidSample {
        group: String,
        index: usize,
        value: String,
    },

    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}

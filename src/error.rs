/// Failure to sample a stepped palette from a stop set.
///
/// Returned for unsound input; the caller is expected to keep whatever
/// palette it displayed last.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpolationError {
    #[error("cannot interpolate an empty stop set")]
    EmptyStops,
    #[error("color stop {index} is not a recognized color: {raw:?}")]
    InvalidStop { index: usize, raw: String },
    #[error("sample count {requested} is outside [{min}, {max}]")]
    SampleCountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
}

/// An out-of-bounds index passed to a stop set mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("stop index {index} out of bounds for {len} stops")]
pub struct StopIndexError {
    pub index: usize,
    pub len: usize,
}

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// The spacing mode string was not one of `dist`, `lon` or `lat`.
    InvalidMode(String),
    /// A path or index was requested over zero points.
    TooFewPoints(usize),
    /// A nearest-neighbour index was built over no keys.
    EmptyIndex,
    /// A coordinate or key was not finite, so it has no place on the path.
    InvalidCoordinate(String),
}

impl Display for SampleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::InvalidMode(mode) => write!(
                f,
                "The input type {mode} is not supported! Supported types include dist, lon, and lat."
            ),
            SampleError::TooFewPoints(n) => write!(
                f,
                "Cannot sample a path with {n} points, at least one is required."
            ),
            SampleError::EmptyIndex => {
                write!(f, "Cannot build a nearest-neighbour index without keys.")
            }
            SampleError::InvalidCoordinate(reason) => write!(f, "Invalid coordinate: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

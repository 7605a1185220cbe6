//! Errors produced when constructing or transforming vectors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error(
        "Expected {expected} coordinates for both the initial point and the components, \
         got {initial_point} and {components}"
    )]
    DimensionMismatch {
        expected: usize,
        initial_point: usize,
        components: usize,
    },

    #[error("Tried to rotate about an axis of zero magnitude")]
    DegenerateAxis,
}

//! Error types for [`Array3D`](crate::Array3D).

use crate::dims::Axis;

/// Error type for every fallible operation on an [`Array3D`](crate::Array3D).
///
/// A failed operation never mutates the array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Array3DError {
    /// A coordinate is outside the `[0, bound)` interval of its axis.
    #[error("index {index} is out of range for {axis} with length {bound}")]
    OutOfRange {
        /// The axis the coordinate belongs to
        axis:  Axis,
        /// The offending coordinate
        index: usize,
        /// The length of the axis
        bound: usize,
    },
    /// A slice or buffer given as input does not have the shape required by
    /// the operation.
    #[error("expected input of shape {expected:?}, got {found:?}")]
    ShapeMismatch {
        /// The shape the operation requires
        expected: Vec<usize>,
        /// The shape of the input
        found:    Vec<usize>,
    },
    /// The dimensions given at construction are not valid. See
    /// [`DimensionError`].
    #[error("invalid dimensions: {0}")]
    InvalidDimension(#[from] DimensionError),
}

/// The reason a set of dimensions was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// A dimension is negative.
    #[error("{axis} has negative length {value}")]
    Negative {
        /// The axis with the negative length
        axis:  Axis,
        /// The length given
        value: i64,
    },
    /// The dimension does not fit in a `usize`.
    #[error("{axis} has length {value} which does not fit in a usize")]
    TooLarge {
        /// The axis with the oversized length
        axis:  Axis,
        /// The length given
        value: i64,
    },
    /// `d0 * d1 * d2` overflows a `usize`.
    #[error("{d0}x{d1}x{d2} elements overflow a usize")]
    Overflow {
        /// Length of axis 0
        d0: usize,
        /// Length of axis 1
        d1: usize,
        /// Length of axis 2
        d2: usize,
    },
}

/// Result type for [`Array3D`](crate::Array3D) operations.
pub type Result<T> = std::result::Result<T, Array3DError>;

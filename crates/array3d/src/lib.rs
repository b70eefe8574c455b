#![warn(missing_docs)]
//! A dense array of rank 3 over a single flat buffer of `f64`, with bounds
//! checked element access and axis aligned slice extraction and assignment.
//!
//! ```
//! use array3d::prelude::*;
//! use ndarray::array;
//!
//! let mut array = Array3D::new(3, 3, 3)?;
//! array.ones();
//! array.set(1, 1, 1, 5.0)?;
//! assert_eq!(
//!     array.get_axis0(1)?,
//!     array![[1.0, 1.0, 1.0], [1.0, 5.0, 1.0], [1.0, 1.0, 1.0]]
//! );
//!
//! array.set_axis12(0, 0, &array![7.0, 8.0, 9.0])?;
//! assert_eq!(array.get(2, 0, 0)?, 9.0);
//! # Ok::<(), Array3DError>(())
//! ```

mod array;
mod dims;
mod error;
pub mod pretty_print;
mod serialize;
pub mod slice;

pub mod prelude {
    //! Commonly used types and traits.
    pub use super::{
        pretty_print_array3d, Array3D, Array3DError, Axis, AxisPair, Dims, DimensionError, Matrix,
        Vector,
    };
}

pub use array::Array3D;
pub use dims::{Axis, AxisPair, Dims};
pub use error::{Array3DError, DimensionError, Result};

/// A plane of an [`Array3D`], returned when one axis is fixed.
pub type Matrix = ndarray::Array2<f64>;
/// A line of an [`Array3D`], returned when two axes are fixed.
pub type Vector = ndarray::Array1<f64>;

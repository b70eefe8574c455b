//! Axis aligned slices of an [`Array3D`].
//!
//! Fixing one axis gives a *plane* (a [`Matrix`] over the other two axes in
//! ascending order), fixing two axes gives a *line* (a [`Vector`] over the
//! remaining axis). Slices are always copies of the data, never views into
//! the array.

use ndarray::{ArrayBase, Data, Ix1, Ix2};

use crate::{
    array::Array3D,
    dims::{Axis, AxisPair},
    error::{Array3DError, Result},
    Matrix, Vector,
};

/// Build a plane from nested rows.
///
/// # Errors
///
/// Will return `Err` if the rows do not all have the same length
///
/// ```
/// use array3d::slice::plane_from_rows;
///
/// let plane = plane_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
/// assert_eq!(plane.dim(), (2, 2));
/// assert!(plane_from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
/// # Ok::<(), array3d::Array3DError>(())
/// ```
pub fn plane_from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if let Some(row) = rows.iter().find(|row| row.len() != ncols) {
        return Err(Array3DError::ShapeMismatch {
            expected: vec![nrows, ncols],
            found:    vec![nrows, row.len()],
        });
    }

    Matrix::from_shape_vec((nrows, ncols), rows.concat()).map_err(|_| {
        Array3DError::ShapeMismatch {
            expected: vec![nrows, ncols],
            found:    vec![nrows * ncols],
        }
    })
}

/// Coordinate of the element at `(row, col)` of the plane through `axis` at
/// `fixed`.
#[inline]
const fn plane_coords(axis: Axis, fixed: usize, row: usize, col: usize) -> (usize, usize, usize) {
    match axis {
        Axis::Axis0 => (fixed, row, col),
        Axis::Axis1 => (row, fixed, col),
        Axis::Axis2 => (row, col, fixed),
    }
}

/// Coordinate of the element at `t` of the line through `pair` at
/// `(a, b)`.
#[inline]
const fn line_coords(pair: AxisPair, a: usize, b: usize, t: usize) -> (usize, usize, usize) {
    match pair {
        AxisPair::Axis01 => (a, b, t),
        AxisPair::Axis02 => (a, t, b),
        AxisPair::Axis12 => (t, a, b),
    }
}

impl Array3D {
    fn check_line(&self, pair: AxisPair, a: usize, b: usize) -> Result<()> {
        let (first, second) = pair.fixed();
        self.dims.check(first, a)?;
        self.dims.check(second, b)
    }

    /// Copy out the plane obtained by fixing `axis` at `index`.
    ///
    /// The rows and columns of the returned matrix run over the two other
    /// axes in ascending order, see [`Axis::others`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if `index` is out of range for `axis`
    pub fn get_plane(&self, axis: Axis, index: usize) -> Result<Matrix> {
        self.dims.check(axis, index)?;
        let shape = self.dims.plane_shape(axis);

        if axis == Axis::Axis0 {
            // axis 0 planes are contiguous in the buffer
            let len = shape.0 * shape.1;
            let plane = self.data[index * len..(index + 1) * len].to_vec();
            return Matrix::from_shape_vec(shape, plane).map_err(|_| {
                Array3DError::ShapeMismatch {
                    expected: vec![shape.0, shape.1],
                    found:    vec![shape.0 * shape.1],
                }
            });
        }

        Ok(Matrix::from_shape_fn(shape, |(row, col)| {
            let (i, j, k) = plane_coords(axis, index, row, col);
            self.data[self.dims.offset_unchecked(i, j, k)]
        }))
    }

    /// Overwrite the plane obtained by fixing `axis` at `index` with `plane`.
    ///
    /// Nothing is written unless both `index` and the shape of `plane` are
    /// valid.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `index` is out of range for `axis`, or if `plane`
    /// does not have the shape returned by [`Dims::plane_shape`](crate::Dims::plane_shape)
    pub fn set_plane<S>(&mut self, axis: Axis, index: usize, plane: &ArrayBase<S, Ix2>) -> Result<()>
    where
        S: Data<Elem = f64>,
    {
        self.dims.check(axis, index)?;
        let expected = self.dims.plane_shape(axis);
        let found = plane.dim();
        if found != expected {
            return Err(Array3DError::ShapeMismatch {
                expected: vec![expected.0, expected.1],
                found:    vec![found.0, found.1],
            });
        }

        tracing::trace!(%axis, index, rows = found.0, cols = found.1, "assigning plane");
        for ((row, col), &value) in plane.indexed_iter() {
            let (i, j, k) = plane_coords(axis, index, row, col);
            let offset = self.dims.offset_unchecked(i, j, k);
            self.data[offset] = value;
        }
        Ok(())
    }

    /// Copy out the line obtained by fixing the axes of `pair` at `(a, b)`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `a` or `b` is out of range for its axis
    pub fn get_line(&self, pair: AxisPair, a: usize, b: usize) -> Result<Vector> {
        self.check_line(pair, a, b)?;
        let len = self.dims.line_len(pair);
        Ok(Vector::from_shape_fn(len, |t| {
            let (i, j, k) = line_coords(pair, a, b, t);
            self.data[self.dims.offset_unchecked(i, j, k)]
        }))
    }

    /// Overwrite the line obtained by fixing the axes of `pair` at `(a, b)`
    /// with `line`.
    ///
    /// Nothing is written unless the coordinates and the length of `line` are
    /// valid.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `a` or `b` is out of range for its axis, or if
    /// `line` does not have the length of the free axis
    pub fn set_line<S>(&mut self, pair: AxisPair, a: usize, b: usize, line: &ArrayBase<S, Ix1>) -> Result<()>
    where
        S: Data<Elem = f64>,
    {
        self.check_line(pair, a, b)?;
        let expected = self.dims.line_len(pair);
        if line.len() != expected {
            return Err(Array3DError::ShapeMismatch {
                expected: vec![expected],
                found:    vec![line.len()],
            });
        }

        tracing::trace!(?pair, a, b, len = expected, "assigning line");
        for (t, &value) in line.iter().enumerate() {
            let (i, j, k) = line_coords(pair, a, b, t);
            let offset = self.dims.offset_unchecked(i, j, k);
            self.data[offset] = value;
        }
        Ok(())
    }

    /// The `d1 x d2` plane at `i`, indexed `[j][k]`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `i` is out of range
    #[inline]
    pub fn get_axis0(&self, i: usize) -> Result<Matrix> {
        self.get_plane(Axis::Axis0, i)
    }

    /// The `d0 x d2` plane at `j`, indexed `[i][k]`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `j` is out of range
    #[inline]
    pub fn get_axis1(&self, j: usize) -> Result<Matrix> {
        self.get_plane(Axis::Axis1, j)
    }

    /// The `d0 x d1` plane at `k`, indexed `[i][j]`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `k` is out of range
    #[inline]
    pub fn get_axis2(&self, k: usize) -> Result<Matrix> {
        self.get_plane(Axis::Axis2, k)
    }

    /// The line of length `d2` at `(i, j)`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `i` or `j` is out of range
    #[inline]
    pub fn get_axis01(&self, i: usize, j: usize) -> Result<Vector> {
        self.get_line(AxisPair::Axis01, i, j)
    }

    /// The line of length `d1` at `(i, k)`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `i` or `k` is out of range
    #[inline]
    pub fn get_axis02(&self, i: usize, k: usize) -> Result<Vector> {
        self.get_line(AxisPair::Axis02, i, k)
    }

    /// The line of length `d0` at `(j, k)`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `j` or `k` is out of range
    #[inline]
    pub fn get_axis12(&self, j: usize, k: usize) -> Result<Vector> {
        self.get_line(AxisPair::Axis12, j, k)
    }

    /// Overwrite the plane at `i` with a `d1 x d2` matrix.
    ///
    /// # Errors
    ///
    /// See [`Array3D::set_plane`]
    #[inline]
    pub fn set_axis0<S: Data<Elem = f64>>(&mut self, i: usize, plane: &ArrayBase<S, Ix2>) -> Result<()> {
        self.set_plane(Axis::Axis0, i, plane)
    }

    /// Overwrite the plane at `j` with a `d0 x d2` matrix.
    ///
    /// # Errors
    ///
    /// See [`Array3D::set_plane`]
    #[inline]
    pub fn set_axis1<S: Data<Elem = f64>>(&mut self, j: usize, plane: &ArrayBase<S, Ix2>) -> Result<()> {
        self.set_plane(Axis::Axis1, j, plane)
    }

    /// Overwrite the plane at `k` with a `d0 x d1` matrix.
    ///
    /// # Errors
    ///
    /// See [`Array3D::set_plane`]
    #[inline]
    pub fn set_axis2<S: Data<Elem = f64>>(&mut self, k: usize, plane: &ArrayBase<S, Ix2>) -> Result<()> {
        self.set_plane(Axis::Axis2, k, plane)
    }

    /// Overwrite the line at `(i, j)` with a vector of length `d2`.
    ///
    /// # Errors
    ///
    /// See [`Array3D::set_line`]
    #[inline]
    pub fn set_axis01<S: Data<Elem = f64>>(&mut self, i: usize, j: usize, line: &ArrayBase<S, Ix1>) -> Result<()> {
        self.set_line(AxisPair::Axis01, i, j, line)
    }

    /// Overwrite the line at `(i, k)` with a vector of length `d1`.
    ///
    /// # Errors
    ///
    /// See [`Array3D::set_line`]
    #[inline]
    pub fn set_axis02<S: Data<Elem = f64>>(&mut self, i: usize, k: usize, line: &ArrayBase<S, Ix1>) -> Result<()> {
        self.set_line(AxisPair::Axis02, i, k, line)
    }

    /// Overwrite the line at `(j, k)` with a vector of length `d0`.
    ///
    /// # Errors
    ///
    /// See [`Array3D::set_line`]
    #[inline]
    pub fn set_axis12<S: Data<Elem = f64>>(&mut self, j: usize, k: usize, line: &ArrayBase<S, Ix1>) -> Result<()> {
        self.set_line(AxisPair::Axis12, j, k, line)
    }
}

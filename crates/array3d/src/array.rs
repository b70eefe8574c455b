//! The [`Array3D`] container and element access.

use crate::{
    dims::Dims,
    error::{Array3DError, Result},
};

/// A dense array of rank 3 over a single flat buffer of `f64`.
///
/// The element at `(i, j, k)` lives at offset `i * d1 * d2 + j * d2 + k` of
/// the buffer. The dimensions are fixed at construction and the buffer
/// always holds exactly `d0 * d1 * d2` elements.
///
/// ```
/// use array3d::Array3D;
///
/// let mut array = Array3D::new(3, 3, 3)?;
/// array.ones();
/// array.set(1, 1, 1, 5.0)?;
/// assert_eq!(array.get(1, 1, 1)?, 5.0);
/// assert_eq!(array.get(0, 1, 1)?, 1.0);
/// assert!(array.get(3, 0, 0).is_err());
/// # Ok::<(), array3d::Array3DError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Array3D {
    pub(crate) dims: Dims,
    pub(crate) data: Vec<f64>,
}

impl Array3D {
    /// Create a new `Array3D` with every element set to `0.0`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `d0 * d1 * d2` overflows a `usize`
    pub fn new(d0: usize, d1: usize, d2: usize) -> Result<Self> {
        Self::filled(d0, d1, d2, 0.0)
    }

    /// Create a new `Array3D` with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `d0 * d1 * d2` overflows a `usize`
    pub fn filled(d0: usize, d1: usize, d2: usize, value: f64) -> Result<Self> {
        Ok(Self::with_dims(Dims::new(d0, d1, d2)?, value))
    }

    /// Create a new `Array3D` of the given dimensions with every element set
    /// to `value`.
    #[must_use]
    pub fn with_dims(dims: Dims, value: f64) -> Self {
        tracing::trace!(%dims, value, "allocating array");
        Self {
            dims,
            data: vec![value; dims.len()],
        }
    }

    /// Create a new zeroed `Array3D` from signed dimensions.
    ///
    /// ```
    /// use array3d::{Array3D, Array3DError};
    ///
    /// assert!(matches!(
    ///     Array3D::from_signed(-1, 2, 2),
    ///     Err(Array3DError::InvalidDimension(_))
    /// ));
    /// ```
    ///
    /// # Errors
    ///
    /// Will return `Err` if any dimension is negative, or the total number of
    /// elements overflows a `usize`
    pub fn from_signed(d0: i64, d1: i64, d2: i64) -> Result<Self> {
        Ok(Self::with_dims(Dims::from_signed(d0, d1, d2)?, 0.0))
    }

    /// Wrap an existing flat buffer laid out in linearization order.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `data.len()` is not `d0 * d1 * d2`
    pub fn from_vec(dims: Dims, data: Vec<f64>) -> Result<Self> {
        if data.len() != dims.len() {
            return Err(Array3DError::ShapeMismatch {
                expected: vec![dims.len()],
                found:    vec![data.len()],
            });
        }
        Ok(Self { dims, data })
    }

    /// The dimensions of the array.
    #[inline]
    pub const fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat buffer in linearization order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the array and return the flat buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Get the element at `(i, j, k)`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any coordinate is out of range
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Result<f64> {
        Ok(self.data[self.dims.offset(i, j, k)?])
    }

    /// Get a mutable reference to the element at `(i, j, k)`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any coordinate is out of range
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize, k: usize) -> Result<&mut f64> {
        let offset = self.dims.offset(i, j, k)?;
        Ok(&mut self.data[offset])
    }

    /// Set the element at `(i, j, k)` to `value`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any coordinate is out of range
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f64) -> Result<()> {
        *self.get_mut(i, j, k)? = value;
        Ok(())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Set every element to `0.0`.
    #[inline]
    pub fn zeros(&mut self) {
        self.fill(0.0);
    }

    /// Set every element to `1.0`.
    #[inline]
    pub fn ones(&mut self) {
        self.fill(1.0);
    }

    /// Iterate over `((i, j, k), value)` in linearization order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize, usize), f64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(offset, &value)| (self.dims.coords(offset), value))
    }
}

impl std::ops::Index<(usize, usize, usize)> for Array3D {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if any coordinate is out of range. Use [`Array3D::get`] for a
    /// checked read.
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &Self::Output {
        match self.dims.offset(i, j, k) {
            Ok(offset) => &self.data[offset],
            Err(err) => panic!("{err}"),
        }
    }
}

impl std::ops::IndexMut<(usize, usize, usize)> for Array3D {
    /// # Panics
    ///
    /// Panics if any coordinate is out of range. Use [`Array3D::get_mut`] for
    /// a checked write.
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut Self::Output {
        match self.get_mut(i, j, k) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl TryFrom<(i64, i64, i64)> for Array3D {
    type Error = Array3DError;

    fn try_from((d0, d1, d2): (i64, i64, i64)) -> Result<Self> {
        Self::from_signed(d0, d1, d2)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use arbtest::arbtest;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{dims::Axis, error::DimensionError};

    #[test]
    fn new_is_zeroed() {
        let array = Array3D::new(2, 3, 4).unwrap();
        assert_eq!(array.len(), 24);
        assert!(array.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn zero_dimension_gives_empty_buffer() {
        let array = Array3D::new(0, 3, 3).unwrap();
        assert!(array.is_empty());
        assert_eq!(array.dims().as_array(), [0, 3, 3]);
        assert!(array.get(0, 0, 0).is_err());
    }

    #[test]
    fn negative_dimension_is_invalid() {
        assert_eq!(
            Array3D::from_signed(-1, 2, 2),
            Err(Array3DError::InvalidDimension(DimensionError::Negative {
                axis:  Axis::Axis0,
                value: -1,
            }))
        );
        assert!(Array3D::try_from((2_i64, -4_i64, 2_i64)).is_err());
        assert_eq!(
            Array3D::try_from((2_i64, 2_i64, 2_i64)).unwrap().len(),
            8
        );
    }

    #[test]
    fn from_vec_checks_length() {
        let dims = Dims::new(2, 2, 2).unwrap();
        assert_eq!(
            Array3D::from_vec(dims, vec![0.0; 7]),
            Err(Array3DError::ShapeMismatch {
                expected: vec![8],
                found:    vec![7],
            })
        );
        let array = Array3D::from_vec(dims, (0..8).map(f64::from).collect()).unwrap();
        assert_eq!(array.get(1, 0, 1).unwrap(), 5.0);
    }

    #[test]
    fn set_only_touches_one_cell() {
        arbtest(|u| {
            let d0 = u.int_in_range(1..=5)?;
            let d1 = u.int_in_range(1..=5)?;
            let d2 = u.int_in_range(1..=5)?;
            let i = u.int_in_range(0..=d0 - 1)?;
            let j = u.int_in_range(0..=d1 - 1)?;
            let k = u.int_in_range(0..=d2 - 1)?;
            let value: f64 = u.arbitrary()?;
            if value.is_nan() {
                return Ok(());
            }

            let mut array = Array3D::filled(d0, d1, d2, -1.0).unwrap();
            array.set(i, j, k, value).unwrap();

            assert_eq!(array.get(i, j, k).unwrap(), value);
            for (coords, x) in array.indexed_iter() {
                if coords != (i, j, k) {
                    assert_eq!(x, -1.0);
                }
            }
            Ok(())
        });
    }

    #[test]
    fn out_of_range_leaves_buffer_unchanged() {
        let mut array = Array3D::filled(2, 3, 4, 2.0).unwrap();
        let before = array.clone();

        for (i, j, k) in [(2, 0, 0), (0, 3, 0), (0, 0, 4), (9, 9, 9)] {
            assert!(matches!(
                array.get(i, j, k),
                Err(Array3DError::OutOfRange { .. })
            ));
            assert!(matches!(
                array.set(i, j, k, 7.0),
                Err(Array3DError::OutOfRange { .. })
            ));
        }
        assert_eq!(array, before);
    }

    #[test]
    fn fill_zeros_and_ones() {
        let mut array = Array3D::new(3, 2, 2).unwrap();
        array.ones();
        assert!(array.as_slice().iter().all(|&x| x == 1.0));
        array.fill(5.0);
        assert!(array.as_slice().iter().all(|&x| x == 5.0));
        array.zeros();
        assert!(array.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn index_operators() {
        let mut array = Array3D::new(2, 2, 2).unwrap();
        array[(1, 0, 1)] = 3.5;
        assert_eq!(array[(1, 0, 1)], 3.5);
        assert_eq!(array.as_slice()[5], 3.5);
    }

    #[test]
    #[should_panic(expected = "index 2 is out of range for axis 2 with length 2")]
    fn index_operator_panics_out_of_range() {
        let array = Array3D::new(2, 2, 2).unwrap();
        let _ = array[(0, 0, 2)];
    }

    #[test]
    fn indexed_iter_follows_linearization() {
        let array = Array3D::from_vec(
            Dims::new(2, 1, 2).unwrap(),
            vec![0.0, 1.0, 2.0, 3.0],
        )
        .unwrap();
        let items: Vec<_> = array.indexed_iter().collect();
        assert_eq!(
            items,
            vec![
                ((0, 0, 0), 0.0),
                ((0, 0, 1), 1.0),
                ((1, 0, 0), 2.0),
                ((1, 0, 1), 3.0),
            ]
        );
    }
}

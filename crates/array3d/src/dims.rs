//! Dimensions, axes and the linearization between coordinates and offsets
//! into the flat buffer.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Array3DError, DimensionError, Result};

/// One of the three axes of an [`Array3D`](crate::Array3D).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    /// The major axis, indexed by `i`
    Axis0,
    /// The middle axis, indexed by `j`
    Axis1,
    /// The minor axis, indexed by `k`
    Axis2,
}

impl Axis {
    /// All axes in ascending order.
    pub const ALL: [Self; 3] = [Self::Axis0, Self::Axis1, Self::Axis2];

    /// Position of the axis in a `(i, j, k)` coordinate.
    #[inline]
    pub const fn position(self) -> usize {
        match self {
            Self::Axis0 => 0,
            Self::Axis1 => 1,
            Self::Axis2 => 2,
        }
    }

    /// The two axes that stay free when this axis is fixed, in ascending
    /// order. These are the row and column axes of the plane through this
    /// axis.
    #[inline]
    pub const fn others(self) -> (Self, Self) {
        match self {
            Self::Axis0 => (Self::Axis1, Self::Axis2),
            Self::Axis1 => (Self::Axis0, Self::Axis2),
            Self::Axis2 => (Self::Axis0, Self::Axis1),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "axis {}", self.position())
    }
}

/// A pair of axes that are fixed together, leaving a single free axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisPair {
    /// `i` and `j` are fixed, `k` is free
    Axis01,
    /// `i` and `k` are fixed, `j` is free
    Axis02,
    /// `j` and `k` are fixed, `i` is free
    Axis12,
}

impl AxisPair {
    /// All axis pairs.
    pub const ALL: [Self; 3] = [Self::Axis01, Self::Axis02, Self::Axis12];

    /// The fixed axes in ascending order.
    #[inline]
    pub const fn fixed(self) -> (Axis, Axis) {
        match self {
            Self::Axis01 => (Axis::Axis0, Axis::Axis1),
            Self::Axis02 => (Axis::Axis0, Axis::Axis2),
            Self::Axis12 => (Axis::Axis1, Axis::Axis2),
        }
    }

    /// The axis left free by the pair.
    #[inline]
    pub const fn free(self) -> Axis {
        match self {
            Self::Axis01 => Axis::Axis2,
            Self::Axis02 => Axis::Axis1,
            Self::Axis12 => Axis::Axis0,
        }
    }
}

/// The dimensions `(d0, d1, d2)` of an [`Array3D`](crate::Array3D).
///
/// A `Dims` value always satisfies `d0 * d1 * d2 <= usize::MAX`, so
/// [`Dims::len`] never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    d0: usize,
    d1: usize,
    d2: usize,
}

impl Dims {
    /// Create a new `Dims`. Zero-length axes are allowed.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `d0 * d1 * d2` overflows a `usize`.
    pub fn new(d0: usize, d1: usize, d2: usize) -> Result<Self> {
        d0.checked_mul(d1)
            .and_then(|n| n.checked_mul(d2))
            .ok_or(DimensionError::Overflow { d0, d1, d2 })?;
        Ok(Self { d0, d1, d2 })
    }

    /// Create a new `Dims` from signed lengths.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any length is negative, or if the lengths do not
    /// fit in a `usize`.
    pub fn from_signed(d0: i64, d1: i64, d2: i64) -> Result<Self> {
        let [d0, d1, d2] = [(Axis::Axis0, d0), (Axis::Axis1, d1), (Axis::Axis2, d2)].map(
            |(axis, value)| {
                if value < 0 {
                    return Err(DimensionError::Negative { axis, value });
                }
                usize::try_from(value).map_err(|_| DimensionError::TooLarge { axis, value })
            },
        );
        Self::new(d0?, d1?, d2?)
    }

    /// Length of axis 0.
    #[inline]
    pub const fn d0(&self) -> usize {
        self.d0
    }

    /// Length of axis 1.
    #[inline]
    pub const fn d1(&self) -> usize {
        self.d1
    }

    /// Length of axis 2.
    #[inline]
    pub const fn d2(&self) -> usize {
        self.d2
    }

    /// Length of `axis`.
    #[inline]
    pub const fn axis_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Axis0 => self.d0,
            Axis::Axis1 => self.d1,
            Axis::Axis2 => self.d2,
        }
    }

    /// Number of elements, `d0 * d1 * d2`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.d0 * self.d1 * self.d2
    }

    /// Returns `true` if any axis has length zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The dimensions as an array `[d0, d1, d2]`.
    #[inline]
    pub const fn as_array(&self) -> [usize; 3] {
        [self.d0, self.d1, self.d2]
    }

    /// Shape `(rows, cols)` of the plane obtained by fixing `axis`.
    #[inline]
    pub const fn plane_shape(&self, axis: Axis) -> (usize, usize) {
        let (rows, cols) = axis.others();
        (self.axis_len(rows), self.axis_len(cols))
    }

    /// Length of the line obtained by fixing the axes of `pair`.
    #[inline]
    pub const fn line_len(&self, pair: AxisPair) -> usize {
        self.axis_len(pair.free())
    }

    /// Check that `index` is inside the bound of `axis`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `index >= axis_len(axis)`
    #[inline]
    pub fn check(&self, axis: Axis, index: usize) -> Result<()> {
        let bound = self.axis_len(axis);
        if index < bound {
            Ok(())
        } else {
            Err(Array3DError::OutOfRange { axis, index, bound })
        }
    }

    /// Offset of `(i, j, k)` in the flat buffer, `i * d1 * d2 + j * d2 + k`.
    ///
    /// # Errors
    ///
    /// Will return `Err` naming the first coordinate that is out of range.
    pub fn offset(&self, i: usize, j: usize, k: usize) -> Result<usize> {
        self.check(Axis::Axis0, i)?;
        self.check(Axis::Axis1, j)?;
        self.check(Axis::Axis2, k)?;
        Ok(self.offset_unchecked(i, j, k))
    }

    /// Offset of `(i, j, k)` without bounds checking. The caller must
    /// guarantee the coordinate is inside the dimensions.
    #[inline]
    pub(crate) fn offset_unchecked(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.d0);
        debug_assert!(j < self.d1);
        debug_assert!(k < self.d2);
        (i * self.d1 + j) * self.d2 + k
    }

    /// Coordinate of the element at `offset` in the flat buffer. Inverse of
    /// [`Dims::offset`].
    #[inline]
    pub(crate) fn coords(&self, offset: usize) -> (usize, usize, usize) {
        let plane = self.d1 * self.d2;
        (offset / plane, (offset % plane) / self.d2, offset % self.d2)
    }
}

impl TryFrom<[usize; 3]> for Dims {
    type Error = Array3DError;

    fn try_from([d0, d1, d2]: [usize; 3]) -> Result<Self> {
        Self::new(d0, d1, d2)
    }
}

impl From<Dims> for [usize; 3] {
    fn from(value: Dims) -> Self {
        value.as_array()
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.d0, self.d1, self.d2)
    }
}

impl Serialize for Dims {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Dims {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dims = <[usize; 3]>::deserialize(deserializer)?;
        Self::try_from(dims).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use arbtest::arbtest;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn linearization_is_i_major_k_minor() {
        let dims = Dims::new(3, 4, 5).unwrap();
        assert_eq!(dims.offset(0, 0, 0), Ok(0));
        assert_eq!(dims.offset(0, 0, 1), Ok(1));
        assert_eq!(dims.offset(0, 1, 0), Ok(5));
        assert_eq!(dims.offset(1, 0, 0), Ok(20));
        assert_eq!(dims.offset(2, 3, 4), Ok(59));
    }

    #[test]
    fn offset_reports_first_offending_axis() {
        let dims = Dims::new(2, 2, 2).unwrap();
        assert_eq!(
            dims.offset(2, 5, 0),
            Err(Array3DError::OutOfRange {
                axis:  Axis::Axis0,
                index: 2,
                bound: 2,
            })
        );
        assert_eq!(
            dims.offset(1, 1, 9),
            Err(Array3DError::OutOfRange {
                axis:  Axis::Axis2,
                index: 9,
                bound: 2,
            })
        );
    }

    #[test]
    fn offsets_are_a_bijection_onto_the_buffer() {
        arbtest(|u| {
            let d0 = u.int_in_range(1..=6)?;
            let d1 = u.int_in_range(1..=6)?;
            let d2 = u.int_in_range(1..=6)?;
            let dims = Dims::new(d0, d1, d2).unwrap();

            let i = u.int_in_range(0..=d0 - 1)?;
            let j = u.int_in_range(0..=d1 - 1)?;
            let k = u.int_in_range(0..=d2 - 1)?;
            let offset = dims.offset(i, j, k).unwrap();

            assert!(offset < dims.len());
            assert_eq!(dims.coords(offset), (i, j, k));
            Ok(())
        });
    }

    #[test]
    fn zero_length_axes_are_allowed() {
        let dims = Dims::new(0, 4, 4).unwrap();
        assert!(dims.is_empty());
        assert_eq!(dims.len(), 0);
        assert!(dims.check(Axis::Axis0, 0).is_err());
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert_eq!(
            Dims::from_signed(-1, 2, 2),
            Err(Array3DError::InvalidDimension(DimensionError::Negative {
                axis:  Axis::Axis0,
                value: -1,
            }))
        );
        assert_eq!(
            Dims::from_signed(2, 2, -3),
            Err(Array3DError::InvalidDimension(DimensionError::Negative {
                axis:  Axis::Axis2,
                value: -3,
            }))
        );
        assert_eq!(Dims::from_signed(1, 2, 3), Dims::new(1, 2, 3));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert_eq!(
            Dims::new(usize::MAX, 2, 1),
            Err(Array3DError::InvalidDimension(DimensionError::Overflow {
                d0: usize::MAX,
                d1: 2,
                d2: 1,
            }))
        );
    }

    #[test]
    fn plane_shapes_preserve_axis_order() {
        let dims = Dims::new(3, 4, 5).unwrap();
        assert_eq!(dims.plane_shape(Axis::Axis0), (4, 5));
        assert_eq!(dims.plane_shape(Axis::Axis1), (3, 5));
        assert_eq!(dims.plane_shape(Axis::Axis2), (3, 4));
        assert_eq!(dims.line_len(AxisPair::Axis01), 5);
        assert_eq!(dims.line_len(AxisPair::Axis02), 4);
        assert_eq!(dims.line_len(AxisPair::Axis12), 3);
    }

    #[test]
    fn deserializing_rejects_overflow() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            dims: Dims,
        }

        let ok: Wrapper = toml::from_str("dims = [1, 2, 3]").unwrap();
        assert_eq!(ok.dims.as_array(), [1, 2, 3]);

        let too_big = format!("dims = [{}, 2, 2]", i64::MAX);
        assert!(toml::from_str::<Wrapper>(&too_big).is_err());
    }
}

//! Serde support for [`Array3D`].
//!
//! An array is represented as its dimensions and its flat buffer in
//! linearization order:
//!
//! ```toml
//! dims = [1, 2, 2]
//! data = [0.0, 1.0, 2.0, 3.0]
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::{array::Array3D, dims::Dims};

#[derive(Serialize)]
struct ArrayRef<'a> {
    dims: Dims,
    data: &'a [f64],
}

#[derive(Deserialize)]
struct ArrayOwned {
    dims: Dims,
    data: Vec<f64>,
}

impl Serialize for Array3D {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ArrayRef {
            dims: self.dims,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Array3D {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ArrayOwned { dims, data } = ArrayOwned::deserialize(deserializer)?;
        Self::from_vec(dims, data).map_err(serde::de::Error::custom)
    }
}

//! Configuration of the demo scenario.

use std::path::Path;

use array3d::Dims;
use serde::{Deserialize, Serialize};

/// Error type for [`Config::from_file`] and [`Config::parse`]
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The cell that is overwritten after the array has been filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProbeSection {
    /// Coordinate `[i, j, k]` of the cell
    pub index: [usize; 3],
    /// Value written to the cell
    pub value: f64,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            index: [1, 1, 1],
            value: 5.0,
        }
    }
}

/// Configuration of the demo scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Dimensions of the array
    pub dims:   Dims,
    /// Value every element is set to before probing
    pub fill:   f64,
    /// Index along axis 0 of the plane printed at the end
    pub slice:  usize,
    /// Render arrays with [`array3d::Array3D::pretty`]
    pub pretty: bool,
    pub probe:  ProbeSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dims:   Self::default_dims(),
            fill:   1.0,
            slice:  1,
            pretty: false,
            probe:  ProbeSection::default(),
        }
    }
}

impl Config {
    fn default_dims() -> Dims {
        match Dims::new(3, 3, 3) {
            Ok(dims) => dims,
            Err(_) => unreachable!("3x3x3 does not overflow"),
        }
    }

    /// Parse a config file
    /// Returns a `ParseError` if the file cannot be read or parsed
    pub fn from_file<P>(path: P) -> Result<Self, ParseError>
    where
        P: AsRef<Path>,
    {
        std::fs::read_to_string(path)
            .map_err(Into::into)
            .and_then(|contents| Self::parse(contents.as_str()))
    }

    /// Parse a config from a toml string
    /// Returns a `ParseError` if the string cannot be parsed
    pub fn parse(contents: &str) -> Result<Self, ParseError> {
        toml::from_str(contents).map_err(Into::into)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn default_config_round_trips() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), Config::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = Config::parse(
            r#"
            dims = [2, 4, 6]
            pretty = true

            [probe]
            index = [0, 3, 5]
            value = -2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.dims.as_array(), [2, 4, 6]);
        assert!(config.pretty);
        assert_eq!(config.fill, 1.0);
        assert_eq!(config.slice, 1);
        assert_eq!(config.probe, ProbeSection {
            index: [0, 3, 5],
            value: -2.5,
        });
    }

    #[test]
    fn rejects_malformed_dims() {
        assert!(matches!(
            Config::parse("dims = [2, 2]"),
            Err(ParseError::Toml(_))
        ));
        assert!(matches!(
            Config::parse("dims = [-1, 2, 2]"),
            Err(ParseError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Config::from_file("/this/path/does/not/exist.toml"),
            Err(ParseError::Io(_))
        ));
    }
}

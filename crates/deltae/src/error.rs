//! Utility module with deltae's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::Float;

/// An invalid white point.
///
/// This error indicates a white point component that is not-a-number,
/// infinite, zero, or negative. Since CIELAB divides by each component of the
/// white point, all three components must be finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WhitePointError {
    /// The index of the offending component, i.e., 0 for X, 1 for Y, 2 for Z.
    pub index: usize,
    /// The offending value.
    pub value: Float,
}

impl WhitePointError {
    /// Create a new white point error.
    pub const fn new(index: usize, value: Float) -> Self {
        Self { index, value }
    }
}

impl core::fmt::Display for WhitePointError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self.index {
            0 => "X",
            1 => "Y",
            _ => "Z",
        };
        f.write_fmt(format_args!(
            "white point component {} should be finite and positive but is {}",
            name, self.value
        ))
    }
}

impl core::error::Error for WhitePointError {}

#[cfg(feature = "pyffi")]
impl From<WhitePointError> for PyErr {
    fn from(value: WhitePointError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous configuration.
///
/// Configuration comes from strings, typically environment variables, naming
/// a distance metric and a white point.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A metric name other than `cie76`, `oklab`, `ok`, `oklrab`, or `okr`.
    UnknownMetric(String),

    /// A white point that does not consist of exactly three comma- or
    /// whitespace-separated floating point numbers.
    MalformedWhitePoint(String),

    /// A white point with three numbers, one of which is out of range.
    InvalidWhitePoint(WhitePointError),

    /// An environment variable with a value that is not valid Unicode.
    NotUnicode(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ConfigError::*;

        match *self {
            UnknownMetric(ref name) => f.write_fmt(format_args!(
                "metric should be `cie76`, `oklab`, or `oklrab` but is `{}`",
                name
            )),
            MalformedWhitePoint(ref text) => f.write_fmt(format_args!(
                "white point should have 3 numeric components but is `{}`",
                text
            )),
            InvalidWhitePoint(_) => f.write_str("white point is out of range"),
            NotUnicode(key) => f.write_fmt(format_args!(
                "environment variable {} should be valid Unicode but is not",
                key
            )),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match *self {
            ConfigError::InvalidWhitePoint(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<WhitePointError> for ConfigError {
    fn from(value: WhitePointError) -> Self {
        Self::InvalidWhitePoint(value)
    }
}

#[cfg(feature = "pyffi")]
impl From<ConfigError> for PyErr {
    fn from(value: ConfigError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ConfigError, WhitePointError};
    use core::error::Error;

    #[test]
    fn test_display() {
        let error = WhitePointError::new(1, -1.0);
        assert_eq!(
            error.to_string(),
            "white point component Y should be finite and positive but is -1",
            "white point error names the component"
        );

        let error = ConfigError::UnknownMetric("ciede2000".to_string());
        assert_eq!(
            error.to_string(),
            "metric should be `cie76`, `oklab`, or `oklrab` but is `ciede2000`",
            "config error quotes the metric"
        );
    }

    #[test]
    fn test_source() {
        let error: ConfigError = WhitePointError::new(0, 0.0).into();
        assert!(error.source().is_some(), "invalid white point has a source");
        assert!(
            ConfigError::MalformedWhitePoint("1,2".to_string())
                .source()
                .is_none(),
            "malformed white point has no source"
        );
    }
}

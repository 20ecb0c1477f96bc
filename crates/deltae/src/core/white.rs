#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{ConfigError, WhitePointError};
use crate::Float;

/// A reference white in CIE XYZ.
///
/// CIELAB expresses colors relative to a reference white. This crate scales
/// XYZ so that white has Y = 100, and white points must use the same scale.
/// [`WhitePoint::D65`] is the default and matches sRGB's illuminant.
///
/// All three components must be finite and strictly positive.
/// [`WhitePoint::try_new`] enforces that invariant, whereas the `const`
/// [`WhitePoint::new`] leaves it to the caller. A white point violating the
/// invariant does not cause a panic, it just yields infinite or not-a-number
/// coordinates.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "deltae"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WhitePoint([Float; 3]);

impl WhitePoint {
    /// The CIE standard illuminant D65 for the 2º observer.
    pub const D65: WhitePoint = WhitePoint([95.0489, 100.0, 108.884]);

    /// Create a new white point without validating its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }

    /// Create a new white point after validating its components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deltae::WhitePoint;
    /// assert!(WhitePoint::try_new(96.422, 100.0, 82.521).is_ok());
    /// assert!(WhitePoint::try_new(96.422, 0.0, 82.521).is_err());
    /// ```
    pub fn try_new(x: Float, y: Float, z: Float) -> Result<Self, WhitePointError> {
        for (index, value) in [x, y, z].into_iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(WhitePointError::new(index, value));
            }
        }

        Ok(Self([x, y, z]))
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl WhitePoint {
    /// Create a new white point after validating its components. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub fn py_new(x: Float, y: Float, z: Float) -> PyResult<Self> {
        Ok(Self::try_new(x, y, z)?)
    }

    /// Get the three components. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    /// Create a human-readable representation for this white point. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("WhitePoint({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

impl Default for WhitePoint {
    /// Create an instance of the default white point, which is D65.
    fn default() -> Self {
        Self::D65
    }
}

impl AsRef<[Float; 3]> for WhitePoint {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl From<WhitePoint> for [Float; 3] {
    fn from(value: WhitePoint) -> Self {
        value.0
    }
}

impl core::str::FromStr for WhitePoint {
    type Err = ConfigError;

    /// Parse a white point from three comma- or whitespace-separated numbers.
    ///
    /// If the string contains a comma, every field between commas must hold a
    /// number, so `"1,,2,3"` is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deltae::WhitePoint;
    /// # use deltae::error::ConfigError;
    /// let d50: WhitePoint = "96.422, 100, 82.521".parse()?;
    /// assert_eq!(d50, WhitePoint::new(96.422, 100.0, 82.521));
    /// # Ok::<(), ConfigError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedWhitePoint(s.to_owned());

        let fields: Vec<&str> = if s.contains(',') {
            s.split(',').map(str::trim).collect()
        } else {
            s.split_whitespace().collect()
        };

        let &[x, y, z] = fields.as_slice() else {
            return Err(malformed());
        };

        let parse = |field: &str| field.parse::<Float>().map_err(|_| malformed());
        Ok(Self::try_new(parse(x)?, parse(y)?, parse(z)?)?)
    }
}

impl core::fmt::Display for WhitePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [x, y, z] = self.0;
        f.write_fmt(format_args!("{}, {}, {}", x, y, z))
    }
}

#[cfg(test)]
mod test {
    use super::WhitePoint;
    use crate::error::{ConfigError, WhitePointError};
    use crate::Float;

    #[test]
    fn test_try_new() {
        assert_eq!(
            WhitePoint::try_new(95.0489, 100.0, 108.884),
            Ok(WhitePoint::D65),
            "D65 is valid"
        );
        assert_eq!(
            WhitePoint::try_new(-1.0, 100.0, 108.884),
            Err(WhitePointError::new(0, -1.0)),
            "negative X is invalid"
        );
        assert_eq!(
            WhitePoint::try_new(95.0489, 100.0, Float::INFINITY),
            Err(WhitePointError::new(2, Float::INFINITY)),
            "infinite Z is invalid"
        );
        assert!(
            WhitePoint::try_new(Float::NAN, 100.0, 108.884).is_err(),
            "not-a-number is invalid"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "95.0489,100,108.884".parse::<WhitePoint>(),
            Ok(WhitePoint::D65),
            "comma-separated"
        );
        assert_eq!(
            "  95.0489   100\t108.884 ".parse::<WhitePoint>(),
            Ok(WhitePoint::D65),
            "whitespace-separated"
        );
        assert_eq!(
            "95.0489, 100".parse::<WhitePoint>(),
            Err(ConfigError::MalformedWhitePoint("95.0489, 100".to_string())),
            "too few components"
        );
        assert_eq!(
            "1, 2, 3, 4".parse::<WhitePoint>(),
            Err(ConfigError::MalformedWhitePoint("1, 2, 3, 4".to_string())),
            "too many components"
        );
        assert_eq!(
            "1, two, 3".parse::<WhitePoint>(),
            Err(ConfigError::MalformedWhitePoint("1, two, 3".to_string())),
            "not a number"
        );
        for text in ["1,,2,3", ",1,2,3,", "1, 2, 3,", "1 2, 3"] {
            assert_eq!(
                text.parse::<WhitePoint>(),
                Err(ConfigError::MalformedWhitePoint(text.to_string())),
                "empty or merged field in {:?}",
                text
            );
        }
        assert_eq!(
            " 1 , 2 ,3 ".parse::<WhitePoint>(),
            Ok(WhitePoint::new(1.0, 2.0, 3.0)),
            "fields are trimmed"
        );
        assert_eq!(
            "1, 0, 3".parse::<WhitePoint>(),
            Err(ConfigError::InvalidWhitePoint(WhitePointError::new(1, 0.0))),
            "zero component"
        );
    }

    #[test]
    fn test_display_round_trips() {
        let text = WhitePoint::D65.to_string();
        assert_eq!(text, "95.0489, 100, 108.884", "display is comma-separated");
        assert_eq!(text.parse::<WhitePoint>(), Ok(WhitePoint::D65), "reparses");
    }
}

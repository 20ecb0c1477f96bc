//! Pluggable perceptual distance metrics.
//!
//! [`PerceptualDistance`] abstracts over the color space in which distance is
//! measured. [`Cie76`] is the default and measures in CIELAB. [`Oklab`]
//! measures in Oklab or Oklrab. [`Metric`] names the strategies for configuration
//! purposes and [`DistanceConfig`](crate::DistanceConfig) resolves one from
//! the environment.
//!
//! All strategies take encoded sRGB colors with channels in `0..=255` and
//! return squared distances. Values from different strategies are not
//! comparable with each other.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{delta_e_ok_squared, delta_e_squared_with, OkVersion, WhitePoint};
use crate::error::ConfigError;
use crate::Float;

/// A strategy for computing perceptual distance between two sRGB colors.
pub trait PerceptualDistance {
    /// Compute the squared distance between two colors with channels in
    /// `0..=255`.
    fn distance(&self, color1: &[Float; 3], color2: &[Float; 3]) -> Float;
}

impl<D: PerceptualDistance + ?Sized> PerceptualDistance for &D {
    fn distance(&self, color1: &[Float; 3], color2: &[Float; 3]) -> Float {
        (**self).distance(color1, color2)
    }
}

/// Squared CIE76 Delta E, i.e., squared Euclidian distance in CIELAB.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cie76 {
    /// The reference white for CIELAB.
    pub white_point: WhitePoint,
}

impl Cie76 {
    /// Create a new CIE76 metric with the given white point.
    pub const fn new(white_point: WhitePoint) -> Self {
        Self { white_point }
    }
}

impl PerceptualDistance for Cie76 {
    #[inline]
    fn distance(&self, color1: &[Float; 3], color2: &[Float; 3]) -> Float {
        delta_e_squared_with(&self.white_point, color1, color2)
    }
}

/// Squared Euclidian distance in Oklab or Oklrab.
///
/// Oklab is defined for D65 only and hence has no white point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Oklab(pub OkVersion);

impl PerceptualDistance for Oklab {
    #[inline]
    fn distance(&self, color1: &[Float; 3], color2: &[Float; 3]) -> Float {
        delta_e_ok_squared(color1, color2, self.0)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The enumeration of supported metrics.
///
/// # Examples
///
/// ```
/// # use deltae::metric::Metric;
/// # use deltae::error::ConfigError;
/// assert_eq!("CIE76".parse::<Metric>()?, Metric::Cie76);
/// assert_eq!("okr".parse::<Metric>()?, Metric::Oklrab);
/// assert!("ciede2000".parse::<Metric>().is_err());
/// # Ok::<(), ConfigError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "deltae")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// CIELAB, see [`Cie76`].
    #[default]
    Cie76,
    /// Oklab, see [`Oklab`](struct@Oklab).
    Oklab,
    /// Oklrab, see [`Oklab`](struct@Oklab).
    Oklrab,
}

impl Metric {
    /// Compute the squared distance between two sRGB colors with this metric.
    ///
    /// Only [`Metric::Cie76`] uses the white point.
    pub fn distance(
        &self,
        white_point: &WhitePoint,
        color1: &[Float; 3],
        color2: &[Float; 3],
    ) -> Float {
        match *self {
            Self::Cie76 => delta_e_squared_with(white_point, color1, color2),
            Self::Oklab => delta_e_ok_squared(color1, color2, OkVersion::Original),
            Self::Oklrab => delta_e_ok_squared(color1, color2, OkVersion::Revised),
        }
    }

    /// Get this metric's canonical name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Cie76 => "cie76",
            Self::Oklab => "oklab",
            Self::Oklrab => "oklrab",
        }
    }
}

impl core::str::FromStr for Metric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("cie76") {
            Ok(Self::Cie76)
        } else if name.eq_ignore_ascii_case("oklab") || name.eq_ignore_ascii_case("ok") {
            Ok(Self::Oklab)
        } else if name.eq_ignore_ascii_case("oklrab") || name.eq_ignore_ascii_case("okr") {
            Ok(Self::Oklrab)
        } else {
            Err(ConfigError::UnknownMetric(s.to_owned()))
        }
    }
}

impl core::fmt::Display for Metric {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Find the index position of the candidate color closest to the origin.
///
/// This function compares the origin to every candidate by computing the
/// distance with the given metric and returns the index position of the
/// candidate with smallest distance. If there are no candidates, it returns
/// `None`. If several candidates are equally close, it returns the first. A
/// not-a-number distance, e.g., due to an invalid white point, counts as
/// farther than any other distance.
///
/// # Examples
///
/// ```
/// # use deltae::metric::{find_closest, Cie76};
/// let palette = [
///     [196.0, 19.0, 49.0],
///     [0.0, 128.0, 37.0],
///     [48.0, 120.0, 234.0],
/// ];
/// let rose = [255.0, 128.0, 128.0];
/// assert_eq!(find_closest(&rose, &palette, &Cie76::default()), Some(0));
/// ```
pub fn find_closest<'c, C, D>(origin: &[Float; 3], candidates: C, metric: &D) -> Option<usize>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    D: PerceptualDistance + ?Sized,
{
    crate::core::find_closest(origin, candidates, |c1, c2| metric.distance(c1, c2))
}

#[cfg(test)]
mod test {
    use super::{find_closest, Cie76, Metric, Oklab, PerceptualDistance};
    use crate::core::{delta_e_ok_squared, delta_e_squared, OkVersion, WhitePoint};
    use crate::error::ConfigError;

    #[test]
    fn test_strategies() {
        let red = [255.0, 0.0, 0.0];
        let blue = [0.0, 0.0, 255.0];

        assert_eq!(
            Cie76::default().distance(&red, &blue),
            delta_e_squared(&red, &blue),
            "default CIE76 uses D65"
        );
        assert_eq!(
            Oklab(OkVersion::Revised).distance(&red, &blue),
            delta_e_ok_squared(&red, &blue, OkVersion::Revised),
            "Oklab strategy delegates to Oklrab"
        );

        let strategies: [&dyn PerceptualDistance; 3] = [
            &Cie76::default(),
            &Oklab(OkVersion::Original),
            &Oklab(OkVersion::Revised),
        ];
        for strategy in strategies {
            assert_eq!(strategy.distance(&red, &red), 0.0, "self-distance is zero");
            assert_eq!(
                strategy.distance(&red, &blue),
                strategy.distance(&blue, &red),
                "distance is commutative"
            );
        }
    }

    #[test]
    fn test_metric() {
        let white = WhitePoint::D65;
        let red = [255.0, 0.0, 0.0];
        let green = [0.0, 255.0, 0.0];

        assert_eq!(
            Metric::Cie76.distance(&white, &red, &green),
            Cie76::new(white).distance(&red, &green),
            "CIE76 metric"
        );
        assert_eq!(
            Metric::Oklab.distance(&white, &red, &green),
            Oklab(OkVersion::Original).distance(&red, &green),
            "Oklab metric"
        );
        assert_eq!(
            Metric::Oklrab.distance(&white, &red, &green),
            Oklab(OkVersion::Revised).distance(&red, &green),
            "Oklrab metric"
        );
    }

    #[test]
    fn test_metric_names() {
        for metric in [Metric::Cie76, Metric::Oklab, Metric::Oklrab] {
            assert_eq!(
                metric.to_string().parse::<Metric>(),
                Ok(metric),
                "name of {:?} must parse",
                metric
            );
        }

        assert_eq!(" Ok ".parse::<Metric>(), Ok(Metric::Oklab), "alias");
        assert_eq!(
            "lab".parse::<Metric>(),
            Err(ConfigError::UnknownMetric("lab".to_string())),
            "unknown metric"
        );
    }

    #[test]
    fn test_find_closest() {
        let palette = [[0.0, 0.0, 0.0], [255.0, 255.0, 255.0], [128.0, 128.0, 128.0]];
        let dark = [30.0, 30.0, 30.0];

        assert_eq!(
            find_closest(&dark, &palette, &Cie76::default()),
            Some(0),
            "dark gray is closest to black"
        );
        let metric: &dyn PerceptualDistance = &Oklab(OkVersion::Revised);
        assert_eq!(
            find_closest(&[240.0, 240.0, 240.0], &palette, metric),
            Some(1),
            "light gray is closest to white"
        );
        assert_eq!(
            find_closest(&dark, &[], &Cie76::default()),
            None,
            "no candidates"
        );

        let invalid = Cie76::new(WhitePoint::new(0.0, 0.0, 0.0));
        assert_eq!(
            find_closest(&dark, &palette, &invalid),
            Some(0),
            "invalid white point still picks a candidate"
        );
    }

    #[test]
    fn test_share_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cie76>();
        assert_send_sync::<Oklab>();
        assert_send_sync::<crate::DistanceConfig>();

        let metric = Cie76::default();
        let rows = [[0.0, 0.0, 0.0], [128.0, 64.0, 32.0], [255.0, 255.0, 255.0]];
        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = rows
                .iter()
                .map(|row| scope.spawn(move || metric.distance(row, &[255.0, 0.0, 0.0])))
                .collect();
            handles.into_iter().map(|h| h.join()).collect()
        });

        for (row, result) in rows.iter().zip(results) {
            assert_eq!(
                result.ok(),
                Some(delta_e_squared(row, &[255.0, 0.0, 0.0])),
                "threaded result for {:?} matches sequential one",
                row
            );
        }
    }
}

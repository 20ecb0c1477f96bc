#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::WhitePoint;
use crate::error::ConfigError;
use crate::metric::{Metric, PerceptualDistance};
use crate::util::{Env, Environment};
use crate::Float;

/// The environment variable selecting the metric.
pub const METRIC_VAR: &str = "DELTAE_METRIC";

/// The environment variable overriding the white point.
pub const WHITE_POINT_VAR: &str = "DELTAE_WHITE_POINT";

/// A perceptual distance configuration.
///
/// A configuration combines a [`Metric`] with a [`WhitePoint`]. The default
/// is CIE76 with D65, which is exactly [`delta_e_squared`](crate::delta_e_squared).
/// Since it implements [`PerceptualDistance`], a configuration can be passed
/// wherever a strategy is expected.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "deltae"))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DistanceConfig {
    /// The metric.
    pub metric: Metric,
    /// The white point, which only [`Metric::Cie76`] uses.
    pub white_point: WhitePoint,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl DistanceConfig {
    /// Compute the squared distance between two sRGB colors with channels in
    /// `0..=255`.
    pub fn distance(&self, color1: [Float; 3], color2: [Float; 3]) -> Float {
        self.metric.distance(&self.white_point, &color1, &color2)
    }

    /// Get the metric. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[getter(metric)]
    pub fn py_metric(&self) -> Metric {
        self.metric
    }

    /// Get the white point. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[getter(white_point)]
    pub fn py_white_point(&self) -> WhitePoint {
        self.white_point
    }

    /// Determine the configuration based on environment variables.
    ///
    /// This method reads the metric from `DELTAE_METRIC` and the white point
    /// from `DELTAE_WHITE_POINT`. Unset or blank variables keep the default,
    /// whereas malformed values are errors.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_environment() -> PyResult<Self> {
        Ok(config_from_environment(&Env::default())?)
    }
}

#[cfg(not(feature = "pyffi"))]
impl DistanceConfig {
    /// Determine the configuration based on environment variables.
    ///
    /// This method reads the metric from `DELTAE_METRIC` and the white point
    /// from `DELTAE_WHITE_POINT`. Unset or blank variables keep the default,
    /// whereas malformed values are errors.
    pub fn from_environment() -> Result<Self, ConfigError> {
        config_from_environment(&Env::default())
    }
}

impl PerceptualDistance for DistanceConfig {
    #[inline]
    fn distance(&self, color1: &[Float; 3], color2: &[Float; 3]) -> Float {
        self.metric.distance(&self.white_point, color1, color2)
    }
}

fn read_var(env: &impl Environment, key: &'static str) -> Result<Option<String>, ConfigError> {
    env.read_non_empty(key).map_err(|_| {
        tracing::warn!(key, "environment variable is not valid Unicode");
        ConfigError::NotUnicode(key)
    })
}

pub(crate) fn config_from_environment(
    env: &impl Environment,
) -> Result<DistanceConfig, ConfigError> {
    let mut config = DistanceConfig::default();

    if let Some(value) = read_var(env, METRIC_VAR)? {
        config.metric = value.parse().inspect_err(|error| {
            tracing::warn!(key = METRIC_VAR, %value, %error, "rejecting metric");
        })?;
    }

    if let Some(value) = read_var(env, WHITE_POINT_VAR)? {
        config.white_point = value.parse().inspect_err(|error| {
            tracing::warn!(key = WHITE_POINT_VAR, %value, %error, "rejecting white point");
        })?;
    }

    tracing::debug!(
        metric = %config.metric,
        white_point = %config.white_point,
        "resolved distance configuration"
    );
    Ok(config)
}

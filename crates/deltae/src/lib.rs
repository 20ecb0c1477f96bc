//! # Delta E
//!
//! This crate computes the perceptual difference between two sRGB colors. It
//! converts each color from gamma-encoded sRGB to CIE XYZ and then to CIELAB,
//! where it measures the squared Euclidian distance, i.e., the square of
//! [CIE76](https://en.wikipedia.org/wiki/Color_difference#CIE76) Delta E.
//!
//!
//! ## 1. Overview
//!
//! The pipeline consists of four pure functions, each of which is public for
//! composability and testing:
//!
//!   * [`linearize_channel`] removes sRGB's gamma from one channel value in
//!     `0..=255`, producing linear light in `0..=1`.
//!   * [`srgb_to_xyz`] linearizes all three channels and converts to XYZ,
//!     scaled so that white has Y = 100.
//!   * [`xyz_to_lab`] converts XYZ to CIELAB relative to a [`WhitePoint`],
//!     typically [`WhitePoint::D65`].
//!   * [`squared_distance`] computes the squared Euclidian distance between two
//!     triples in the same color space.
//!
//! [`delta_e_squared`] composes all four and is the one function most callers
//! need:
//!
//! ```
//! # use deltae::delta_e_squared;
//! let red = [255.0, 0.0, 0.0];
//! let green = [0.0, 255.0, 0.0];
//! assert!(delta_e_squared(&red, &green) > 25_000.0);
//! ```
//!
//! Colors are plain `[Float; 3]` triples. The caller keeps track of whether a
//! triple holds sRGB, XYZ, or CIELAB coordinates. No function validates its
//! inputs; invalid inputs, e.g., a white point with a zero component, produce
//! infinities or not-a-numbers as IEEE 754 prescribes.
//!
//! Since there is no shared mutable state, all functions are safe to call
//! from any number of threads, e.g., for processing the rows of an image in
//! parallel.
//!
//!
//! ## 2. Other Metrics
//!
//! The [`metric`] module generalizes the pipeline with the
//! [`PerceptualDistance`](metric::PerceptualDistance) trait. Besides CIE76,
//! it implements squared distance in Oklab and Oklrab, which are more
//! perceptually uniform, particularly for blues. [`DistanceConfig`] selects a
//! metric and white point at runtime, including from the `DELTAE_METRIC` and
//! `DELTAE_WHITE_POINT` environment variables.
//!
//!
//! ## 3. Optional Features
//!
//! Deltae supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls deltae's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod config;
mod core;
pub mod error;
pub mod metric;
mod util;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::{to_eq_bits, to_eq_triple};

pub use config::{DistanceConfig, METRIC_VAR, WHITE_POINT_VAR};
pub use core::{
    delta_e_ok_squared, delta_e_squared, delta_e_squared_with, linearize_channel,
    squared_distance, srgb_to_xyz, xyz_to_lab, OkVersion, WhitePoint,
};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[cfg(feature = "pyffi")]
mod py {
    //! Python wrappers for functions that take triples by reference.

    use super::{Float, OkVersion, WhitePoint};
    use pyo3::prelude::*;

    /// Remove sRGB gamma from a single channel value in `0..=255`.
    #[pyfunction]
    pub(super) fn linearize_channel(value: Float) -> Float {
        super::linearize_channel(value)
    }

    /// Convert an sRGB triple with channels in `0..=255` to XYZ with Y = 100
    /// for white.
    #[pyfunction]
    pub(super) fn srgb_to_xyz(rgb: [Float; 3]) -> [Float; 3] {
        super::srgb_to_xyz(&rgb)
    }

    /// Convert an XYZ triple to CIELAB relative to the white point, which
    /// defaults to D65.
    #[pyfunction]
    #[pyo3(signature = (xyz, white_point=None))]
    pub(super) fn xyz_to_lab(xyz: [Float; 3], white_point: Option<WhitePoint>) -> [Float; 3] {
        super::xyz_to_lab(&xyz, &white_point.unwrap_or_default())
    }

    /// Compute the squared Euclidian distance between two triples.
    #[pyfunction]
    pub(super) fn squared_distance(triple1: [Float; 3], triple2: [Float; 3]) -> Float {
        super::squared_distance(&triple1, &triple2)
    }

    /// Compute the squared CIE76 Delta E between two sRGB colors.
    #[pyfunction]
    pub(super) fn delta_e_squared(color1: [Float; 3], color2: [Float; 3]) -> Float {
        super::delta_e_squared(&color1, &color2)
    }

    /// Compute the squared distance between two sRGB colors in Oklab or
    /// Oklrab.
    #[pyfunction]
    #[pyo3(signature = (color1, color2, version=OkVersion::Original))]
    pub(super) fn delta_e_ok_squared(
        color1: [Float; 3],
        color2: [Float; 3],
        version: OkVersion,
    ) -> Float {
        super::delta_e_ok_squared(&color1, &color2, version)
    }
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn deltae(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(py::linearize_channel, m)?)?;
    m.add_function(wrap_pyfunction!(py::srgb_to_xyz, m)?)?;
    m.add_function(wrap_pyfunction!(py::xyz_to_lab, m)?)?;
    m.add_function(wrap_pyfunction!(py::squared_distance, m)?)?;
    m.add_function(wrap_pyfunction!(py::delta_e_squared, m)?)?;
    m.add_function(wrap_pyfunction!(py::delta_e_ok_squared, m)?)?;

    m.add_class::<DistanceConfig>()?;
    m.add_class::<metric::Metric>()?;
    m.add_class::<OkVersion>()?;
    m.add_class::<WhitePoint>()?;

    m.add("D65", WhitePoint::D65)?;

    Ok(())
}

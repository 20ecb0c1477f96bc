#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{oklab_to_oklrab, srgb_to_xyz, xyz_to_lab, xyz_to_oklab, WhitePoint};
use crate::Float;

/// Compute the squared Euclidian distance between two triples.
///
/// Both triples must be in the same color space. The result is not
/// square-rooted, which preserves ordering and saves a square root per
/// comparison. The function is commutative and zero exactly when both triples
/// are equal coordinate by coordinate.
///
/// # Examples
///
/// ```
/// # use deltae::squared_distance;
/// assert_eq!(squared_distance(&[1.0, 2.0, 3.0], &[4.0, 6.0, 3.0]), 25.0);
/// ```
#[inline]
pub fn squared_distance(triple1: &[Float; 3], triple2: &[Float; 3]) -> Float {
    let d1 = triple1[0] - triple2[0];
    let d2 = triple1[1] - triple2[1];
    let d3 = triple1[2] - triple2[2];

    d1.mul_add(d1, d2.mul_add(d2, d3 * d3))
}

/// Compute the squared CIE76 Delta E between two sRGB colors.
///
/// This function converts both colors, with channels in `0..=255`, to CIELAB
/// relative to [`WhitePoint::D65`] and returns their [`squared_distance`]. It
/// is the one function most callers need.
///
/// # Examples
///
/// ```
/// # use deltae::delta_e_squared;
/// let red = [255.0, 0.0, 0.0];
/// let green = [0.0, 255.0, 0.0];
/// assert!(delta_e_squared(&red, &green) > 10_000.0);
///
/// let white = [255.0, 255.0, 255.0];
/// let almost_white = [254.0, 254.0, 254.0];
/// assert!(delta_e_squared(&white, &almost_white) < 1.0);
/// ```
#[inline]
pub fn delta_e_squared(color1: &[Float; 3], color2: &[Float; 3]) -> Float {
    delta_e_squared_with(&WhitePoint::D65, color1, color2)
}

/// Compute the squared CIE76 Delta E between two sRGB colors relative to the
/// given white point.
pub fn delta_e_squared_with(
    white_point: &WhitePoint,
    color1: &[Float; 3],
    color2: &[Float; 3],
) -> Float {
    let lab1 = xyz_to_lab(&srgb_to_xyz(color1), white_point);
    let lab2 = xyz_to_lab(&srgb_to_xyz(color2), white_point);
    squared_distance(&lab1, &lab2)
}

// --------------------------------------------------------------------------------------------------------------------

/// The version of Oklab to use.
///
/// Oklab's original lightness L is visibly biased towards dark tones. The
/// revised lightness Lr of Oklrab corrects that bias and closely resembles
/// CIELAB's lightness, without affecting a and b.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "deltae")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OkVersion {
    /// Oklab with the original lightness L.
    #[default]
    Original,
    /// Oklrab with the revised lightness Lr.
    Revised,
}

/// Compute the squared Euclidian distance between two sRGB colors in Oklab or
/// Oklrab.
///
/// Oklab coordinates are roughly a hundred times smaller than CIELAB's.
/// Hence results are not comparable with [`delta_e_squared`].
///
/// # Examples
///
/// ```
/// # use deltae::{delta_e_ok_squared, OkVersion};
/// let red = [255.0, 0.0, 0.0];
/// let green = [0.0, 255.0, 0.0];
/// let d = delta_e_ok_squared(&red, &green, OkVersion::Original);
/// assert!(0.27 < d && d < 0.28);
/// ```
pub fn delta_e_ok_squared(color1: &[Float; 3], color2: &[Float; 3], version: OkVersion) -> Float {
    let to_ok = |color: &[Float; 3]| {
        let oklab = xyz_to_oklab(&srgb_to_xyz(color));
        match version {
            OkVersion::Original => oklab,
            OkVersion::Revised => oklab_to_oklrab(&oklab),
        }
    };

    squared_distance(&to_ok(color1), &to_ok(color2))
}

// --------------------------------------------------------------------------------------------------------------------

/// Find the candidate color closest to the origin.
///
/// This function compares the origin to every candidate color, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate color—or `None` if there are no candidates. Ties go to
/// the earlier candidate. A not-a-number distance is farther than any other
/// distance, so the first candidate wins if all distances are not-a-number.
pub(crate) fn find_closest<'c, C, F>(
    origin: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if min_index.is_none()
            || distance < min_distance
            || (min_distance.is_nan() && !distance.is_nan())
        {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

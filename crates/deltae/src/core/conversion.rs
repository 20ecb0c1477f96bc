use super::{multiply, WhitePoint};
use crate::Float;

/// Remove sRGB gamma from a single channel value.
///
/// This function normalizes the encoded value from `0..=255` to `0..=1` and
/// then applies sRGB's electro-optical transfer function, which is linear near
/// black and a 2.4 power law elsewhere. The result is linear light in `0..=1`.
///
/// Values outside `0..=255` are not rejected. They are extrapolated with the
/// same formula.
///
/// # Examples
///
/// ```
/// # use deltae::{assert_close_enough, linearize_channel};
/// assert_eq!(linearize_channel(0.0), 0.0);
/// assert_close_enough!(linearize_channel(255.0), 1.0);
/// assert!(linearize_channel(128.0) < 0.5);
/// ```
#[inline]
pub fn linearize_channel(value: Float) -> Float {
    let value = value / 255.0;
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

// --------------------------------------------------------------------------------------------------------------------
// https://en.wikipedia.org/wiki/SRGB#From_sRGB_to_CIE_XYZ

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124, 0.3576, 0.1805 ],
    [ 0.2126, 0.7152, 0.0722 ],
    [ 0.0193, 0.1192, 0.9505 ],
];

/// Convert an encoded sRGB triple to CIE XYZ.
///
/// This function linearizes each channel with [`linearize_channel`], applies
/// the sRGB-to-XYZ matrix, and scales the result by 100. As a result, the
/// Y of white is 100, which is the same scale as [`WhitePoint::D65`]. Triples
/// with channels in `0..=255` map to non-negative XYZ.
///
/// # Examples
///
/// ```
/// # use deltae::{assert_same_triple, srgb_to_xyz};
/// assert_same_triple!(&srgb_to_xyz(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0]);
/// assert_same_triple!(&srgb_to_xyz(&[255.0, 255.0, 255.0]), &[95.05, 100.0, 108.9]);
/// ```
pub fn srgb_to_xyz(rgb: &[Float; 3]) -> [Float; 3] {
    let linear = [
        linearize_channel(rgb[0]),
        linearize_channel(rgb[1]),
        linearize_channel(rgb[2]),
    ];
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &linear);
    [100.0 * x, 100.0 * y, 100.0 * z]
}

// --------------------------------------------------------------------------------------------------------------------
// https://en.wikipedia.org/wiki/CIELAB_color_space#Converting_between_CIELAB_and_CIEXYZ_coordinates

const DELTA: Float = 6.0 / 29.0;
const DELTA_CUBED: Float = DELTA * DELTA * DELTA;
const SLOPE: Float = 1.0 / (3.0 * DELTA * DELTA);
const OFFSET: Float = 4.0 / 29.0;

/// CIELAB's transfer function: a cube root with a linear segment near zero.
#[inline]
fn lab_transfer(t: Float) -> Float {
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        SLOPE.mul_add(t, OFFSET)
    }
}

/// Convert a CIE XYZ triple to CIELAB relative to the given white point.
///
/// The white point must have the same scale as the XYZ coordinates and
/// strictly positive components. Zero components divide by zero and produce
/// infinities or not-a-numbers, which this function passes through
/// unchanged. For XYZ derived from in-gamut sRGB, lightness L ranges
/// `0..=100`, whereas a and b typically stay within `-128..=127`.
///
/// # Examples
///
/// ```
/// # use deltae::{assert_same_triple, xyz_to_lab, WhitePoint};
/// let white = WhitePoint::D65;
/// assert_same_triple!(&xyz_to_lab(white.as_ref(), &white), &[100.0, 0.0, 0.0]);
/// ```
#[allow(non_snake_case)]
pub fn xyz_to_lab(xyz: &[Float; 3], white_point: &WhitePoint) -> [Float; 3] {
    let [x, y, z] = *xyz;
    let [xn, yn, zn] = *white_point.as_ref();

    let fx = lab_transfer(x / xn);
    let fy = lab_transfer(y / yn);
    let fz = lab_transfer(z / zn);

    let L = fy.mul_add(116.0, -16.0);
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    [L, a, b]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// Convert XYZ scaled to Y = 100 to Oklab. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise cube root.
pub(crate) fn xyz_to_oklab(xyz: &[Float; 3]) -> [Float; 3] {
    let unit = [xyz[0] / 100.0, xyz[1] / 100.0, xyz[2] / 100.0];
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, &unit);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

const K1: Float = 0.206;
const K2: Float = 0.03;
const K3: Float = (1.0 + K1) / (1.0 + K2);

/// Replace Oklab's lightness L with the [improved lightness
/// Lr](https://bottosson.github.io/posts/colorpicker/#intermission---a-new-lightness-estimate-for-oklab),
/// turning Oklab into Oklrab.
pub(crate) fn oklab_to_oklrab(oklab: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *oklab;
    let k3lk1 = K3.mul_add(l, -K1);
    [
        0.5 * (k3lk1 + k3lk1.mul_add(k3lk1, 4.0 * K2 * K3 * l).sqrt()),
        a,
        b,
    ]
}

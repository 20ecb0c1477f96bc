mod conversion;
mod difference;
mod equality;
mod math;
mod white;

// conversion
pub use conversion::{linearize_channel, srgb_to_xyz, xyz_to_lab};
pub(crate) use conversion::{oklab_to_oklrab, xyz_to_oklab};

// difference
pub use difference::{
    delta_e_ok_squared, delta_e_squared, delta_e_squared_with, squared_distance, OkVersion,
};
pub(crate) use difference::find_closest;

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::{to_eq_bits, to_eq_triple};

// math
pub(crate) use math::{multiply, FloatExt};

// white
pub use white::WhitePoint;

//! Mathematical utilities: the interpolation kernel and nice-number rounding.

pub mod kernel;
pub mod nice;

pub use kernel::*;
pub use nice::*;

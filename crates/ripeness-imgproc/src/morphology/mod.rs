//! Binary and grayscale morphology.
//!
//! Neighbours that fall outside the image are ignored, so erosion never eats
//! into a region from the image border and dilation never grows from it.

mod error;
pub use error::MorphologyError;

mod kernels;
pub use kernels::{Kernel, KernelShape};

mod ops;
pub use ops::{close, dilate, erode, open};

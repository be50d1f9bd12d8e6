#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image basic operations module.
pub mod core;

/// utilities to draw on images.
pub mod draw;

/// image filtering module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// binary morphology module.
pub mod morphology;

/// border handling for neighbourhood operations.
pub mod padding;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;

/// operations to threshold images.
pub mod threshold;

use ripeness_image::ImageError;

/// Errors related to morphological operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MorphologyError {
    /// The provided kernel has a zero-sized side.
    #[error("Kernel is empty")]
    EmptyKernel,

    /// The kernel must have odd dimensions so it has a center.
    #[error("Kernel must have odd sides, got {0}x{1}")]
    EvenSizedKernel(usize, usize),

    /// The source and destination images are incompatible.
    #[error(transparent)]
    Image(#[from] ImageError),
}

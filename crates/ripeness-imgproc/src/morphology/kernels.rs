use super::MorphologyError;

/// Shapes of morphological `Kernels`.
///
/// All kernels are centered at their geometric center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelShape {
    /// A square box structuring element; every pixel of the box is active.
    Box {
        /// `size` - The side length of the square kernel (size x size).
        size: usize,
    },
}

/// A morphological structuring element.
///
/// Stores a binary mask where 1 indicates pixels included in the operation
/// and 0 indicates excluded pixels.
///
/// # Example
///
/// ```rust
/// use ripeness_imgproc::morphology::{Kernel, KernelShape};
///
/// let kernel = Kernel::new(KernelShape::Box { size: 5 }).unwrap();
/// assert_eq!(kernel.width(), 5);
/// assert_eq!(kernel.height(), 5);
/// assert_eq!(kernel.pad(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Kernel {
    /// Create a morphological kernel from a shape.
    ///
    /// # Errors
    ///
    /// Fails if the size is zero or even.
    pub fn new(shape: KernelShape) -> Result<Self, MorphologyError> {
        let size = match shape {
            KernelShape::Box { size } => size,
        };
        if size == 0 {
            return Err(MorphologyError::EmptyKernel);
        }
        if size % 2 == 0 {
            return Err(MorphologyError::EvenSizedKernel(size, size));
        }

        let data = vec![1; size * size];

        Ok(Self {
            data,
            width: size,
            height: size,
        })
    }

    /// Get a reference to the kernel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the width of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the padding for the kernel (offset from center).
    pub fn pad(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// Offsets `(dy, dx)` of the active kernel elements relative to the center.
    pub(crate) fn active_offsets(&self) -> Vec<(isize, isize)> {
        let (pad_h, pad_w) = self.pad();
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1)
            .map(|(i, _)| {
                let (kh, kw) = (i / self.width, i % self.width);
                (kh as isize - pad_h as isize, kw as isize - pad_w as isize)
            })
            .collect()
    }
}

use ripeness_image::Image;
use ripeness_imgproc::{
    color, filter,
    morphology::{self, Kernel, KernelShape},
    padding::PaddingMode,
    threshold::{self, MASK_CLEAR},
};

use crate::band::Band;
use crate::error::RipenessError;

/// A binary mask: `255` marks a set pixel, `0` a cleared one.
pub type Mask = Image<u8, 1>;

/// Converts RGB images to smoothed 8-bit HSV.
#[derive(Debug, Clone)]
pub struct ColorSpaceConverter {
    kernel_size: usize,
}

impl ColorSpaceConverter {
    /// Create a converter smoothing with a `kernel_size x kernel_size` gaussian.
    pub fn new(kernel_size: usize) -> Self {
        Self { kernel_size }
    }

    /// Convert `rgb` to HSV and blur the result.
    ///
    /// # Errors
    ///
    /// Returns [`RipenessError::InvalidImage`] if the image has a zero dimension.
    pub fn convert(&self, rgb: &Image<u8, 3>) -> Result<Image<u8, 3>, RipenessError> {
        if rgb.size().is_empty() {
            return Err(RipenessError::InvalidImage(format!(
                "image has a zero dimension: {}",
                rgb.size()
            )));
        }

        let mut hsv = Image::from_size_val(rgb.size(), 0u8)?;
        color::hsv_from_rgb(rgb, &mut hsv)?;

        let mut smoothed = Image::from_size_val(rgb.size(), 0u8)?;
        filter::gaussian_blur(
            &hsv,
            &mut smoothed,
            (self.kernel_size, self.kernel_size),
            (0.0, 0.0),
            PaddingMode::Reflect101,
        )?;

        Ok(smoothed)
    }
}

/// Threshold an HSV image against one band.
///
/// A pixel is set iff all three channels lie inside the band's inclusive
/// bounds.
///
/// # Errors
///
/// Returns [`RipenessError::InvalidBandConfig`] for a malformed band.
pub fn band_mask(hsv: &Image<u8, 3>, band: &Band) -> Result<Mask, RipenessError> {
    band.validate()?;
    let mut mask = Mask::from_size_val(hsv.size(), MASK_CLEAR)?;
    threshold::in_range(hsv, &mut mask, &band.lower, &band.upper)?;
    Ok(mask)
}

/// Removes specks and fills small holes in masks.
#[derive(Debug, Clone)]
pub struct MaskCleaner {
    kernel: Kernel,
}

impl MaskCleaner {
    /// Create a cleaner with a square all-ones structuring element.
    pub fn new(kernel_size: usize) -> Result<Self, RipenessError> {
        let kernel = Kernel::new(KernelShape::Box { size: kernel_size })?;
        Ok(Self { kernel })
    }

    /// Opening followed by closing. The order matters: opening first drops
    /// isolated specks before closing could merge them into blobs.
    pub fn clean(&self, mask: &Mask) -> Result<Mask, RipenessError> {
        let mut opened = Mask::from_size_val(mask.size(), MASK_CLEAR)?;
        morphology::open(mask, &mut opened, &self.kernel)?;

        let mut cleaned = Mask::from_size_val(mask.size(), MASK_CLEAR)?;
        morphology::close(&opened, &mut cleaned, &self.kernel)?;

        Ok(cleaned)
    }
}

use ripeness_image::{Image, ImageError};

use super::{kernels, separable_filter, FloatConversion};
use crate::padding::PaddingMode;

/// Blur an image using a gaussian blur filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The size of the kernel (kernel_x, kernel_y).
/// * `sigma` - The sigma of the gaussian kernel (sigma_x, sigma_y). Non-positive
///   values derive sigma from the kernel size.
/// * `padding` - How pixels past the image border are read.
///
/// # Example
///
/// ```
/// use ripeness_image::{Image, ImageSize};
/// use ripeness_imgproc::filter::gaussian_blur;
/// use ripeness_imgproc::padding::PaddingMode;
///
/// let image = Image::<u8, 3>::from_size_pixel(
///     ImageSize { width: 8, height: 8 },
///     [10, 200, 30],
/// ).unwrap();
///
/// let mut blurred = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
/// gaussian_blur(&image, &mut blurred, (5, 5), (0.0, 0.0), PaddingMode::Reflect101).unwrap();
///
/// assert_eq!(blurred.as_slice(), image.as_slice());
/// ```
pub fn gaussian_blur<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_size: (usize, usize),
    sigma: (f32, f32),
    padding: PaddingMode,
) -> Result<(), ImageError>
where
    T: FloatConversion + Send + Sync,
{
    let kernel_x = kernels::gaussian_kernel_1d(kernel_size.0, sigma.0);
    let kernel_y = kernels::gaussian_kernel_1d(kernel_size.1, sigma.1);
    separable_filter(src, dst, &kernel_x, &kernel_y, padding)?;
    Ok(())
}

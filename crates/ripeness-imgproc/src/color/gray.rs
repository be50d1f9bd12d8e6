use crate::parallel;
use ripeness_image::{Image, ImageError};

/// Convert a grayscale image to an RGB image by replicating the grayscale value across all three channels.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use ripeness_image::{Image, ImageSize};
/// use ripeness_imgproc::color::rgb_from_gray;
///
/// let mask = Image::<u8, 1>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![255u8; 4 * 5],
/// )
/// .unwrap();
///
/// let mut rgb = Image::<u8, 3>::from_size_val(mask.size(), 0).unwrap();
///
/// rgb_from_gray(&mask, &mut rgb).unwrap();
/// assert!(rgb.as_slice().iter().all(|&v| v == 255));
/// ```
pub fn rgb_from_gray<T>(src: &Image<T, 1>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[0];
        dst_pixel[2] = src_pixel[0];
    });

    Ok(())
}

use rayon::prelude::*;
use ripeness_image::{Image, ImageError};

use crate::interpolation::{interpolate_pixel, InterpolationMode};

/// Resize an image to the size of `dst`.
///
/// Output pixel centers are mapped back onto the source with half-pixel
/// alignment, i.e. `src = (dst + 0.5) * scale - 0.5`.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container, already allocated with the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Fails if either image is empty.
///
/// # Example
///
/// ```
/// use ripeness_image::{Image, ImageSize};
/// use ripeness_imgproc::resize::resize;
/// use ripeness_imgproc::interpolation::InterpolationMode;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize(&image, &mut image_resized, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::EmptyImage(src.width(), src.height()));
    }
    if dst.size().is_empty() {
        return Err(ImageError::EmptyImage(dst.width(), dst.height()));
    }

    let scale_x = src.width() as f32 / dst.width() as f32;
    let scale_y = src.height() as f32 / dst.height() as f32;

    let dst_cols = dst.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_cols * C)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.chunks_exact_mut(C).enumerate() {
                let (u, v) = match interpolation {
                    InterpolationMode::Bilinear => (
                        (x as f32 + 0.5) * scale_x - 0.5,
                        (y as f32 + 0.5) * scale_y - 0.5,
                    ),
                    InterpolationMode::Nearest => (x as f32 * scale_x, y as f32 * scale_y),
                };
                out.copy_from_slice(&interpolate_pixel(src, u, v, interpolation));
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripeness_image::ImageSize;

    #[test]
    fn resize_identity() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([3, 2].into(), vec![1, 2, 3, 4, 5, 6])?;

        for mode in [InterpolationMode::Bilinear, InterpolationMode::Nearest] {
            let mut out = Image::<u8, 1>::from_size_val(image.size(), 0)?;
            resize(&image, &mut out, mode)?;
            assert_eq!(out.as_slice(), image.as_slice());
        }

        Ok(())
    }

    #[test]
    fn resize_nearest_upscale() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([2, 1].into(), vec![0, 255])?;
        let mut out = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 2,
            },
            0,
        )?;

        resize(&image, &mut out, InterpolationMode::Nearest)?;

        assert_eq!(out.as_slice(), &[0, 0, 255, 255, 0, 0, 255, 255]);
        Ok(())
    }

    #[test]
    fn resize_bilinear_downscale() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([4, 1].into(), vec![0, 100, 200, 250])?;
        let mut out = Image::<u8, 1>::from_size_val([2, 1].into(), 0)?;

        resize(&image, &mut out, InterpolationMode::Bilinear)?;

        // samples land halfway between source pixels
        assert_eq!(out.as_slice(), &[50, 225]);
        Ok(())
    }

    #[test]
    fn resize_single_pixel() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([1, 1].into(), vec![9, 8, 7])?;
        let mut out = Image::<u8, 3>::from_size_val([3, 3].into(), 0)?;

        resize(&image, &mut out, InterpolationMode::Bilinear)?;

        assert!(out.as_slice().chunks_exact(3).all(|p| p == [9, 8, 7]));
        Ok(())
    }

    #[test]
    fn resize_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([0, 3].into(), vec![])?;
        let mut out = Image::<u8, 1>::from_size_val([3, 3].into(), 0)?;
        assert_eq!(
            resize(&image, &mut out, InterpolationMode::Nearest),
            Err(ImageError::EmptyImage(0, 3))
        );
        Ok(())
    }
}

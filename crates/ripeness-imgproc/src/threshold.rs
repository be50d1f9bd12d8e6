use crate::parallel;
use ripeness_image::{Image, ImageError};

/// Value written to the mask for pixels inside the range.
pub const MASK_SET: u8 = 255;

/// Value written to the mask for pixels outside the range.
pub const MASK_CLEAR: u8 = 0;

/// Apply a range threshold to an image.
///
/// A pixel is set in the mask if and only if every channel lies within the
/// inclusive bounds `lower_bound[c] <= src[c] <= upper_bound[c]`.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output mask image with a single channel.
/// * `lower_bound` - The lower bound for each channel.
/// * `upper_bound` - The upper bound for each channel.
///
/// # Returns
///
/// The mask image with [`MASK_SET`] for in-range pixels and [`MASK_CLEAR`] elsewhere.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use ripeness_image::{Image, ImageSize};
/// use ripeness_imgproc::threshold::in_range;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 3>::new(
///    ImageSize {
///       width: 2,
///       height: 1,
///    },
///    data,
/// ).unwrap();
///
/// let mut thresholded = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// in_range(&image, &mut thresholded, &[100, 150, 0], &[200, 200, 200]).unwrap();
/// assert_eq!(thresholded.as_slice(), &[255, 0]);
/// ```
pub fn in_range<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<u8, 1>,
    lower_bound: &[T; C],
    upper_bound: &[T; C],
) -> Result<(), ImageError>
where
    T: Clone + Send + Sync + PartialOrd,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // parallelize the operation by rows
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let is_in_range = src_pixel
            .iter()
            .zip(lower_bound.iter().zip(upper_bound.iter()))
            .all(|(src_val, (lower, upper))| src_val >= lower && src_val <= upper);
        dst_pixel[0] = if is_in_range { MASK_SET } else { MASK_CLEAR };
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use ripeness_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_in_range() -> Result<(), ImageError> {
        let data = vec![10u8, 20, 30, 40, 50, 60];
        let image = Image::<_, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            data,
        )?;

        let mut thresholded = Image::<u8, 1>::from_size_val(image.size(), 0)?;

        super::in_range(&image, &mut thresholded, &[10, 20, 30], &[40, 50, 60])?;
        assert_eq!(thresholded.as_slice(), &[255, 255]);

        // bounds are inclusive on both ends, and a single channel miss clears the pixel
        super::in_range(&image, &mut thresholded, &[11, 20, 30], &[40, 50, 59])?;
        assert_eq!(thresholded.as_slice(), &[0, 0]);

        super::in_range(&image, &mut thresholded, &[0, 0, 0], &[40, 50, 59])?;
        assert_eq!(thresholded.as_slice(), &[255, 0]);

        Ok(())
    }

    #[test]
    fn test_in_range_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;
        let mut mask = Image::<u8, 1>::from_size_val([2, 1].into(), 0)?;
        assert_eq!(
            super::in_range(&image, &mut mask, &[0, 0, 0], &[1, 1, 1]),
            Err(ImageError::InvalidImageSize(2, 2, 2, 1))
        );
        Ok(())
    }
}

use crate::parallel;
use ripeness_image::{Image, ImageError, ImageSize};

/// Compute the weighted sum of two images.
///
/// `dst = src1 * alpha + src2 * beta + gamma`, rounded and saturated to `[0, 255]`.
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `alpha` - The weight of the first image.
/// * `src2` - The second input image.
/// * `beta` - The weight of the second image.
/// * `gamma` - A scalar added to each sum.
/// * `dst` - The output image.
///
/// # Example
///
/// ```
/// use ripeness_image::{Image, ImageSize};
/// use ripeness_imgproc::core::add_weighted;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let base = Image::<u8, 1>::new(size, vec![255, 0]).unwrap();
/// let overlay = Image::<u8, 1>::new(size, vec![255, 255]).unwrap();
/// let mut out = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// add_weighted(&base, 1.0, &overlay, 0.6, 0.0, &mut out).unwrap();
/// assert_eq!(out.as_slice(), &[255, 153]);
/// ```
pub fn add_weighted<const C: usize>(
    src1: &Image<u8, C>,
    alpha: f32,
    src2: &Image<u8, C>,
    beta: f32,
    gamma: f32,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_two(src1, src2, dst, |a, b, out| {
        for ((a, b), out) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            let val = *a as f32 * alpha + *b as f32 * beta + gamma;
            *out = val.round().clamp(0.0, 255.0) as u8;
        }
    });

    Ok(())
}

/// Copy `src` into `dst` with its top-left corner at `(x, y)`.
///
/// # Errors
///
/// Fails if `src` does not fit inside `dst` at the given offset.
pub fn paste<T: Copy, const C: usize>(
    dst: &mut Image<T, C>,
    src: &Image<T, C>,
    (x, y): (usize, usize),
) -> Result<(), ImageError> {
    if x + src.width() > dst.width() || y + src.height() > dst.height() {
        return Err(ImageError::InvalidImageSize(
            x + src.width(),
            y + src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let (src_stride, dst_stride) = (src.width() * C, dst.width() * C);
    if src_stride == 0 {
        return Ok(());
    }

    let dst_data = dst.as_slice_mut();
    for (row, src_row) in src.as_slice().chunks_exact(src_stride).enumerate() {
        let start = (y + row) * dst_stride + x * C;
        dst_data[start..start + src_stride].copy_from_slice(src_row);
    }

    Ok(())
}

/// Concatenate images side by side, left to right.
///
/// # Errors
///
/// Fails if the images do not share the same height.
pub fn hconcat<T: Copy + Default, const C: usize>(
    images: &[Image<T, C>],
) -> Result<Image<T, C>, ImageError> {
    let height = images.first().map_or(0, |img| img.height());
    let width = images.iter().map(|img| img.width()).sum();

    let mut out = Image::from_size_val(ImageSize { width, height }, T::default())?;
    let mut x = 0;
    for img in images {
        if img.height() != height {
            return Err(ImageError::InvalidImageSize(
                img.width(),
                img.height(),
                img.width(),
                height,
            ));
        }
        paste(&mut out, img, (x, 0))?;
        x += img.width();
    }

    Ok(out)
}

/// Stack images on top of each other, top to bottom.
///
/// # Errors
///
/// Fails if the images do not share the same width.
pub fn vconcat<T: Copy + Default, const C: usize>(
    images: &[Image<T, C>],
) -> Result<Image<T, C>, ImageError> {
    let width = images.first().map_or(0, |img| img.width());
    let height = images.iter().map(|img| img.height()).sum();

    let mut out = Image::from_size_val(ImageSize { width, height }, T::default())?;
    let mut y = 0;
    for img in images {
        if img.width() != width {
            return Err(ImageError::InvalidImageSize(
                img.width(),
                img.height(),
                width,
                img.height(),
            ));
        }
        paste(&mut out, img, (0, y))?;
        y += img.height();
    }

    Ok(out)
}

use rayon::prelude::*;
use ripeness_image::{Image, ImageError};

use super::{Kernel, MorphologyError};

fn check_sizes<T, const C: usize>(
    src: &Image<T, C>,
    dst: &Image<T, C>,
) -> Result<(), MorphologyError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }
    Ok(())
}

/// Reduce the kernel neighbourhood of every pixel with `pick`.
///
/// Neighbours outside the image are skipped. The kernel center is always
/// inside, so every neighbourhood has at least one element.
fn reduce_neighbourhood<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    pick: fn(T, T) -> T,
) where
    T: Copy + Send + Sync,
{
    let width = src.width();
    let height = src.height();
    if width == 0 || height == 0 {
        return;
    }

    let offsets = kernel.active_offsets();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_mut(width * C)
        .enumerate()
        .for_each(|(y, row_dst)| {
            for x in 0..width {
                for c in 0..C {
                    let mut acc = src_data[(y * width + x) * C + c];
                    for &(dy, dx) in offsets.iter() {
                        let ny = y as isize + dy;
                        let nx = x as isize + dx;
                        if ny < 0 || nx < 0 || ny >= height as isize || nx >= width as isize {
                            continue;
                        }
                        let val = src_data[(ny as usize * width + nx as usize) * C + c];
                        acc = pick(acc, val);
                    }
                    row_dst[x * C + c] = acc;
                }
            }
        });
}

/// Dilate an image using a [`Kernel`].
///
/// Dilation expands white regions in the image. Each pixel is replaced
/// by the maximum value in the neighborhood defined by the kernel.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The morphological structuring element ([`Kernel`]).
///
/// # Errors
///
/// Fails if the image sizes differ.
pub fn dilate<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), MorphologyError>
where
    T: Copy + Ord + Send + Sync,
{
    check_sizes(src, dst)?;
    reduce_neighbourhood(src, dst, kernel, std::cmp::max);
    Ok(())
}

/// Erode an image using a [`Kernel`].
///
/// Erosion shrinks white regions in the image. Each pixel is replaced
/// by the minimum value in the neighborhood defined by the kernel.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The morphological structuring element ([`Kernel`]).
///
/// # Errors
///
/// Fails if the image sizes differ.
pub fn erode<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), MorphologyError>
where
    T: Copy + Ord + Send + Sync,
{
    check_sizes(src, dst)?;
    reduce_neighbourhood(src, dst, kernel, std::cmp::min);
    Ok(())
}

/// Opening: erosion followed by dilation.
///
/// Removes small objects and smooths object boundaries.
pub fn open<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), MorphologyError>
where
    T: Copy + Ord + Send + Sync,
{
    check_sizes(src, dst)?;
    let mut temp_img = src.clone();
    erode(src, &mut temp_img, kernel)?;
    dilate(&temp_img, dst, kernel)?;
    Ok(())
}

/// Closing: dilation followed by erosion.
///
/// Fills small holes and smooths object boundaries.
pub fn close<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), MorphologyError>
where
    T: Copy + Ord + Send + Sync,
{
    check_sizes(src, dst)?;
    let mut temp_img = src.clone();
    dilate(src, &mut temp_img, kernel)?;
    erode(&temp_img, dst, kernel)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::KernelShape;
    use ripeness_image::ImageSize;

    fn square(size: usize, set: &[(usize, usize)]) -> Result<Image<u8, 1>, ImageError> {
        let mut img = Image::<u8, 1>::from_size_val([size, size].into(), 0)?;
        for &(y, x) in set {
            img.as_slice_mut()[y * size + x] = 255;
        }
        Ok(img)
    }

    #[test]
    fn test_erode_removes_speck() -> Result<(), MorphologyError> {
        let kernel = Kernel::new(KernelShape::Box { size: 3 })?;
        let src = square(5, &[(2, 2)])?;
        let mut dst = src.clone();
        erode(&src, &mut dst, &kernel)?;
        assert!(dst.as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn test_dilate_grows_speck() -> Result<(), MorphologyError> {
        let kernel = Kernel::new(KernelShape::Box { size: 3 })?;
        let src = square(5, &[(2, 2)])?;
        let mut dst = src.clone();
        dilate(&src, &mut dst, &kernel)?;

        #[rustfmt::skip]
        let expected = [
            0, 0, 0, 0, 0,
            0, 255, 255, 255, 0,
            0, 255, 255, 255, 0,
            0, 255, 255, 255, 0,
            0, 0, 0, 0, 0,
        ];
        assert_eq!(dst.as_slice(), &expected);
        Ok(())
    }

    #[test]
    fn test_erode_ignores_border() -> Result<(), MorphologyError> {
        // a fully set image stays fully set: out-of-image neighbours are not zeros
        let kernel = Kernel::new(KernelShape::Box { size: 5 })?;
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 7,
                height: 3,
            },
            255,
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        erode(&src, &mut dst, &kernel)?;
        assert!(dst.as_slice().iter().all(|&v| v == 255));
        Ok(())
    }

    #[test]
    fn test_open_close() -> Result<(), MorphologyError> {
        let kernel = Kernel::new(KernelShape::Box { size: 3 })?;

        // 3x3 block with a hole in its center plus an isolated speck
        let block: Vec<(usize, usize)> = (2..5)
            .flat_map(|y| (2..5).map(move |x| (y, x)))
            .filter(|&p| p != (3, 3))
            .collect();
        let mut set = block.clone();
        set.push((7, 7));
        let src = square(9, &set)?;

        let mut closed = src.clone();
        close(&src, &mut closed, &kernel)?;
        assert_eq!(closed.as_slice()[3 * 9 + 3], 255);
        assert_eq!(closed.as_slice()[7 * 9 + 7], 255);

        let mut opened = src.clone();
        open(&src, &mut opened, &kernel)?;
        assert_eq!(opened.as_slice()[7 * 9 + 7], 0);

        Ok(())
    }

    #[test]
    fn test_size_mismatch() -> Result<(), MorphologyError> {
        let kernel = Kernel::new(KernelShape::Box { size: 3 })?;
        let src = square(4, &[])?;
        let mut dst = square(5, &[])?;
        assert_eq!(
            erode(&src, &mut dst, &kernel),
            Err(MorphologyError::Image(ImageError::InvalidImageSize(
                4, 4, 5, 5
            )))
        );
        Ok(())
    }
}

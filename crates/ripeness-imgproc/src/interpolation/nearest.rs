use ripeness_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// Coordinates are truncated towards the top-left pixel and clamped to the image.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<u8, C>,
    u: f32,
    v: f32,
) -> [u8; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = (u.max(0.0).floor() as usize).min(cols - 1);
    let iv = (v.max(0.0).floor() as usize).min(rows - 1);

    let base = (iv * cols + iu) * C;

    let mut pixel = [0; C];
    pixel.copy_from_slice(&image.as_slice()[base..base + C]);
    pixel
}

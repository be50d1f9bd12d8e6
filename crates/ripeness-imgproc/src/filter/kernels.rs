/// Binomial taps used for small kernels when sigma is derived from the size.
const SMALL_GAUSSIAN_TAPS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[
        0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
    ],
];

/// Derive the gaussian sigma from the kernel size.
pub fn sigma_from_kernel_size(kernel_size: usize) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel, expected to be odd.
/// * `sigma` - The sigma of the gaussian kernel. A non-positive value derives
///   sigma from the kernel size; sizes 1, 3, 5 and 7 then use fixed binomial taps.
///
/// # Returns
///
/// A vector of the kernel, normalized to sum to one.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 && kernel_size % 2 == 1 && kernel_size <= 7 {
        return SMALL_GAUSSIAN_TAPS[kernel_size / 2].to_vec();
    }

    let sigma = if sigma <= 0.0 {
        sigma_from_kernel_size(kernel_size)
    } else {
        sigma
    };

    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size as f32 - 1.0) / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

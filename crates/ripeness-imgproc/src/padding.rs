/// A border type for neighbourhood operations that read past the image edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// This border type reflects the pixel values at the boundary, starting with the pixel 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,
}

impl PaddingMode {
    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i;
            } else if i >= len {
                i = 2 * len - i - 2;
            }
        }
        i as usize
    }

    /// Maps index `i` to a valid index i.e. within `[0, len)` according to the padding mode.
    ///
    /// # Arguments
    /// - `i`: The (possibly out-of-range) coordinate index.
    /// - `len`: The valid length of the dimension, must be greater than zero.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> usize {
        match self {
            PaddingMode::Reflect101 => Self::reflect101(i, len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PaddingMode;

    #[test]
    fn map_index_reflect101() {
        let mode = PaddingMode::Reflect101;
        let mapped: Vec<usize> = (-3..8).map(|i| mode.map_index(i, 5)).collect();
        assert_eq!(mapped, vec![3, 2, 1, 0, 1, 2, 3, 4, 3, 2, 1]);
    }

    #[test]
    fn map_index_reflect101_two_pixels() {
        let mode = PaddingMode::Reflect101;
        let mapped: Vec<usize> = (-3..5).map(|i| mode.map_index(i, 2)).collect();
        assert_eq!(mapped, vec![1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn map_index_single_pixel() {
        assert_eq!(PaddingMode::Reflect101.map_index(-2, 1), 0);
        assert_eq!(PaddingMode::Reflect101.map_index(2, 1), 0);
    }
}

use font8x8::{UnicodeFonts, BASIC_FONTS};
use ripeness_image::Image;

/// Side length in pixels of an unscaled glyph.
pub const GLYPH_SIZE: usize = 8;

/// Helper function to set a pixel's color, handling bounds checking.
#[inline]
fn set_pixel<const C: usize>(img: &mut Image<u8, C>, x: i64, y: i64, color: [u8; C]) {
    if x >= 0 && x < img.cols() as i64 && y >= 0 && y < img.rows() as i64 {
        let start = (y as usize * img.cols() + x as usize) * C;
        img.as_slice_mut()[start..start + C].copy_from_slice(&color);
    }
}

/// Draws a line of text on an image inplace using an 8x8 bitmap font.
///
/// Characters without a glyph in the basic latin block are rendered as blanks.
/// Pixels falling outside the image are clipped.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `text` - The text to render.
/// * `origin` - The bottom-left corner of the text as a tuple of (x, y).
/// * `color` - The color of the text as an array of `C` elements.
/// * `scale` - Integer magnification of each glyph pixel, at least 1.
pub fn draw_text<const C: usize>(
    img: &mut Image<u8, C>,
    text: &str,
    origin: (i64, i64),
    color: [u8; C],
    scale: usize,
) {
    let scale = scale.max(1) as i64;
    let glyph = GLYPH_SIZE as i64 * scale;
    let (x0, y0) = (origin.0, origin.1 - glyph);

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let gx = x0 + i as i64 * glyph;

        for (gy, &bits) in rows.iter().enumerate() {
            for bit in 0..GLYPH_SIZE {
                if bits & (1 << bit) == 0 {
                    continue;
                }
                let px = gx + bit as i64 * scale;
                let py = y0 + gy as i64 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        set_pixel(img, px + dx, py + dy, color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripeness_image::{ImageError, ImageSize};

    fn count_color<const C: usize>(img: &Image<u8, C>, color: [u8; C]) -> usize {
        img.as_slice()
            .chunks_exact(C)
            .filter(|p| *p == color)
            .count()
    }

    #[test]
    fn test_draw_text_stays_in_box() -> Result<(), ImageError> {
        let mut img = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 64,
                height: 32,
            },
            0,
        )?;

        draw_text(&mut img, "Hi", (4, 20), [255, 255, 0], 1);

        let drawn = count_color(&img, [255, 255, 0]);
        assert!(drawn > 0);

        // every drawn pixel lies inside the 16x8 box above the baseline
        for y in 0..img.rows() {
            for x in 0..img.cols() {
                if img.pixel(x, y) == Some(&[255, 255, 0][..]) {
                    assert!((4..20).contains(&x), "x = {x}");
                    assert!((12..20).contains(&y), "y = {y}");
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_draw_text_scale() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 64,
            height: 64,
        };
        let mut small = Image::<u8, 1>::from_size_val(size, 0)?;
        let mut large = Image::<u8, 1>::from_size_val(size, 0)?;

        draw_text(&mut small, "A", (0, 30), [255], 1);
        draw_text(&mut large, "A", (0, 30), [255], 2);

        assert_eq!(count_color(&large, [255]), 4 * count_color(&small, [255]));
        Ok(())
    }

    #[test]
    fn test_draw_text_clipped() -> Result<(), ImageError> {
        let mut img = Image::<u8, 1>::from_size_val([4, 4].into(), 0)?;
        draw_text(&mut img, "Dominant", (-10, 2), [255], 3);
        assert_eq!(img.as_slice().len(), 16);
        Ok(())
    }
}

use ripeness_image::{Image, ImageSize};
use ripeness_imgproc::{
    color,
    core::{add_weighted, hconcat, paste, vconcat},
    draw::draw_text,
    interpolation::InterpolationMode,
    resize::resize,
};

use crate::config::CompositeConfig;
use crate::error::RipenessError;
use crate::segment::Mask;

const CAPTION_ANCHOR: (i64, i64) = (20, 40);
const CAPTION_COLOR: [u8; 3] = [0, 255, 255];

const BAND_LABEL_ANCHOR: (i64, i64) = (15, 40);
const BAND_LABEL_COLOR: [u8; 3] = [255, 255, 0];

const DOMINANT_X: i64 = 20;
const DOMINANT_MARGIN: i64 = 10;
const DOMINANT_COLOR: [u8; 3] = [0, 255, 0];

const MASK_WEIGHT: f32 = 1.0;
const LABEL_WEIGHT: f32 = 0.6;

const TEXT_SCALE: usize = 2;

/// One band's cleaned mask with its label and coverage.
#[derive(Debug, Clone, Copy)]
pub struct BandPanel<'a> {
    /// Band label.
    pub label: &'a str,
    /// Cleaned mask of the band.
    pub mask: &'a Mask,
    /// Coverage of the mask in percent.
    pub percentage: f64,
}

/// Renders the diagnostic composite.
///
/// The layout is the original on top, centred over one panel per band, with
/// the dominant label written across the bottom.
#[derive(Debug, Clone)]
pub struct DiagnosticComposer {
    canvas: ImageSize,
    original_caption: String,
    interpolation: InterpolationMode,
}

impl DiagnosticComposer {
    /// Create a composer from its configuration.
    pub fn new(config: &CompositeConfig) -> Self {
        Self {
            canvas: config.canvas,
            original_caption: config.original_caption.clone(),
            interpolation: config.interpolation,
        }
    }

    fn fit_to_canvas(&self, src: &Image<u8, 3>) -> Result<Image<u8, 3>, RipenessError> {
        let mut dst = Image::from_size_val(self.canvas, 0u8)?;
        resize(src, &mut dst, self.interpolation)?;
        Ok(dst)
    }

    fn annotate_original(&self, original: &Image<u8, 3>) -> Result<Image<u8, 3>, RipenessError> {
        let mut annotated = original.clone();
        draw_text(
            &mut annotated,
            &self.original_caption,
            CAPTION_ANCHOR,
            CAPTION_COLOR,
            TEXT_SCALE,
        );
        self.fit_to_canvas(&annotated)
    }

    fn annotate_panel(&self, panel: &BandPanel) -> Result<Image<u8, 3>, RipenessError> {
        let mut mask_rgb = Image::from_size_val(panel.mask.size(), 0u8)?;
        color::rgb_from_gray(panel.mask, &mut mask_rgb)?;

        let mut label_layer = Image::from_size_val(panel.mask.size(), 0u8)?;
        draw_text(
            &mut label_layer,
            &format!("{} ({:.1}%)", panel.label, panel.percentage),
            BAND_LABEL_ANCHOR,
            BAND_LABEL_COLOR,
            TEXT_SCALE,
        );

        let mut blended = Image::from_size_val(panel.mask.size(), 0u8)?;
        add_weighted(
            &mask_rgb,
            MASK_WEIGHT,
            &label_layer,
            LABEL_WEIGHT,
            0.0,
            &mut blended,
        )?;

        self.fit_to_canvas(&blended)
    }

    /// Build the composite for one image.
    ///
    /// # Arguments
    ///
    /// * `original` - The decoded RGB image.
    /// * `panels` - One entry per band, in declaration order.
    /// * `dominant` - Label of the dominant band.
    ///
    /// # Returns
    ///
    /// An image `max(1, N) * canvas.width` wide and `2 * canvas.height` tall.
    pub fn compose(
        &self,
        original: &Image<u8, 3>,
        panels: &[BandPanel],
        dominant: &str,
    ) -> Result<Image<u8, 3>, RipenessError> {
        if original.size().is_empty() {
            return Err(RipenessError::InvalidImage(format!(
                "cannot compose an image of size {}",
                original.size()
            )));
        }

        let top_panel = self.annotate_original(original)?;

        let bottom_panels = panels
            .iter()
            .map(|panel| self.annotate_panel(panel))
            .collect::<Result<Vec<_>, _>>()?;

        let row_width = self.canvas.width * bottom_panels.len().max(1);

        // centre the original over the band panels
        let mut top_row = Image::from_size_val(
            ImageSize {
                width: row_width,
                height: self.canvas.height,
            },
            0u8,
        )?;
        paste(
            &mut top_row,
            &top_panel,
            ((row_width - self.canvas.width) / 2, 0),
        )?;

        let mut composite = if bottom_panels.is_empty() {
            top_row
        } else {
            let bottom_row = hconcat(&bottom_panels)?;
            vconcat(&[top_row, bottom_row])?
        };

        let baseline = composite.height() as i64 - DOMINANT_MARGIN;
        draw_text(
            &mut composite,
            &format!("Dominant: {dominant}"),
            (DOMINANT_X, baseline),
            DOMINANT_COLOR,
            TEXT_SCALE,
        );

        Ok(composite)
    }
}

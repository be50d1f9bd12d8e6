use std::collections::HashSet;

use ripeness_image::ImageSize;
use ripeness_imgproc::interpolation::InterpolationMode;
use serde::{Deserialize, Serialize};

use crate::band::{default_bands, Band};
use crate::error::RipenessError;

/// Configuration of the whole pipeline.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Bands in declaration order. The order decides dominant-band ties.
    pub bands: Vec<Band>,
    /// Side of the square gaussian kernel applied to the HSV image.
    pub blur_kernel_size: usize,
    /// Side of the square structuring element used to clean masks.
    pub morph_kernel_size: usize,
    /// Layout of the diagnostic composite.
    pub composite: CompositeConfig,
    /// Artifact output settings.
    pub output: OutputConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bands: default_bands(),
            blur_kernel_size: 5,
            morph_kernel_size: 5,
            composite: CompositeConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Layout of the diagnostic composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    /// Size every panel is resized to.
    pub canvas: ImageSize,
    /// Caption drawn on the original image.
    pub original_caption: String,
    /// Interpolation used when resizing panels.
    pub interpolation: InterpolationMode,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            canvas: ImageSize {
                width: 300,
                height: 300,
            },
            original_caption: "Original image".to_string(),
            interpolation: InterpolationMode::Bilinear,
        }
    }
}

/// Artifact output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File extension of the composite, which also selects the encoder.
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: "jpg".to_string(),
        }
    }
}

fn check_kernel_size(name: &str, size: usize) -> Result<(), RipenessError> {
    if size == 0 || size % 2 == 0 {
        return Err(RipenessError::InvalidConfig(format!(
            "{name} must be odd and positive, got {size}"
        )));
    }
    Ok(())
}

impl PipelineConfig {
    /// Check every field of the configuration.
    ///
    /// # Errors
    ///
    /// Band problems are reported as [`RipenessError::InvalidBandConfig`],
    /// everything else as [`RipenessError::InvalidConfig`].
    pub fn validate(&self) -> Result<(), RipenessError> {
        if self.bands.is_empty() {
            return Err(RipenessError::InvalidBandConfig {
                label: String::new(),
                reason: "at least one band is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for band in &self.bands {
            band.validate()?;
            if !seen.insert(band.label.as_str()) {
                return Err(RipenessError::InvalidBandConfig {
                    label: band.label.clone(),
                    reason: "label is declared twice".to_string(),
                });
            }
        }

        check_kernel_size("blur_kernel_size", self.blur_kernel_size)?;
        check_kernel_size("morph_kernel_size", self.morph_kernel_size)?;

        if self.composite.canvas.is_empty() {
            return Err(RipenessError::InvalidConfig(format!(
                "canvas must be non-empty, got {}",
                self.composite.canvas
            )));
        }

        let ext = self.output.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(RipenessError::InvalidConfig(
                "output extension is empty".to_string(),
            ));
        }

        Ok(())
    }
}

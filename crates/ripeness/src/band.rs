use serde::{Deserialize, Serialize};

use crate::error::RipenessError;

/// A named color classification rule.
///
/// Bounds are inclusive HSV triples in the 8-bit convention: hue in
/// half-degrees `[0, 180)`, saturation and value in `[0, 255]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Human readable label, e.g. `Green`.
    pub label: String,
    /// Lower HSV bound, inclusive.
    pub lower: [u8; 3],
    /// Upper HSV bound, inclusive.
    pub upper: [u8; 3],
}

impl Band {
    /// Create a band, checking its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RipenessError::InvalidBandConfig`] if the label is empty or
    /// `lower > upper` on any channel.
    ///
    /// # Example
    ///
    /// ```
    /// use ripeness::Band;
    ///
    /// let band = Band::new("Green", [35, 50, 50], [85, 255, 255]).unwrap();
    /// assert_eq!(band.label, "Green");
    ///
    /// assert!(Band::new("Broken", [90, 0, 0], [10, 255, 255]).is_err());
    /// ```
    pub fn new(
        label: impl Into<String>,
        lower: [u8; 3],
        upper: [u8; 3],
    ) -> Result<Self, RipenessError> {
        let band = Self {
            label: label.into(),
            lower,
            upper,
        };
        band.validate()?;
        Ok(band)
    }

    /// Check the band invariants.
    pub fn validate(&self) -> Result<(), RipenessError> {
        if self.label.trim().is_empty() {
            return Err(RipenessError::InvalidBandConfig {
                label: self.label.clone(),
                reason: "label is empty".to_string(),
            });
        }

        for (c, (lo, hi)) in self.lower.iter().zip(self.upper.iter()).enumerate() {
            if lo > hi {
                return Err(RipenessError::InvalidBandConfig {
                    label: self.label.clone(),
                    reason: format!("lower {lo} > upper {hi} on channel {c}"),
                });
            }
        }

        Ok(())
    }

    /// Whether an HSV pixel lies inside the band.
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// The default band table in declaration order: Green, Orange, Red.
pub fn default_bands() -> Vec<Band> {
    vec![
        Band {
            label: "Green".to_string(),
            lower: [35, 50, 50],
            upper: [85, 255, 255],
        },
        Band {
            label: "Orange".to_string(),
            lower: [10, 100, 100],
            upper: [25, 255, 255],
        },
        Band {
            label: "Red".to_string(),
            lower: [0, 100, 100],
            upper: [10, 255, 255],
        },
    ]
}

use indexmap::IndexMap;
use serde::Serialize;

use crate::segment::Mask;

/// Percentage of set pixels in a mask, in `[0, 100]`.
///
/// An empty mask has no coverage.
///
/// # Example
///
/// ```
/// use ripeness::segment::Mask;
/// use ripeness::coverage::coverage_percentage;
///
/// let mask = Mask::new([4, 1].into(), vec![255, 0, 0, 255]).unwrap();
/// assert_eq!(coverage_percentage(&mask), 50.0);
/// ```
pub fn coverage_percentage(mask: &Mask) -> f64 {
    let total = mask.size().area();
    if total == 0 {
        return 0.0;
    }
    let set = mask.as_slice().iter().filter(|&&v| v != 0).count();
    set as f64 / total as f64 * 100.0
}

/// Coverage per band label, kept in band declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CoverageMap(IndexMap<String, f64>);

impl CoverageMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the coverage of a band. A label seen before keeps its position.
    pub fn insert(&mut self, label: impl Into<String>, percentage: f64) {
        self.0.insert(label.into(), percentage);
    }

    /// Coverage of a band, if recorded.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    /// Iterate over `(label, percentage)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, pct)| (label.as_str(), *pct))
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no band is recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for CoverageMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Label with the highest coverage.
///
/// Ties go to the first label in declaration order. Returns `None` for an
/// empty map.
pub fn select_dominant(coverage: &CoverageMap) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (label, pct) in coverage.iter() {
        match best {
            Some((_, best_pct)) if pct <= best_pct => {}
            _ => best = Some((label, pct)),
        }
    }
    best.map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripeness_image::ImageError;

    fn map(entries: &[(&str, f64)]) -> CoverageMap {
        entries
            .iter()
            .map(|(label, pct)| (label.to_string(), *pct))
            .collect()
    }

    #[test]
    fn test_coverage_bounds() -> Result<(), ImageError> {
        let empty = Mask::from_size_val([5, 5].into(), 0)?;
        let full = Mask::from_size_val([5, 5].into(), 255)?;
        assert_eq!(coverage_percentage(&empty), 0.0);
        assert_eq!(coverage_percentage(&full), 100.0);
        Ok(())
    }

    #[test]
    fn test_coverage_fraction() -> Result<(), ImageError> {
        let mask = Mask::new([3, 1].into(), vec![255, 0, 0])?;
        approx::assert_relative_eq!(coverage_percentage(&mask), 100.0 / 3.0);
        Ok(())
    }

    #[test]
    fn test_coverage_zero_area() -> Result<(), ImageError> {
        let mask = Mask::new([0, 0].into(), vec![])?;
        assert_eq!(coverage_percentage(&mask), 0.0);
        Ok(())
    }

    #[test]
    fn test_dominant_max() {
        let coverage = map(&[("Green", 10.0), ("Orange", 62.5), ("Red", 30.0)]);
        assert_eq!(select_dominant(&coverage), Some("Orange"));
    }

    #[test]
    fn test_dominant_tie_goes_to_first() {
        let coverage = map(&[("Green", 0.0), ("Orange", 0.0), ("Red", 0.0)]);
        assert_eq!(select_dominant(&coverage), Some("Green"));

        let coverage = map(&[("Green", 5.0), ("Orange", 40.0), ("Red", 40.0)]);
        assert_eq!(select_dominant(&coverage), Some("Orange"));
    }

    #[test]
    fn test_dominant_follows_insertion_order() {
        // reverse alphabetical so a sorted map would pick differently
        let coverage = map(&[("Red", 50.0), ("Green", 50.0)]);
        assert_eq!(select_dominant(&coverage), Some("Red"));
    }

    #[test]
    fn test_dominant_empty() {
        assert_eq!(select_dominant(&CoverageMap::new()), None);
    }

    #[test]
    fn test_serialize_ordered() -> Result<(), serde_json::Error> {
        let coverage = map(&[("Orange", 1.5), ("Green", 0.25)]);
        let json = serde_json::to_string(&coverage)?;
        assert_eq!(json, r#"{"Orange":1.5,"Green":0.25}"#);
        Ok(())
    }
}

use std::path::{Path, PathBuf};

use ripeness_image::Image;
use ripeness_io::functional::write_image_rgb8;
use serde::Serialize;

use crate::coverage::CoverageMap;
use crate::error::RipenessError;

/// Directory where composites are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Output directory, created on first write.
    pub directory: PathBuf,
}

impl Destination {
    /// Create a destination rooted at `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Path of the composite for `base_name`: `{directory}/{base_name}_combined.{extension}`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    /// use ripeness::Destination;
    ///
    /// let dest = Destination::new("out");
    /// assert_eq!(
    ///     dest.artifact_path("banana", "jpg"),
    ///     Path::new("out").join("banana_combined.jpg")
    /// );
    /// ```
    pub fn artifact_path(&self, base_name: &str, extension: &str) -> PathBuf {
        let extension = extension.trim_start_matches('.');
        self.directory
            .join(format!("{base_name}_combined.{extension}"))
    }
}

/// The result of processing one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageReport {
    /// Identifier of the input, usually its path.
    pub source: String,
    /// Coverage per band, in declaration order.
    pub coverage: CoverageMap,
    /// Label of the dominant band.
    pub dominant: String,
    /// Where the composite was written.
    pub artifact_path: PathBuf,
    /// Set when the display sink failed to show the written composite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_error: Option<String>,
}

impl std::fmt::Display for ImageReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Results for {}:", self.source)?;
        for (label, pct) in self.coverage.iter() {
            writeln!(f, "  {label}: {pct:.2}%")?;
        }
        writeln!(f, "  Dominant: {}", self.dominant)?;
        write!(f, "  Composite saved to {}", self.artifact_path.display())?;
        if let Some(err) = &self.display_error {
            write!(f, "\n  Display failed: {err}")?;
        }
        Ok(())
    }
}

/// Persists composites and emits the per-image summary.
#[derive(Debug, Clone)]
pub struct ResultReporter {
    extension: String,
}

impl ResultReporter {
    /// Create a reporter writing composites with the given file extension.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Write the composite and build the report.
    ///
    /// The destination directory is created if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`RipenessError::Write`] if the directory cannot be created or
    /// the composite cannot be encoded to it.
    pub fn report(
        &self,
        source: &str,
        base_name: &str,
        composite: &Image<u8, 3>,
        coverage: CoverageMap,
        dominant: String,
        destination: &Destination,
    ) -> Result<ImageReport, RipenessError> {
        ensure_directory(&destination.directory)?;

        let artifact_path = destination.artifact_path(base_name, &self.extension);
        write_image_rgb8(&artifact_path, composite).map_err(|source| RipenessError::Write {
            path: artifact_path.clone(),
            source,
        })?;

        let report = ImageReport {
            source: source.to_string(),
            coverage,
            dominant,
            artifact_path,
            display_error: None,
        };
        log::info!("{report}");

        Ok(report)
    }
}

fn ensure_directory(directory: &Path) -> Result<(), RipenessError> {
    std::fs::create_dir_all(directory).map_err(|err| RipenessError::Write {
        path: directory.to_path_buf(),
        source: err.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage() -> CoverageMap {
        [("Green".to_string(), 75.0), ("Orange".to_string(), 12.5)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_artifact_path() {
        let dest = Destination::new("/tmp/results");
        assert_eq!(
            dest.artifact_path("apple", ".png"),
            PathBuf::from("/tmp/results/apple_combined.png")
        );
    }

    #[test]
    fn test_report_writes_artifact() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        // nested directories are created on demand
        let dest = Destination::new(tmp_dir.path().join("a").join("b"));
        let composite = Image::from_size_pixel([8, 8].into(), [10u8, 20, 30])?;

        let reporter = ResultReporter::new("png");
        let report = reporter.report(
            "fruit/apple.jpg",
            "apple",
            &composite,
            coverage(),
            "Green".to_string(),
            &dest,
        )?;

        assert_eq!(report.artifact_path, dest.artifact_path("apple", "png"));
        assert!(report.artifact_path.exists());

        // writing again to the same directory is fine
        reporter.report(
            "fruit/apple.jpg",
            "apple",
            &composite,
            coverage(),
            "Green".to_string(),
            &dest,
        )?;
        Ok(())
    }

    #[test]
    fn test_report_unwritable_destination() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let blocker = tmp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, b"")?;

        let composite = Image::from_size_val([4, 4].into(), 0u8)?;
        let res = ResultReporter::new("jpg").report(
            "x",
            "x",
            &composite,
            coverage(),
            "Green".to_string(),
            &Destination::new(&blocker),
        );

        assert!(matches!(res, Err(RipenessError::Write { .. })));
        Ok(())
    }

    #[test]
    fn test_display() {
        let report = ImageReport {
            source: "apple.jpg".to_string(),
            coverage: coverage(),
            dominant: "Green".to_string(),
            artifact_path: PathBuf::from("out/apple_combined.jpg"),
            display_error: None,
        };

        let text = report.to_string();
        assert_eq!(
            text,
            "Results for apple.jpg:\n  Green: 75.00%\n  Orange: 12.50%\n  Dominant: Green\n  Composite saved to out/apple_combined.jpg"
        );
    }

    #[test]
    fn test_display_with_display_error() {
        let report = ImageReport {
            source: "apple.jpg".to_string(),
            coverage: coverage(),
            dominant: "Green".to_string(),
            artifact_path: PathBuf::from("out/apple_combined.jpg"),
            display_error: Some("window closed".to_string()),
        };

        assert!(report
            .to_string()
            .ends_with("out/apple_combined.jpg\n  Display failed: window closed"));
    }

    #[test]
    fn test_serialize() -> Result<(), serde_json::Error> {
        let report = ImageReport {
            source: "apple.jpg".to_string(),
            coverage: coverage(),
            dominant: "Green".to_string(),
            artifact_path: PathBuf::from("out/apple_combined.jpg"),
            display_error: None,
        };

        let value = serde_json::to_value(&report)?;
        assert_eq!(value["dominant"], "Green");
        assert_eq!(value["coverage"]["Orange"], 12.5);
        assert_eq!(value["artifact_path"], "out/apple_combined.jpg");
        assert!(value.get("display_error").is_none());
        Ok(())
    }
}

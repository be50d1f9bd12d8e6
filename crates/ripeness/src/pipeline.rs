use std::path::Path;

use ripeness_image::Image;
use ripeness_io::functional::read_image_any_rgb8;
use serde::Serialize;

use crate::composite::{BandPanel, DiagnosticComposer};
use crate::config::PipelineConfig;
use crate::coverage::{coverage_percentage, select_dominant, CoverageMap};
use crate::display::DisplaySink;
use crate::error::{BatchAborted, ErrorKind, RipenessError};
use crate::report::{Destination, ImageReport, ResultReporter};
use crate::segment::{band_mask, ColorSpaceConverter, Mask, MaskCleaner};

/// What the pipeline measured on one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Coverage per band, in declaration order.
    pub coverage: CoverageMap,
    /// Label of the dominant band.
    pub dominant: String,
    /// Cleaned mask per band, in declaration order.
    pub masks: Vec<Mask>,
}

/// Outcome of one batch input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchRecord {
    /// The image was processed and its composite written.
    Success(ImageReport),
    /// The image was skipped.
    Failure {
        /// Identifier of the input.
        source: String,
        /// Category of the error.
        kind: ErrorKind,
        /// Human readable error.
        message: String,
    },
}

/// One record per batch input, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// The records.
    pub records: Vec<BatchRecord>,
}

impl BatchReport {
    /// Reports of the images that were processed.
    pub fn successes(&self) -> impl Iterator<Item = &ImageReport> {
        self.records.iter().filter_map(|record| match record {
            BatchRecord::Success(report) => Some(report),
            BatchRecord::Failure { .. } => None,
        })
    }

    /// Number of inputs that failed.
    pub fn failure_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| matches!(record, BatchRecord::Failure { .. }))
            .count()
    }
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in &self.records {
            match record {
                BatchRecord::Success(report) => writeln!(f, "{report}")?,
                BatchRecord::Failure {
                    source,
                    kind,
                    message,
                } => writeln!(f, "Skipped {source} ({kind}): {message}")?,
            }
        }
        Ok(())
    }
}

/// The color-band classification pipeline.
///
/// # Example
///
/// ```
/// use ripeness::{Pipeline, PipelineConfig};
/// use ripeness_image::Image;
///
/// let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
/// let image = Image::from_size_pixel([16, 16].into(), [255u8, 128, 0]).unwrap();
///
/// let analysis = pipeline.analyze(&image).unwrap();
/// assert_eq!(analysis.dominant, "Orange");
/// assert_eq!(analysis.coverage.get("Orange"), Some(100.0));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    converter: ColorSpaceConverter,
    cleaner: MaskCleaner,
    composer: DiagnosticComposer,
    reporter: ResultReporter,
}

impl Pipeline {
    /// Create a pipeline, validating the configuration.
    pub fn new(config: PipelineConfig) -> Result<Self, RipenessError> {
        config.validate()?;

        Ok(Self {
            converter: ColorSpaceConverter::new(config.blur_kernel_size),
            cleaner: MaskCleaner::new(config.morph_kernel_size)?,
            composer: DiagnosticComposer::new(&config.composite),
            reporter: ResultReporter::new(config.output.extension.clone()),
            config,
        })
    }

    /// The configuration the pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Measure the band coverage of an RGB image.
    ///
    /// # Errors
    ///
    /// Returns [`RipenessError::InvalidImage`] for an image with a zero
    /// dimension.
    pub fn analyze(&self, image: &Image<u8, 3>) -> Result<Analysis, RipenessError> {
        let hsv = self.converter.convert(image)?;

        let mut coverage = CoverageMap::new();
        let mut masks = Vec::with_capacity(self.config.bands.len());
        for band in &self.config.bands {
            let raw = band_mask(&hsv, band)?;
            let cleaned = self.cleaner.clean(&raw)?;
            let pct = coverage_percentage(&cleaned);
            log::debug!("band {}: {:.2}%", band.label, pct);

            coverage.insert(band.label.clone(), pct);
            masks.push(cleaned);
        }

        let dominant = select_dominant(&coverage)
            .ok_or_else(|| RipenessError::InvalidConfig("no bands configured".to_string()))?
            .to_string();

        Ok(Analysis {
            coverage,
            dominant,
            masks,
        })
    }

    /// Render the diagnostic composite of an analysed image.
    pub fn compose(
        &self,
        image: &Image<u8, 3>,
        analysis: &Analysis,
    ) -> Result<Image<u8, 3>, RipenessError> {
        let panels: Vec<BandPanel> = analysis
            .coverage
            .iter()
            .zip(analysis.masks.iter())
            .map(|((label, percentage), mask)| BandPanel {
                label,
                mask,
                percentage,
            })
            .collect();

        self.composer.compose(image, &panels, &analysis.dominant)
    }

    fn run(
        &self,
        source: &str,
        base_name: &str,
        image: &Image<u8, 3>,
        destination: &Destination,
    ) -> Result<(ImageReport, Image<u8, 3>), RipenessError> {
        log::debug!("processing {source} ({})", image.size());
        let analysis = self.analyze(image)?;
        let composite = self.compose(image, &analysis)?;
        let report = self.reporter.report(
            source,
            base_name,
            &composite,
            analysis.coverage,
            analysis.dominant,
            destination,
        )?;
        Ok((report, composite))
    }

    /// Analyse an in-memory image and write its composite.
    ///
    /// `name` identifies the image in the report and names the artifact.
    pub fn process_image(
        &self,
        name: &str,
        image: &Image<u8, 3>,
        destination: &Destination,
    ) -> Result<ImageReport, RipenessError> {
        let (report, _) = self.run(name, name, image, destination)?;
        Ok(report)
    }

    fn load_and_run(
        &self,
        path: &Path,
        destination: &Destination,
    ) -> Result<(ImageReport, Image<u8, 3>), RipenessError> {
        let image = read_image_any_rgb8(path)?;
        let source = path.display().to_string();
        self.run(&source, &base_name(path), &image, destination)
    }

    /// Load an image from disk, analyse it and write its composite.
    ///
    /// The artifact is named after the file stem of `path`.
    pub fn process_path(
        &self,
        path: impl AsRef<Path>,
        destination: &Destination,
    ) -> Result<ImageReport, RipenessError> {
        let (report, _) = self.load_and_run(path.as_ref(), destination)?;
        Ok(report)
    }

    /// Process images one at a time.
    ///
    /// Every input yields a [`BatchRecord`]. Inputs that cannot be loaded or
    /// processed are recorded as failures and the batch moves on. Each
    /// composite is handed to `display` after it is written; a display error
    /// is kept on the success record as `display_error`.
    ///
    /// # Errors
    ///
    /// A [`RipenessError::Write`] stops the batch. The returned
    /// [`BatchAborted`] carries the records gathered so far, ending with a
    /// failure record for the input that could not be written.
    pub fn run_batch<I, P>(
        &self,
        paths: I,
        destination: &Destination,
        display: &mut dyn DisplaySink,
    ) -> Result<BatchReport, BatchAborted>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut batch = BatchReport::default();

        for path in paths {
            let path = path.as_ref();
            let source = path.display().to_string();

            let err = match self.load_and_run(path, destination) {
                Ok((mut report, composite)) => {
                    if let Err(err) = display.show(&source, &composite) {
                        log::warn!("could not display {source}: {err}");
                        report.display_error = Some(err.to_string());
                    }
                    batch.records.push(BatchRecord::Success(report));
                    continue;
                }
                Err(err) => err,
            };

            batch.records.push(BatchRecord::Failure {
                source: source.clone(),
                kind: err.kind(),
                message: err.to_string(),
            });

            if !err.is_recoverable() {
                log::error!("aborting batch at {source}: {err}");
                return Err(BatchAborted {
                    report: batch,
                    source: err,
                });
            }
            log::warn!("skipping {source}: {err}");
        }

        Ok(batch)
    }
}

fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

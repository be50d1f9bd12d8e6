#![deny(missing_docs)]
//! Color-band ripeness classification of produce images.
//!
//! An RGB image is converted to smoothed HSV, thresholded once per
//! configured [`Band`], and each mask is cleaned with a morphological
//! opening followed by a closing. The share of set pixels per mask gives a
//! [`CoverageMap`], whose maximum (first band wins ties) is the dominant
//! band. A diagnostic composite showing the original and every mask is
//! written next to a textual [`ImageReport`].
//!
//! ```no_run
//! use ripeness::{Destination, NoDisplay, Pipeline, PipelineConfig};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default())?;
//! let batch = pipeline.run_batch(
//!     ["fruit/banana.jpg", "fruit/lime.jpg"],
//!     &Destination::new("results"),
//!     &mut NoDisplay,
//! )?;
//! println!("{batch}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Band definitions and the default band table.
pub mod band;

/// Diagnostic composite rendering.
pub mod composite;

/// Pipeline configuration.
pub mod config;

/// Coverage measurement and dominant band selection.
pub mod coverage;

/// Display sinks for finished composites.
pub mod display;

/// Error types for the pipeline.
pub mod error;

/// The pipeline and its batch driver.
pub mod pipeline;

/// Artifact writing and per-image reports.
pub mod report;

/// HSV conversion, band thresholding and mask cleaning.
pub mod segment;

pub use crate::band::{default_bands, Band};
pub use crate::config::{CompositeConfig, OutputConfig, PipelineConfig};
pub use crate::coverage::{select_dominant, CoverageMap};
pub use crate::display::{DisplaySink, NoDisplay};
pub use crate::error::{BatchAborted, ErrorKind, RipenessError};
pub use crate::pipeline::{Analysis, BatchRecord, BatchReport, Pipeline};
pub use crate::report::{Destination, ImageReport, ResultReporter};

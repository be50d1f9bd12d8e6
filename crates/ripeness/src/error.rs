use std::path::PathBuf;

use ripeness_image::ImageError;
use ripeness_imgproc::morphology::MorphologyError;
use ripeness_io::IoError;
use serde::Serialize;

use crate::pipeline::BatchReport;

/// An error type for the ripeness pipeline.
#[derive(thiserror::Error, Debug)]
pub enum RipenessError {
    /// The input image is empty or has a zero dimension.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// A band definition is malformed.
    #[error("Invalid band `{label}`: {reason}")]
    InvalidBandConfig {
        /// Label of the offending band.
        label: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A non-band field of the pipeline configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The image could not be loaded or decoded.
    #[error("Failed to load the image. {0}")]
    Load(#[from] IoError),

    /// The composite could not be persisted.
    #[error("Failed to write {path}. {source}")]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying storage error.
        source: IoError,
    },

    /// The display sink rejected the composite.
    #[error("Failed to display the image. {0}")]
    Display(String),

    /// Error from an image operation.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from a morphological operation.
    #[error(transparent)]
    Morphology(#[from] MorphologyError),
}

impl RipenessError {
    /// Whether a batch may record this error against one image and move on.
    ///
    /// Only write failures abort a batch.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RipenessError::Write { .. })
    }

    /// The category of the error, as recorded in batch reports.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RipenessError::InvalidImage(_) => ErrorKind::InvalidImage,
            RipenessError::InvalidBandConfig { .. } => ErrorKind::InvalidBandConfig,
            RipenessError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            RipenessError::Load(_) => ErrorKind::Load,
            RipenessError::Write { .. } => ErrorKind::Write,
            RipenessError::Display(_) => ErrorKind::Display,
            RipenessError::Image(_) | RipenessError::Morphology(_) => ErrorKind::Processing,
        }
    }
}

/// A batch stopped early by an unrecoverable error.
///
/// `report` holds a record for every input attempted before the abort, the
/// failing input included. Inputs after it were not attempted.
#[derive(thiserror::Error, Debug)]
#[error("Batch aborted after {} inputs. {source}", .report.records.len())]
pub struct BatchAborted {
    /// Records of the inputs attempted so far.
    pub report: BatchReport,
    /// The error that stopped the batch.
    pub source: RipenessError,
}

/// Error categories of [`RipenessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`RipenessError::InvalidImage`].
    InvalidImage,
    /// See [`RipenessError::InvalidBandConfig`].
    InvalidBandConfig,
    /// See [`RipenessError::InvalidConfig`].
    InvalidConfig,
    /// See [`RipenessError::Load`].
    Load,
    /// See [`RipenessError::Write`].
    Write,
    /// See [`RipenessError::Display`].
    Display,
    /// Image or morphology operation failure.
    Processing,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::InvalidImage => "invalid image",
            ErrorKind::InvalidBandConfig => "invalid band config",
            ErrorKind::InvalidConfig => "invalid config",
            ErrorKind::Load => "load",
            ErrorKind::Write => "write",
            ErrorKind::Display => "display",
            ErrorKind::Processing => "processing",
        };
        f.write_str(name)
    }
}

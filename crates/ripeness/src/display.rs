use ripeness_image::Image;

use crate::error::RipenessError;

/// Somewhere to show a finished composite.
///
/// Invoked after the composite has been written, so a failing sink never
/// loses an artifact.
pub trait DisplaySink {
    /// Show `image` under `title`. May block until the viewer is dismissed.
    fn show(&mut self, title: &str, image: &Image<u8, 3>) -> Result<(), RipenessError>;
}

/// A sink that shows nothing, for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisplay;

impl DisplaySink for NoDisplay {
    fn show(&mut self, _title: &str, _image: &Image<u8, 3>) -> Result<(), RipenessError> {
        Ok(())
    }
}

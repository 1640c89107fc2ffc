//! Image checks run before anything is sent.

use crate::{UploadError, UploadResult, WidgetConfig};

/// Result of probing a file as an image.
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    /// Local object URL the image was loaded from.
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Size requirement for the logo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageRule {
    pub size: u32,
}

impl ImageRule {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.logo_size)
    }

    /// Rejects the image if either side differs from the required size.
    pub fn check(&self, width: u32, height: u32) -> UploadResult<()> {
        if width != self.size || height != self.size {
            return Err(UploadError::NotSquare {
                size: self.size,
                width,
                height,
            });
        }
        Ok(())
    }

    pub fn check_preview(&self, preview: &Preview) -> UploadResult<()> {
        self.check(preview.width, preview.height)
    }
}

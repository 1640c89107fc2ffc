//! Error types for the upload widget.
//!
//! Every failure the widget can hit ends up as an [`UploadError`] and is
//! shown to the user through [`crate::Host::alert`]. The `Display` text is
//! the user-facing message.

use thiserror::Error;

/// Errors raised while accepting, validating or uploading a file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    /// A drop or selection carried no file.
    #[error("Can't find file")]
    MissingFile,

    /// The file input reported no file list at all.
    #[error("Can't send file")]
    NoFileList,

    /// Picked file does not carry an accepted extension.
    #[error("Unsupported file type: {name}")]
    UnsupportedType { name: String },

    /// Image dimensions do not match the required square size.
    #[error("Logo should be square, {size}px size")]
    NotSquare { size: u32, width: u32, height: u32 },

    /// The browser could not decode the file as an image.
    #[error("Can't read image: {0}")]
    ImageLoad(String),

    /// The upload request failed at the transport level.
    #[error("Upload failed: {0}")]
    Transport(String),
}

/// Result type for widget operations.
pub type UploadResult<T> = Result<T, UploadError>;

//! Widget configuration.
//!
//! Defaults are hardcoded constants. A [`WidgetConfig`] can override them,
//! either built in code or deserialized from JSON.

use serde::{Deserialize, Serialize};

/// Upload endpoint used when none is configured.
///
/// Signed storage URL; the object it addresses is the uploaded logo.
pub const DEFAULT_UPLOAD_ENDPOINT: &str =
    "http://storage-upload.googleapis.com/upload-file-test/1570043487646.JPEG";

/// Required width and height of the logo, in pixels.
pub const LOGO_SIZE: u32 = 100;

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Multipart form field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Runtime configuration for one widget instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Where the multipart POST goes.
    pub endpoint: String,
    /// Required square size in pixels.
    pub logo_size: u32,
    /// Lowercase extensions without the leading dot.
    pub accepted_extensions: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_UPLOAD_ENDPOINT.to_string(),
            logo_size: LOGO_SIZE,
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl WidgetConfig {
    /// Default configuration pointed at another endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Value for the file input's `accept` attribute (`.jpg, .jpeg, .png`).
    pub fn accept_attr(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether a file name ends with one of the accepted extensions.
    pub fn accepts_name(&self, name: &str) -> bool {
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                let ext = ext.to_ascii_lowercase();
                self.accepted_extensions.iter().any(|a| *a == ext)
            }
            _ => false,
        }
    }
}

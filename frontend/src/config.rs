//! Application configuration.
//!
//! Centralized configuration for the Dropzone page. Widget-level defaults
//! (endpoint, logo size, accepted extensions) live in `dropzone::config`.

/// Upload endpoint used by the page's widget.
pub const UPLOAD_ENDPOINT: &str = dropzone::DEFAULT_UPLOAD_ENDPOINT;

/// Console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Widget header title.
pub const HEADER_TITLE: &str = "Company Logo";

/// Widget header description.
pub const HEADER_DESCRIPTION: &str =
    "Logo should be square, 100px size and in png, jpeg file format.";
